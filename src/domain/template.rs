use std::fmt;

/// Kinds of service fragment the orchestration file is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateCategory {
    /// Application runtime images.
    App,
    /// Database engines.
    Database,
    /// Cache engines.
    Cache,
}

impl TemplateCategory {
    /// All categories in composition order.
    pub const ALL: [TemplateCategory; 3] =
        [TemplateCategory::App, TemplateCategory::Database, TemplateCategory::Cache];

    /// Directory name for this category inside the template bundle.
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateCategory::App => "app",
            TemplateCategory::Database => "database",
            TemplateCategory::Cache => "cache",
        }
    }

    /// Parse a category from its directory name.
    pub fn from_dir_name(name: &str) -> Option<TemplateCategory> {
        match name {
            "app" => Some(TemplateCategory::App),
            "database" => Some(TemplateCategory::Database),
            "cache" => Some(TemplateCategory::Cache),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

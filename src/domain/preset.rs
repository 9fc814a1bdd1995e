use std::collections::BTreeMap;

/// File name of the multi-service orchestration document.
pub const ORCHESTRATION_FILE: &str = "docker-compose.yml";

/// Metadata key listing the database choices a preset offers.
pub const META_ASK_DATABASE: &str = "ask_database";

/// A file declared by a preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetFile {
    /// File name relative to the destination directory.
    pub name: String,
    /// Raw file content.
    pub content: String,
}

/// A named bundle of project-initialization files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub id: String,
    pub language: String,
    pub files: Vec<PresetFile>,
    pub meta: BTreeMap<String, String>,
}

impl Preset {
    /// Declared file names in declaration order.
    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(|file| file.name.clone()).collect()
    }

    /// Metadata value for `key`, or an empty string when absent.
    pub fn meta_value(&self, key: &str) -> &str {
        self.meta.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Split an `ask_database` metadata value into its display names.
pub fn database_options(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|option| option.trim().to_string())
        .filter(|option| !option.is_empty())
        .collect()
}

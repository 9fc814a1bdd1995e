use std::collections::BTreeMap;

use crate::adapters::assets::template_assets::load_embedded_templates;
use crate::domain::{AppError, TemplateCategory};
use crate::ports::TemplateStore;

/// Immutable `(category, name) -> raw text` registry.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<(TemplateCategory, String), String>,
}

impl TemplateRegistry {
    /// Build a registry from explicit entries. Later duplicates are rejected.
    pub fn from_entries<I, N, C>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (TemplateCategory, N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut templates = BTreeMap::new();
        for (category, name, content) in entries {
            let name = name.into();
            if templates.insert((category, name.clone()), content.into()).is_some() {
                return Err(AppError::Asset(format!("Duplicate {category} template '{name}'")));
            }
        }
        Ok(Self { templates })
    }

    /// Registry of the templates bundled with the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_entries(
            load_embedded_templates()?
                .into_iter()
                .map(|asset| (asset.category, asset.name, asset.content)),
        )
    }
}

impl TemplateStore for TemplateRegistry {
    fn template(&self, category: TemplateCategory, name: &str) -> Option<&str> {
        self.templates.get(&(category, name.to_string())).map(String::as_str)
    }

    fn names(&self, category: TemplateCategory) -> Vec<String> {
        self.templates
            .keys()
            .filter(|(entry_category, _)| *entry_category == category)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

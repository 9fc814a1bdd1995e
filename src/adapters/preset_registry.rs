use std::collections::HashSet;

use crate::adapters::assets::preset_assets::load_embedded_presets;
use crate::domain::{AppError, Preset, PresetFile};
use crate::ports::PresetCatalog;

/// Immutable, ordered preset registry.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl PresetRegistry {
    /// Build a registry from presets in registration order.
    pub fn from_presets(presets: Vec<Preset>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for preset in &presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(AppError::Asset(format!("Duplicate preset '{}'", preset.id)));
            }
        }
        Ok(Self { presets })
    }

    /// Registry of the presets bundled with the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_presets(load_embedded_presets()?)
    }

    /// All presets in registration order.
    pub fn all(&self) -> &[Preset] {
        &self.presets
    }

    fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }
}

impl PresetCatalog for PresetRegistry {
    fn exists(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for preset in &self.presets {
            if !languages.contains(&preset.language) {
                languages.push(preset.language.clone());
            }
        }
        languages
    }

    fn presets(&self, language: &str) -> Vec<String> {
        self.presets
            .iter()
            .filter(|preset| preset.language == language)
            .map(|preset| preset.id.clone())
            .collect()
    }

    fn meta_value(&self, id: &str, key: &str) -> String {
        self.find(id).map(|preset| preset.meta_value(key).to_string()).unwrap_or_default()
    }

    fn look_up_files(&self, id: &str) -> Vec<String> {
        self.find(id).map(Preset::file_names).unwrap_or_default()
    }

    fn contents(&self, id: &str) -> Vec<PresetFile> {
        self.find(id).map(|preset| preset.files.clone()).unwrap_or_default()
    }
}

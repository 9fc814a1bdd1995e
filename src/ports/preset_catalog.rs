use crate::domain::PresetFile;

/// Port for read-only access to the preset registry.
///
/// Every lookup is total: unknown ids and keys produce empty results rather
/// than errors. Callers validate with [`PresetCatalog::exists`] first.
pub trait PresetCatalog {
    /// Whether `id` is a registered preset.
    fn exists(&self, id: &str) -> bool;

    /// Distinct language labels in registration order.
    fn languages(&self) -> Vec<String>;

    /// Preset ids for `language` in registration order.
    fn presets(&self, language: &str) -> Vec<String>;

    /// Metadata value, or an empty string when the preset or key is unknown.
    fn meta_value(&self, id: &str, key: &str) -> String;

    /// Declared file names without contents.
    fn look_up_files(&self, id: &str) -> Vec<String>;

    /// Declared files with contents, in declaration order.
    fn contents(&self, id: &str) -> Vec<PresetFile>;
}

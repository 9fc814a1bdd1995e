use crate::domain::TemplateCategory;

/// Port for reading bundled service templates.
pub trait TemplateStore {
    /// Raw template text for `(category, name)`, if registered.
    fn template(&self, category: TemplateCategory, name: &str) -> Option<&str>;

    /// Registered template names for a category, sorted.
    fn names(&self, category: TemplateCategory) -> Vec<String>;
}

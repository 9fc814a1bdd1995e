mod preset_catalog;
mod project_filesystem;
mod prompter;
mod template_store;

pub use preset_catalog::PresetCatalog;
pub use project_filesystem::ProjectFilesystem;
pub use prompter::Prompter;
pub use template_store::TemplateStore;

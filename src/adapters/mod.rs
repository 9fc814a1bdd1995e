pub mod assets;
pub mod dialoguer_prompter;
pub mod preset_registry;
pub mod project_filesystem;
pub mod template_registry;

pub use dialoguer_prompter::DialoguerPrompter;
pub use preset_registry::PresetRegistry;
pub use project_filesystem::FilesystemProject;
pub use template_registry::TemplateRegistry;

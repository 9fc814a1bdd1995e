mod fixtures;
mod memory_project;

pub use fixtures::{STATIC_COMPOSE, sample_presets, sample_templates};
pub use memory_project::MemoryProject;
pub use scripted_prompter::ScriptedPrompter;

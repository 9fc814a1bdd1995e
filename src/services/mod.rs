pub mod conflict_checker;
pub mod materializer;
pub mod orchestration_composer;

pub use conflict_checker::check_existing;
pub use materializer::write_files;
pub use orchestration_composer::OrchestrationComposer;

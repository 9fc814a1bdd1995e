pub mod database_key;
pub mod error;
pub mod orchestration;
pub mod preset;
pub mod template;

pub use database_key::{DatabaseKeyNormalizer, StripSpacesAndPeriods};
pub use error::AppError;
pub use orchestration::{COMPOSE_VERSION, ServiceFragments};
pub use preset::{META_ASK_DATABASE, ORCHESTRATION_FILE, Preset, PresetFile, database_options};
pub use template::TemplateCategory;

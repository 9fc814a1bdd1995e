//! kool-preset: bootstrap project configuration files from bundled presets.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    apply_preset, apply_preset_at, preset_at, preset_ids, select_preset, select_preset_at,
};
pub use app::commands::preset::{PresetOutcome, PresetSelection};
pub use domain::{AppError, TemplateCategory};

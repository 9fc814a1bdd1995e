//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{DialoguerPrompter, FilesystemProject, PresetRegistry, TemplateRegistry};
use crate::app::{AppContext, commands::preset};

pub use crate::app::commands::preset::{PresetOutcome, PresetSelection};
pub use crate::domain::AppError;

pub(crate) type DefaultContext =
    AppContext<PresetRegistry, TemplateRegistry, FilesystemProject, DialoguerPrompter>;

/// Create an `AppContext` over the bundled registries for a given path.
///
/// Registries are built here once; callers running several phases reuse the context.
pub(crate) fn create_context(path: PathBuf) -> Result<DefaultContext, AppError> {
    Ok(AppContext::new(
        PresetRegistry::embedded()?,
        TemplateRegistry::embedded()?,
        FilesystemProject::new(path),
        DialoguerPrompter::new(),
    ))
}

/// Resolve the preset to apply, prompting when `preset` is `None`.
pub fn select_preset(preset: Option<&str>) -> Result<PresetSelection, AppError> {
    select_preset_at(std::env::current_dir()?, preset)
}

/// Resolve the preset to apply for the project at `path`.
pub fn select_preset_at(
    path: impl Into<PathBuf>,
    preset: Option<&str>,
) -> Result<PresetSelection, AppError> {
    let ctx = create_context(path.into())?;
    preset::select(&ctx, preset)
}

/// Apply a resolved preset in the current directory.
pub fn apply_preset(
    selection: &PresetSelection,
    override_existing: bool,
) -> Result<PresetOutcome, AppError> {
    apply_preset_at(std::env::current_dir()?, selection, override_existing)
}

/// Apply a resolved preset in the directory at `path`.
pub fn apply_preset_at(
    path: impl Into<PathBuf>,
    selection: &PresetSelection,
    override_existing: bool,
) -> Result<PresetOutcome, AppError> {
    let ctx = create_context(path.into())?;
    preset::apply(&ctx, selection, override_existing)
}

/// Select and apply a preset at `path` in one call.
pub fn preset_at(
    path: impl Into<PathBuf>,
    preset: Option<&str>,
    override_existing: bool,
) -> Result<PresetOutcome, AppError> {
    let ctx = create_context(path.into())?;
    preset::execute(&ctx, preset, override_existing)
}

/// Ids of every bundled preset, in registration order.
pub fn preset_ids() -> Result<Vec<String>, AppError> {
    Ok(PresetRegistry::embedded()?.all().iter().map(|preset| preset.id.clone()).collect())
}

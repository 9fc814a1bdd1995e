//! Preset command implementation.

use crate::app::api;
use crate::app::commands::preset::{self, PresetOutcome};
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{PresetCatalog, ProjectFilesystem, Prompter, TemplateStore};

pub fn run_preset(preset: Option<&str>, override_existing: bool) -> Result<(), AppError> {
    let ctx = api::create_context(std::env::current_dir()?)?;
    run_in(&ctx, preset, override_existing)?;
    Ok(())
}

/// Select and apply on one context, announcing each phase.
fn run_in<C, T, F, P>(
    ctx: &AppContext<C, T, F, P>,
    preset_arg: Option<&str>,
    override_existing: bool,
) -> Result<PresetOutcome, AppError>
where
    C: PresetCatalog,
    T: TemplateStore,
    F: ProjectFilesystem,
    P: Prompter,
{
    let selection = preset::select(ctx, preset_arg)?;
    println!("Preset {} is initializing!", selection.preset);

    let outcome = preset::apply(ctx, &selection, override_existing)?;
    println!("✅ Preset {} initialized!", outcome.preset);
    Ok(outcome)
}

//! Preset command: select a preset and materialize its files.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, META_ASK_DATABASE, ORCHESTRATION_FILE, PresetFile, database_options};
use crate::ports::{PresetCatalog, ProjectFilesystem, Prompter, TemplateStore};
use crate::services::{OrchestrationComposer, check_existing, write_files};

pub const LANGUAGE_PROMPT: &str = "What language do you want to use";
pub const PRESET_PROMPT: &str = "What preset do you want to use";
pub const DATABASE_PROMPT: &str = "What database do you want to use";

/// A resolved preset choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetSelection {
    pub preset: String,
    /// Database display name; empty when none was chosen.
    pub database: String,
    /// Use the preset's static orchestration file instead of composing one.
    pub default_compose: bool,
}

impl PresetSelection {
    /// Selection for a preset named on the command line.
    pub fn from_argument(preset: &str) -> Self {
        Self { preset: preset.to_string(), database: String::new(), default_compose: true }
    }
}

/// Outcome of applying a preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetOutcome {
    pub preset: String,
    /// Files written, in order.
    pub written: Vec<String>,
    /// Whether the orchestration file was composed from templates.
    pub composed: bool,
}

/// Resolve which preset to apply.
///
/// A positional argument skips prompting entirely. Without one, an
/// interactive terminal is required to ask for language, preset and, when the
/// preset offers any, a database. The chosen preset must be registered.
pub fn select<C, T, F, P>(
    ctx: &AppContext<C, T, F, P>,
    preset_arg: Option<&str>,
) -> Result<PresetSelection, AppError>
where
    C: PresetCatalog,
    T: TemplateStore,
    F: ProjectFilesystem,
    P: Prompter,
{
    let selection = match preset_arg {
        Some(preset) => PresetSelection::from_argument(preset),
        None => prompt_selection(ctx)?,
    };

    validate(ctx, &selection)?;
    debug!(?selection, "Preset selected");
    Ok(selection)
}

fn prompt_selection<C, T, F, P>(ctx: &AppContext<C, T, F, P>) -> Result<PresetSelection, AppError>
where
    C: PresetCatalog,
    T: TemplateStore,
    F: ProjectFilesystem,
    P: Prompter,
{
    if !ctx.prompter().is_terminal() {
        return Err(AppError::NoInteractiveTerminal);
    }

    let language = ctx.prompter().ask(LANGUAGE_PROMPT, &ctx.presets().languages())?;
    let preset = ctx.prompter().ask(PRESET_PROMPT, &ctx.presets().presets(&language))?;

    let options = database_options(&ctx.presets().meta_value(&preset, META_ASK_DATABASE));
    let database =
        if options.is_empty() { String::new() } else { ctx.prompter().ask(DATABASE_PROMPT, &options)? };

    Ok(PresetSelection { preset, database, default_compose: false })
}

fn validate<C, T, F, P>(
    ctx: &AppContext<C, T, F, P>,
    selection: &PresetSelection,
) -> Result<(), AppError>
where
    C: PresetCatalog,
    T: TemplateStore,
    F: ProjectFilesystem,
    P: Prompter,
{
    if ctx.presets().exists(&selection.preset) {
        Ok(())
    } else {
        Err(AppError::UnknownPreset(selection.preset.clone()))
    }
}

/// Write the selected preset's files into the project.
///
/// Unless `override_existing` is set, any declared file that already exists
/// aborts the run before anything is written. Content is resolved for every
/// file before the first write, so template failures never leave partial
/// output; write failures stop at the failing file.
pub fn apply<C, T, F, P>(
    ctx: &AppContext<C, T, F, P>,
    selection: &PresetSelection,
    override_existing: bool,
) -> Result<PresetOutcome, AppError>
where
    C: PresetCatalog,
    T: TemplateStore,
    F: ProjectFilesystem,
    P: Prompter,
{
    validate(ctx, selection)?;
    let preset = selection.preset.as_str();

    if !override_existing {
        let existing = check_existing(ctx.project(), &ctx.presets().look_up_files(preset));
        if !existing.is_empty() {
            return Err(AppError::ConflictExists(existing));
        }
    }

    let composer = OrchestrationComposer::new(ctx.templates());
    let mut composed = false;
    let files = ctx
        .presets()
        .contents(preset)
        .into_iter()
        .map(|file| {
            if file.name == ORCHESTRATION_FILE && !selection.default_compose {
                composed = true;
                let content = composer.compose(&file.name, &selection.database)?;
                Ok(PresetFile { name: file.name, content })
            } else {
                Ok(file)
            }
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let written = write_files(ctx.project(), &files)?;
    info!(preset, files = written.len(), composed, "Preset applied");

    Ok(PresetOutcome { preset: preset.to_string(), written, composed })
}

/// Select and apply in one step.
pub fn execute<C, T, F, P>(
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
    let selection = select(ctx, preset_arg)?;
    apply(ctx, &selection, override_existing)
}

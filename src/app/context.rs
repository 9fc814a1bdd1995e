use crate::ports::{PresetCatalog, ProjectFilesystem, Prompter, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C, T, F, P>
where
    C: PresetCatalog,
    T: TemplateStore,
    F: ProjectFilesystem,
    P: Prompter,
{
    presets: C,
    templates: T,
    project: F,
    prompter: P,
}

impl<C, T, F, P> AppContext<C, T, F, P>
where
    C: PresetCatalog,
    T: TemplateStore,
    F: ProjectFilesystem,
    P: Prompter,
{
    /// Create a new application context.
    pub fn new(presets: C, templates: T, project: F, prompter: P) -> Self {
        Self { presets, templates, project, prompter }
    }

    /// Get a reference to the preset registry.
    pub fn presets(&self) -> &C {
        &self.presets
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the destination project.
    pub fn project(&self) -> &F {
        &self.project
    }

    /// Get a reference to the interactive selector.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}

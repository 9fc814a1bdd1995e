use crate::domain::AppError;

/// Port for interactive single-choice selection.
pub trait Prompter {
    /// Whether the process is attached to an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Ask the user to pick one of `options` and return the chosen value.
    ///
    /// Returns [`AppError::PromptInterrupted`] when the user cancels.
    fn ask(&self, prompt: &str, options: &[String]) -> Result<String, AppError>;
}

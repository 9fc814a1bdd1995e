use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal selector backed by `dialoguer`.
///
/// Esc, `q` and Ctrl-C all count as cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }

    fn ask(&self, prompt: &str, options: &[String]) -> Result<String, AppError> {
        if options.is_empty() {
            return Err(AppError::Prompt(format!("No options available for '{prompt}'")));
        }

        let selection = Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|err| match err {
                DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => {
                    AppError::PromptInterrupted
                }
                other => AppError::Prompt(format!("{prompt}: {other}")),
            })?;

        match selection {
            Some(index) => Ok(options[index].clone()),
            None => Err(AppError::PromptInterrupted),
        }
    }
}

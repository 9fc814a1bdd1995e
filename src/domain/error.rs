use std::io;

use thiserror::Error;

use super::TemplateCategory;

/// Library-wide error type for preset operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of preset file writes.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Requested preset is not registered.
    #[error("Unknown preset {0}")]
    UnknownPreset(String),

    /// No preset argument was given and prompting is impossible.
    #[error(
        "the input device is not a TTY; for non-tty environments, please specify a preset argument"
    )]
    NoInteractiveTerminal,

    /// Preset files already exist at the destination.
    #[error("some preset files already exist: {}", .0.join(", "))]
    ConflictExists(Vec<String>),

    /// A service template could not be resolved or parsed while composing a file.
    #[error("Failed to write preset file {file}: {category} template '{name}': {details}")]
    TemplateParse { file: String, category: TemplateCategory, name: String, details: String },

    /// Writing a preset file failed, or its content could not be serialized.
    /// Files written before it are kept.
    #[error("Failed to write preset file {file}: {source}")]
    FileWrite {
        file: String,
        #[source]
        source: io::Error,
    },

    /// The user cancelled an interactive prompt.
    #[error("Operation Cancelled")]
    PromptInterrupted,

    /// Interactive selection failed for a reason other than cancellation.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Embedded preset or template bundle is malformed.
    #[error("Asset error: {0}")]
    Asset(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::FileWrite { source, .. } => source.kind(),
            AppError::UnknownPreset(_) => io::ErrorKind::NotFound,
            AppError::ConflictExists(_) => io::ErrorKind::AlreadyExists,
            AppError::PromptInterrupted => io::ErrorKind::Interrupted,
            AppError::NoInteractiveTerminal | AppError::Prompt(_) => io::ErrorKind::Unsupported,
            AppError::TemplateParse { .. } | AppError::Asset(_) => io::ErrorKind::InvalidData,
        }
    }
}

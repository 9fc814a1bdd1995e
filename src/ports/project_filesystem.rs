//! Destination directory operations.
//!
//! File names are relative to the project root the preset is applied to.

use std::io;

/// Port for the directory a preset is materialized into.
pub trait ProjectFilesystem {
    /// Check whether a file or directory with this name exists.
    fn file_exists(&self, name: &str) -> bool;

    /// Write UTF-8 content, replacing any existing file and creating parent directories.
    fn write_file(&self, name: &str, content: &str) -> io::Result<()>;
}

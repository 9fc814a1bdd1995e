use tracing::info;

use crate::domain::{AppError, PresetFile};
use crate::ports::ProjectFilesystem;

/// Write files in order, stopping at the first failure.
///
/// Files written before a failure are left in place.
pub fn write_files<F: ProjectFilesystem>(
    project: &F,
    files: &[PresetFile],
) -> Result<Vec<String>, AppError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        project
            .write_file(&file.name, &file.content)
            .map_err(|source| AppError::FileWrite { file: file.name.clone(), source })?;
        info!(file = %file.name, bytes = file.content.len(), "Wrote preset file");
        written.push(file.name.clone());
    }
    Ok(written)
}

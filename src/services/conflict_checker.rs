use tracing::debug;

use crate::ports::ProjectFilesystem;

/// Names from `file_names` that already exist in the project, in input order.
pub fn check_existing<F: ProjectFilesystem>(project: &F, file_names: &[String]) -> Vec<String> {
    let existing: Vec<String> =
        file_names.iter().filter(|name| project.file_exists(name)).cloned().collect();
    debug!(checked = file_names.len(), existing = existing.len(), "Checked for existing preset files");
    existing
}

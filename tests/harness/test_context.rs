//! Shared testing harness for `kool` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `kool` binary within the project directory.
    ///
    /// Output is captured, so the binary never sees an interactive terminal.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kool").expect("Failed to locate kool binary");
        cmd.current_dir(&self.work_dir).env_remove("KOOL_LOG");
        cmd
    }

    /// Write a file into the project directory.
    pub(crate) fn write_file(&self, name: &str, content: &str) {
        fs::write(self.work_dir.join(name), content).expect("Failed to write test file");
    }

    /// Read a file from the project directory.
    pub(crate) fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name))
            .unwrap_or_else(|err| panic!("Failed to read {name}: {err}"))
    }

    /// Names of the entries in the project directory, sorted.
    pub(crate) fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to list work directory")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Assert that the project directory is still empty.
    pub(crate) fn assert_empty(&self) {
        assert!(self.file_names().is_empty(), "expected no files, found {:?}", self.file_names());
    }

    /// Content of a bundled preset file as shipped in the binary.
    pub(crate) fn preset_asset(preset: &str, name: &str) -> String {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("src/assets/presets")
            .join(preset)
            .join("files")
            .join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read asset {}: {err}", path.display()))
    }
}

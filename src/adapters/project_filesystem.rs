//! `ProjectFilesystem` implementation backed by a directory on disk.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::ports::ProjectFilesystem;

/// Destination directory a preset is written into.
#[derive(Debug, Clone)]
pub struct FilesystemProject {
    root: PathBuf,
}

impl FilesystemProject {
    /// Create a project rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let full_path = self.root.join(name);
        if !normalize_path(&full_path).starts_with(normalize_path(&self.root)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path escapes the project directory: {name}"),
            ));
        }
        Ok(full_path)
    }
}

impl ProjectFilesystem for FilesystemProject {
    fn file_exists(&self, name: &str) -> bool {
        self.resolve(name).map(|path| path.exists()).unwrap_or(false)
    }

    fn write_file(&self, name: &str, content: &str) -> io::Result<()> {
        let full_path = self.resolve(name)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)
    }
}

/// Resolve `.` and `..` components logically, without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}

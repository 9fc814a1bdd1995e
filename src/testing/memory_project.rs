use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::ports::ProjectFilesystem;

/// In-memory project directory.
#[derive(Default)]
pub struct MemoryProject {
    pub files: RefCell<BTreeMap<String, String>>,
    /// Writes to this name fail with `PermissionDenied`.
    pub fail_on: Option<String>,
    /// Names in the order they were written.
    pub writes: RefCell<Vec<String>>,
}

impl MemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(name.to_string(), content.to_string());
        self
    }

    pub fn failing_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }

    pub fn content(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }
}

impl ProjectFilesystem for MemoryProject {
    fn file_exists(&self, name: &str) -> bool {
        self.files.borrow().contains_key(name)
    }

    fn write_file(&self, name: &str, content: &str) -> io::Result<()> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only file"));
        }
        self.files.borrow_mut().insert(name.to_string(), content.to_string());
        self.writes.borrow_mut().push(name.to_string());
        Ok(())
    }
}

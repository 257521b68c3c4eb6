//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use autostack_core::{
    application::{GenerationError, ports::Filesystem},
    error::{AutostackError, AutostackResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> AutostackResult<()> {
        match fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(dir_error(path, e)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> AutostackResult<()> {
        fs::create_dir_all(path).map_err(|e| dir_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> AutostackResult<()> {
        fs::write(path, content).map_err(|e| write_error(path, e))
    }

    fn append_file(&self, path: &Path, content: &str) -> AutostackResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| write_error(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| write_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn dir_error(path: &Path, e: io::Error) -> AutostackError {
    GenerationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn write_error(path: &Path, e: io::Error) -> AutostackError {
    GenerationError::FileWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

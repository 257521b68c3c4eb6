//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use walkdir::WalkDir;

use autostack_core::{
    application::{GenerationError, ports::Filesystem},
    error::AutostackResult,
};

/// In-memory filesystem.
///
/// Clones share the same tree, so a test (or the dry-run scaffolder) can
/// keep a handle while the generator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Make every write at or below `path` fail.
    pub fn make_read_only(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Copy the tree under `root` from disk, so later writes are recorded
    /// as overwrites and appends extend the real content. `.git` and
    /// `node_modules` are not copied.
    pub fn mirror_dir(&self, root: &Path) -> io::Result<()> {
        let mut directories = BTreeSet::new();
        let mut files = BTreeMap::new();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !matches!(e.file_name().to_str(), Some(".git" | "node_modules")));
        for entry in walker {
            let entry = entry?;
            let path = entry.path().to_path_buf();
            if entry.file_type().is_dir() {
                directories.insert(path);
            } else if entry.file_type().is_file() {
                let content = String::from_utf8_lossy(&fs::read(&path)?).into_owned();
                files.insert(path, content);
            }
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))?;
        inner.directories.extend(
            root.ancestors()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf),
        );
        inner.directories.extend(directories);
        inner.files.extend(files);
        Ok(())
    }

    fn guard(inner: &MemoryFilesystemInner, path: &Path) -> bool {
        inner.read_only.iter().any(|p| path.starts_with(p))
    }

    fn parent_exists(inner: &MemoryFilesystemInner, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => inner.directories.contains(parent),
            _ => true,
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> AutostackResult<()> {
        let mut inner = self.inner.write().map_err(|_| dir_error(path, "lock poisoned"))?;

        if inner.directories.contains(path) {
            return Ok(());
        }
        if Self::guard(&inner, path) {
            return Err(dir_error(path, "read-only filesystem"));
        }
        if inner.files.contains_key(path) {
            return Err(dir_error(path, "a file exists at this path"));
        }
        if !Self::parent_exists(&inner, path) {
            return Err(dir_error(path, "parent directory does not exist"));
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> AutostackResult<()> {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.create_dir(&current)?;
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> AutostackResult<()> {
        let mut inner = self.inner.write().map_err(|_| write_error(path, "lock poisoned"))?;

        if Self::guard(&inner, path) {
            return Err(write_error(path, "read-only filesystem"));
        }
        if !Self::parent_exists(&inner, path) {
            return Err(write_error(path, "parent directory does not exist"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> AutostackResult<()> {
        let existing = self.read_file(path).unwrap_or_default();
        self.write_file(path, &(existing + content))
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn dir_error(path: &Path, reason: &str) -> autostack_core::error::AutostackError {
    GenerationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn write_error(path: &Path, reason: &str) -> autostack_core::error::AutostackError {
    GenerationError::FileWrite {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

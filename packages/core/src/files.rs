//! Raw file I/O implementations.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::traits::FileIo;

/// Reads and writes files on the local filesystem.
///
/// Relative paths resolve against the process working directory. Missing
/// parent directories are created on write.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl FileIo for LocalFiles {
    fn read(&self, path: &str) -> Result<String> {
        tracing::debug!(path, "reading config file");
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }

    fn write(&self, path: &str, content: &str) -> Result<()> {
        tracing::debug!(path, bytes = content.len(), "writing config file");
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::io(parent.display().to_string(), e))?;
            }
        }
        fs::write(path, content).map_err(|e| Error::io(path, e))
    }
}

/// An in-memory file set.
///
/// Clones share the same files, so a test can keep one handle and give
/// another to a registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryFiles {
    files: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stage a file without going through [`FileIo::write`].
    pub fn insert(&self, path: impl Into<String>, content: impl Into<String>) {
        self.lock().insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.lock().get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lock().contains_key(path)
    }

    pub fn paths(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl FileIo for MemoryFiles {
    fn read(&self, path: &str) -> Result<String> {
        self.get(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })
    }

    fn write(&self, path: &str, content: &str) -> Result<()> {
        self.insert(path, content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_files_roundtrip_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/app.json");
        let path = path.to_str().unwrap();

        LocalFiles.write(path, "{\"volume\":7}").unwrap();
        assert_eq!(LocalFiles.read(path).unwrap(), "{\"volume\":7}");
    }

    #[test]
    fn local_files_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.properties");

        let err = LocalFiles.read(path.to_str().unwrap()).unwrap_err();
        match err {
            Error::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn memory_files_share_state_between_clones() {
        let files = MemoryFiles::new();
        let handle = files.clone();

        files.write("a.json", "{}").unwrap();
        assert!(handle.contains("a.json"));
        assert_eq!(handle.read("a.json").unwrap(), "{}");
        assert_eq!(handle.paths(), vec!["a.json".to_string()]);
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn memory_files_missing_is_not_found() {
        let files = MemoryFiles::new();
        assert!(files.is_empty());
        assert!(matches!(files.read("nope"), Err(Error::NotFound { .. })));
    }
}

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::Mutex;

use crate::rw::ReaderWriter;

/// In-memory [`ReaderWriter`] with injectable write failures.
#[derive(Clone, Debug, Default)]
pub struct MemoryReaderWriter {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    failing: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryReaderWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later write to `path` fails with `PermissionDenied`.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.failing.lock().insert(path.into());
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().get(path).cloned()
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.files.lock().contains_key(path)
    }
}

impl ReaderWriter for MemoryReaderWriter {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.contents(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{path:?} not found")))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if self.failing.lock().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to {path:?} denied"),
            ));
        }
        self.files.lock().insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

use std::{fs, io, path::Path};

use corvid_primitives::fs::{temporary_path, write_file_via_temporary};

/// Reads and writes configuration documents.
pub trait ReaderWriter: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Local filesystem. Writes are atomic and new files get `0o600` permissions.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSystem;

impl ReaderWriter for FileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let temp_path = temporary_path(path)?;
        write_file_via_temporary(path, &temp_path, bytes)?;
        Ok(())
    }
}

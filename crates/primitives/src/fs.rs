use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::trace;

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("The file could not be created: {0}")]
    /// The file could not be created
    UnableToCreateFile(io::Error),
    #[error("The file could not be copied: {0}")]
    /// The file could not be copied
    UnableToCopyFile(io::Error),
    #[error("The file could not be opened: {0}")]
    /// The file could not be opened
    UnableToOpenFile(io::Error),
    #[error("The file could not be renamed: {0}")]
    /// The file could not be renamed
    UnableToRenameFile(io::Error),
    #[error("Failed to set permissions: {0}")]
    /// Failed to set permissions
    UnableToSetPermissions(io::Error),
    #[error("Failed to retrieve file metadata: {0}")]
    /// Failed to retrieve file metadata
    UnableToRetrieveMetadata(io::Error),
    #[error("Failed to write bytes to file: {0}")]
    /// Failed to write bytes to file
    UnableToWriteFile(io::Error),
    #[error("Failed to obtain file name for {0:?}")]
    /// Failed to obtain file name
    UnableToObtainFileName(PathBuf),
}

impl From<FsError> for io::Error {
    fn from(value: FsError) -> Self {
        match value {
            FsError::UnableToCreateFile(e)
            | FsError::UnableToCopyFile(e)
            | FsError::UnableToOpenFile(e)
            | FsError::UnableToRenameFile(e)
            | FsError::UnableToSetPermissions(e)
            | FsError::UnableToRetrieveMetadata(e)
            | FsError::UnableToWriteFile(e) => e,
            e @ FsError::UnableToObtainFileName(_) => io::Error::new(io::ErrorKind::InvalidInput, e),
        }
    }
}

/// Returns the temporary path used while atomically replacing `file_path`.
///
/// `corvid.json` -> `.corvid.json.tmp`, in the same directory.
pub fn temporary_path(file_path: &Path) -> Result<PathBuf, FsError> {
    let file_name = file_path
        .file_name()
        .ok_or_else(|| FsError::UnableToObtainFileName(file_path.to_path_buf()))?;
    let temp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(file_path.with_file_name(temp_name))
}

/// Write a file atomically by using a temporary file as an intermediate.
///
/// Care is taken to preserve the permissions of the file at `file_path` being written.
///
/// If no file exists at `file_path` one will be created with restricted 0o600-equivalent
/// permissions.
pub fn write_file_via_temporary(
    file_path: &Path,
    temp_path: &Path,
    bytes: &[u8],
) -> Result<(), FsError> {
    // If the file already exists, preserve its permissions by copying it.
    // Otherwise, create a new file with restricted permissions.
    if file_path.exists() {
        fs::copy(file_path, temp_path).map_err(FsError::UnableToCopyFile)?;
        fs::write(temp_path, bytes).map_err(FsError::UnableToWriteFile)?;
    } else {
        create_with_600_perms(temp_path, bytes)?;
    }

    // With the temporary file created, perform an atomic rename.
    fs::rename(temp_path, file_path).map_err(FsError::UnableToRenameFile)?;

    trace!(path = ?file_path, len = bytes.len(), "File written");
    Ok(())
}

/// Creates a file with `600 (-rw-------)` permissions and writes the specified bytes to file.
pub fn create_with_600_perms<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), FsError> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(FsError::UnableToCreateFile)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perm = file
            .metadata()
            .map_err(FsError::UnableToRetrieveMetadata)?
            .permissions();
        perm.set_mode(0o600);
        file.set_permissions(perm)
            .map_err(FsError::UnableToSetPermissions)?;
    }

    file.write_all(bytes).map_err(FsError::UnableToWriteFile)?;

    Ok(())
}

/// Appends `"\n<line>"` to the file at `path`, creating it if it does not exist.
///
/// Existing content is never inspected, so repeated calls add duplicate lines.
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), FsError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.as_ref())
        .map_err(FsError::UnableToOpenFile)?;

    file.write_all(format!("\n{line}").as_bytes())
        .map_err(FsError::UnableToWriteFile)
}

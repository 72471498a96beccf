use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::consts::{DEFAULT_CONFIG_FILENAME, DEFAULT_IGNORE_FILENAME};

/// The shared configuration file in the current working directory.
pub fn default_config_path() -> io::Result<PathBuf> {
    Ok(env::current_dir()?.join(DEFAULT_CONFIG_FILENAME))
}

/// The version-control ignore file at the root of the current working directory.
pub fn default_ignore_file() -> io::Result<PathBuf> {
    Ok(env::current_dir()?.join(DEFAULT_IGNORE_FILENAME))
}

/// Resolves `location` against the directory holding `config_path`.
///
/// Absolute locations are returned unchanged.
pub fn sibling_path(config_path: &Path, location: &Path) -> PathBuf {
    if location.is_absolute() {
        return location.to_path_buf();
    }

    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(location),
        _ => location.to_path_buf(),
    }
}

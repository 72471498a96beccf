use std::{fmt, io, path::PathBuf};

use corvid_primitives::fs::FsError;

/// The kind of configuration entity a lookup was performed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Contract,
    Network,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Account => "account",
            EntityKind::Contract => "contract",
            EntityKind::Network => "network",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{kind} named {name} does not exist in configuration")]
    NotFound { kind: EntityKind, name: String },

    #[error("{0}")]
    Validation(String),

    #[error("failed to read configuration {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode configuration: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write configuration {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to add {file_name} to ignore file {path:?}: {source}")]
    IgnoreFile {
        path: PathBuf,
        file_name: String,
        #[source]
        source: FsError,
    },
}

impl ConfigError {
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

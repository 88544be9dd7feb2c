use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The log could not be read at all. Always fatal for a run.
#[derive(Debug, Error)]
pub enum LogSourceError {
    #[error("log file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading log file: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("failed to read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogSourceError {
    /// Sorts an I/O failure into one of the distinguishable causes.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path: PathBuf = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => {
                path
            }
        }
    }
}

/// Raised by a [`crate::geo::GeoRepository`]. Never leaves the resolver.
#[derive(Debug, Error)]
pub enum GeoLookupError {
    #[error("'{0}' is not a valid IPv4 address")]
    InvalidAddress(String),

    #[error("geolocation backend failed: {0}")]
    Backend(String),
}

//! Asset resolution error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a single `resolve` call.
///
/// Every variant aborts the call in progress. Nothing is retried.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported hash algorithm `{0}`")]
    UnsupportedAlgorithm(String),

    #[error("Unknown encoding base {0}")]
    UnsupportedBase(u32),

    #[error("Unsupported digest type `{0}`")]
    UnsupportedDigestType(String),

    #[error("IO error at `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = AssetError> = std::result::Result<T, E>;

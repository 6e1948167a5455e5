//! Asset request and its resolved form.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::AssetOptions;

/// One file to resolve.
///
/// Borrowed for the duration of a single [`super::resolve`] call. Both `file`
/// and `root` must be absolute; `[path]` is computed lexically between them.
#[derive(Debug, Clone, Copy)]
pub struct AssetRequest<'a> {
    /// Source file (absolute)
    pub file: &'a Path,
    /// Project root that `context` and `output_path` are relative to
    pub root: &'a Path,
    pub options: &'a AssetOptions,
}

impl<'a> AssetRequest<'a> {
    pub fn new(file: &'a Path, root: &'a Path, options: &'a AssetOptions) -> Self {
        Self {
            file,
            root,
            options,
        }
    }
}

/// Result of resolving an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedUri {
    /// `data:<mime>;base64,<payload>`; nothing written.
    Inline(String),
    /// `<public_path>/<name>`, plus every copy that was written
    /// (empty when output is disabled).
    Reference { uri: String, written: Vec<PathBuf> },
}

impl ResolvedUri {
    pub fn uri(&self) -> &str {
        match self {
            Self::Inline(uri) | Self::Reference { uri, .. } => uri,
        }
    }

    pub fn into_uri(self) -> String {
        match self {
            Self::Inline(uri) | Self::Reference { uri, .. } => uri,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    /// Copies written to disk.
    pub fn written(&self) -> &[PathBuf] {
        match self {
            Self::Inline(_) => &[],
            Self::Reference { written, .. } => written,
        }
    }
}

impl fmt::Display for ResolvedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

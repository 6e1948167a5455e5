//! Placeholder values derived from the source path.

use std::path::Path;

use crate::template::FileParts;
use crate::utils::path::{normalize_lexical, safe_relative_dir};

/// Extension used when the file has none.
const DEFAULT_EXT: &str = "bin";
/// Stem used when the path has no file name.
const DEFAULT_NAME: &str = "file";

/// Split `file` into `[ext]`, `[name]` and `[path]` values.
///
/// `[path]` is the parent directory relative to `root/context`; ascents out of
/// the context are written as `_` so the result stays under the output dir.
pub fn file_parts(file: &Path, root: &Path, context: &str) -> FileParts {
    let ext = file
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXT.into());
    let name = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_NAME.into());

    let context_root = normalize_lexical(&root.join(context));
    let directory = file
        .parent()
        .map(|dir| safe_relative_dir(&context_root, dir))
        .unwrap_or_default();

    FileParts {
        ext,
        name,
        directory,
    }
}

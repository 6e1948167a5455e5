//! Asset materialization (side effects).

use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::error::{AssetError, Result};
use crate::utils::path::strip_root;

/// Copy `source` to `root/<dir>/<name>` for every output directory.
///
/// Parent directories are created as needed. Each destination is attempted
/// once; the first failure aborts and earlier copies are left in place.
///
/// Returns the destinations written, in order.
pub fn copy_to_outputs(
    source: &Path,
    root: &Path,
    output_dirs: &[PathBuf],
    name: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(output_dirs.len());

    for dir in output_dirs {
        let dir = dir.to_string_lossy();
        let dest = root.join(strip_root(&dir)).join(strip_root(name));

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|err| AssetError::io(parent, err))?;
        }
        fs::copy(source, &dest).map_err(|err| AssetError::io(&dest, err))?;

        debug!("copy"; "{} -> {}", source.display(), dest.display());
        written.push(dest);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_to_outputs() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("logo.png");
        fs::write(&source, b"png bytes").unwrap();

        let outputs = [PathBuf::from("/public"), PathBuf::from("dist/static")];
        let written = copy_to_outputs(&source, dir.path(), &outputs, "img/logo.png").unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("public/img/logo.png"),
                dir.path().join("dist/static/img/logo.png"),
            ]
        );
        for dest in &written {
            assert_eq!(fs::read(dest).unwrap(), b"png bytes");
        }
        // Copy, not move
        assert!(source.exists());
    }

    #[test]
    fn test_copy_to_no_outputs() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("logo.png");
        fs::write(&source, b"x").unwrap();

        let written = copy_to_outputs(&source, dir.path(), &[], "logo.png").unwrap();
        assert!(written.is_empty());
    }

    #[test]
    fn test_copy_failure_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("logo.png");
        fs::write(&source, b"x").unwrap();
        // A file where a directory is expected
        fs::write(dir.path().join("public"), b"").unwrap();

        let err = copy_to_outputs(&source, dir.path(), &[PathBuf::from("public")], "a/logo.png")
            .unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}

//! Lexical path utilities.
//!
//! Pure functions, no filesystem access. Symlinks are never resolved, so the
//! same inputs always give the same relative path.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically: drop `.`, fold `..` into its parent.
///
/// `..` at the root of an absolute path is dropped; at the start of a
/// relative path it is kept.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_lexical(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// ```
pub fn normalize_lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `target` relative to `base`.
///
/// Both paths are normalized first. The result starts with `..` components
/// when `target` is outside `base`, and is empty when they are equal.
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = normalize_lexical(base);
    let target = normalize_lexical(target);

    let base_parts: Vec<_> = base.components().collect();
    let target_parts: Vec<_> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_parts.len() {
        out.push("..");
    }
    for part in &target_parts[common..] {
        out.push(part.as_os_str());
    }
    out
}

/// Relative path of `target` from `base`, `/`-separated, ascents written as `_`.
///
/// Returns `""` when both are the same directory, otherwise a string ending
/// in `/`.
///
/// # Example
/// ```ignore
/// safe_relative_dir(Path::new("/r/a"), Path::new("/r/b/c")) // "_/b/c/"
/// ```
pub fn safe_relative_dir(base: &Path, target: &Path) -> String {
    let mut out = String::new();
    for component in relative_path(base, target).components() {
        match component {
            Component::ParentDir => out.push('_'),
            Component::Normal(name) => out.push_str(&name.to_string_lossy()),
            _ => continue,
        }
        out.push('/');
    }
    out
}

/// Strip leading `/` (and `\`) so the path joins *under* a base directory.
pub fn strip_root(path: &str) -> &str {
    path.trim_start_matches(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lexical() {
        assert_eq!(
            normalize_lexical(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_lexical(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_lexical(Path::new("../a/..")), PathBuf::from(".."));
        assert_eq!(normalize_lexical(Path::new("/r/")), PathBuf::from("/r"));
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/r"), Path::new("/r/test/assets")),
            PathBuf::from("test/assets")
        );
        assert_eq!(
            relative_path(Path::new("/r/a/b"), Path::new("/r/c")),
            PathBuf::from("../../c")
        );
        assert_eq!(relative_path(Path::new("/r/x"), Path::new("/r/x/")), PathBuf::new());
    }

    #[test]
    fn test_safe_relative_dir() {
        let root = Path::new("/r");
        assert_eq!(safe_relative_dir(root, Path::new("/r/test/assets")), "test/assets/");
        assert_eq!(safe_relative_dir(Path::new("/r/test/assets"), Path::new("/r/test/assets")), "");
        assert_eq!(safe_relative_dir(Path::new("/r/a"), Path::new("/r/b/c")), "_/b/c/");
        assert_eq!(safe_relative_dir(Path::new("/r/a/b"), Path::new("/r")), "_/_/");
    }

    #[test]
    fn test_safe_relative_dir_never_escapes() {
        let out = safe_relative_dir(Path::new("/r/deep/inside"), Path::new("/elsewhere"));
        assert!(!out.starts_with("../"));
        assert_eq!(out, "_/_/_/elsewhere/");
    }

    #[test]
    fn test_strip_root() {
        assert_eq!(strip_root("/public"), "public");
        assert_eq!(strip_root("//a/b"), "a/b");
        assert_eq!(strip_root("dist"), "dist");
    }
}

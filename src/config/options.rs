//! Per-request asset options.
//!
//! # Example
//!
//! ```toml
//! name = "[path][name].[hash:8].[ext]"
//! output_path = ["/public", "/dist/static"]   # or "/public", or false
//! public_path = "https://cdn.example.com/project"
//! context = "/src"
//! extensions = ["png", "svg"]
//! limit = 4096
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Where resolved files are copied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawOutputPath")]
pub enum OutputPath {
    /// Reference only, never copy.
    Disabled,
    /// Copy into every directory (relative to the project root).
    Dirs(Vec<PathBuf>),
}

impl OutputPath {
    pub fn single(dir: impl Into<PathBuf>) -> Self {
        Self::Dirs(vec![dir.into()])
    }

    /// Destination directories; empty when disabled.
    pub fn dirs(&self) -> &[PathBuf] {
        match self {
            Self::Disabled => &[],
            Self::Dirs(dirs) => dirs,
        }
    }
}

impl Default for OutputPath {
    fn default() -> Self {
        Self::single("/public")
    }
}

/// TOML form: `"/public"`, `["/a", "/b"]`, or `false`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOutputPath {
    Flag(bool),
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl TryFrom<RawOutputPath> for OutputPath {
    type Error = ConfigError;

    fn try_from(raw: RawOutputPath) -> Result<Self, Self::Error> {
        match raw {
            RawOutputPath::Flag(false) => Ok(Self::Disabled),
            RawOutputPath::Flag(true) => Err(ConfigError::Validation(
                "`output_path = true` is not a directory; use a path or `false`".into(),
            )),
            RawOutputPath::One(dir) => Ok(Self::single(dir)),
            RawOutputPath::Many(dirs) if dirs.is_empty() => Ok(Self::Disabled),
            RawOutputPath::Many(dirs) => Ok(Self::Dirs(dirs)),
        }
    }
}

/// Options applied to every resolved asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetOptions {
    /// Name template, see [`crate::template`].
    pub name: String,

    /// Copy destinations.
    pub output_path: OutputPath,

    /// URI prefix; a trailing `/` is ignored.
    pub public_path: String,

    /// Directory `[path]` is computed from, relative to the root.
    /// A leading `/` is ignored.
    pub context: String,

    /// Extensions (without the dot) the caller should hand to the resolver.
    pub extensions: Vec<String>,

    /// Files strictly smaller than this many bytes are inlined.
    pub limit: u64,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            name: "[hash].[ext]".into(),
            output_path: OutputPath::default(),
            public_path: "/public".into(),
            context: String::new(),
            extensions: ["gif", "jpeg", "jpg", "png", "svg"]
                .into_iter()
                .map(String::from)
                .collect(),
            limit: 0,
        }
    }
}

impl AssetOptions {
    /// Whether `path` has one of the configured extensions (exact match).
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Public prefix without trailing `/`.
    pub fn public_prefix(&self) -> &str {
        self.public_path.strip_suffix('/').unwrap_or(&self.public_path)
    }

    /// `context` with the leading `/` removed.
    pub fn context_dir(&self) -> &str {
        self.context.strip_prefix('/').unwrap_or(&self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = AssetOptions::default();
        assert_eq!(opts.name, "[hash].[ext]");
        assert_eq!(opts.output_path.dirs(), &[PathBuf::from("/public")]);
        assert_eq!(opts.public_prefix(), "/public");
        assert_eq!(opts.limit, 0);
    }

    #[test]
    fn test_accepts() {
        let opts = AssetOptions::default();
        assert!(opts.accepts(Path::new("/a/b.png")));
        assert!(opts.accepts(Path::new("logo.svg")));
        assert!(!opts.accepts(Path::new("notes.txt")));
        assert!(!opts.accepts(Path::new("something")));
    }

    #[test]
    fn test_public_prefix_and_context() {
        let opts = AssetOptions {
            public_path: "/static/".into(),
            context: "/test/assets".into(),
            ..Default::default()
        };
        assert_eq!(opts.public_prefix(), "/static");
        assert_eq!(opts.context_dir(), "test/assets");
    }

    #[test]
    fn test_output_path_forms() {
        let opts: AssetOptions = toml::from_str(r#"output_path = "/dist""#).unwrap();
        assert_eq!(opts.output_path, OutputPath::single("/dist"));

        let opts: AssetOptions = toml::from_str(r#"output_path = ["/a", "/b"]"#).unwrap();
        assert_eq!(
            opts.output_path,
            OutputPath::Dirs(vec![PathBuf::from("/a"), PathBuf::from("/b")])
        );

        let opts: AssetOptions = toml::from_str("output_path = false").unwrap();
        assert_eq!(opts.output_path, OutputPath::Disabled);
        assert!(opts.output_path.dirs().is_empty());

        assert!(toml::from_str::<AssetOptions>("output_path = true").is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let opts: AssetOptions = toml::from_str("limit = 6\nextensions = [\"txt\"]").unwrap();
        assert_eq!(opts.limit, 6);
        assert_eq!(opts.extensions, vec!["txt".to_string()]);
        assert_eq!(opts.name, "[hash].[ext]");
        assert_eq!(opts.public_path, "/public");
    }
}

//! Asset configuration management for `assets.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError
//! ├── options    # AssetOptions, OutputPath
//! ├── util       # config file discovery
//! └── mod.rs     # AssetConfig (this file)
//! ```
//!
//! All keys are optional and top-level; see [`AssetOptions`] for defaults.

mod error;
mod options;
mod util;

pub use error::ConfigError;
pub use options::{AssetOptions, OutputPath};
pub use util::find_config_file;

use std::fs;
use std::path::{Path, PathBuf};

use crate::log;

/// Loaded configuration: options plus the project root they apply to.
#[derive(Debug, Clone, Default)]
pub struct AssetConfig {
    /// Config file the options came from, `None` when running on defaults.
    pub config_path: Option<PathBuf>,

    /// Project root: parent of the config file, or the starting directory.
    pub root: PathBuf,

    pub options: AssetOptions,
}

impl AssetConfig {
    /// Search upward from `start` for `config_name` and load it.
    ///
    /// A missing config file is not an error: defaults apply and the root
    /// is `start`.
    pub fn discover(start: &Path, config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start, config_name) {
            Some(path) => {
                let options = Self::from_path(&path)?;
                let root = path
                    .parent()
                    .map_or_else(|| start.to_path_buf(), Path::to_path_buf);
                Ok(Self {
                    config_path: Some(path),
                    root,
                    options,
                })
            }
            None => Ok(Self {
                config_path: None,
                root: start.to_path_buf(),
                options: AssetOptions::default(),
            }),
        }
    }

    /// Load options from a config file.
    pub fn from_path(path: &Path) -> Result<AssetOptions, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (options, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(options)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(AssetOptions, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let options = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((options, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }
}

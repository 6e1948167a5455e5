//! asset-uri - content-addressed references for static assets.
//!
//! Given a source file and [`AssetOptions`](config::AssetOptions), [`resolve`]
//! either inlines the file as a data URI or names it from a template such as
//! `[path][name].[sha256:hash:base62:8].[ext]`, copies it into the output
//! directories and returns `<public_path>/<name>`.
//!
//! ```ignore
//! use asset_uri::{AssetRequest, config::AssetOptions, resolve};
//!
//! let options = AssetOptions::default();
//! let uri = resolve(&AssetRequest::new(file, root, &options))?;
//! // "/public/9c87cbf3ba33126ffd25ae7f2f6bbafb.png"
//! ```

pub mod asset;
pub mod config;
pub mod error;
pub mod hash;
pub mod logger;
pub mod template;
pub mod utils;

pub use asset::{AssetRequest, ResolvedUri, resolve};
pub use error::{AssetError, Result};

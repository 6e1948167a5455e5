//! Shared helpers.
//!
//! - [`mime`]: extension → MIME type for data URIs
//! - [`path`]: lexical normalization and relative paths

pub mod mime;
pub mod path;

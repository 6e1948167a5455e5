//! Content digests for asset names.
//!
//! - [`algorithm`]: hash function selection (`md5` … `blake3`)
//! - [`base`]: radix encoding in bases 26 to 64
//! - [`spec`]: placeholder qualifiers and rendering

mod algorithm;
pub mod base;
mod spec;

pub use algorithm::HashAlgorithm;
pub use base::{SUPPORTED_BASES, encode};
pub use spec::{DEFAULT_MAX_LENGTH, DigestSpec, DigestType};

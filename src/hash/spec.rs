//! `[<algo>:hash:<digestType>:<maxLength>]` qualifiers.

use std::str::FromStr;

use crate::error::{AssetError, Result};

use super::{HashAlgorithm, base};

/// Length cap applied when the placeholder gives none (or gives `0`).
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// Text rendering of a raw digest.
///
/// `hex` is the only direct text encoding accepted; every other rendering
/// goes through a `base<N>` radix alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestType {
    #[default]
    Hex,
    /// Radix encoding through [`base::encode`].
    Base(u32),
}

impl FromStr for DigestType {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        if lower == "hex" {
            return Ok(Self::Hex);
        }

        let Some(digits) = lower.strip_prefix("base").filter(|d| !d.is_empty()) else {
            return Err(AssetError::UnsupportedDigestType(s.to_string()));
        };
        let n: u32 = digits
            .parse()
            .map_err(|_| AssetError::UnsupportedDigestType(s.to_string()))?;

        if base::alphabet(n).is_none() {
            return Err(AssetError::UnsupportedBase(n));
        }
        Ok(Self::Base(n))
    }
}

/// Fully parsed hash placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestSpec {
    pub algorithm: HashAlgorithm,
    pub digest_type: DigestType,
    pub max_length: usize,
}

impl Default for DigestSpec {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            digest_type: DigestType::default(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl DigestSpec {
    /// Build from the optional placeholder groups.
    ///
    /// # Errors
    ///
    /// Unknown algorithm, unsupported base, or unknown digest type.
    pub fn parse(
        algorithm: Option<&str>,
        digest_type: Option<&str>,
        max_length: Option<&str>,
    ) -> Result<Self> {
        let algorithm = algorithm
            .map(str::parse::<HashAlgorithm>)
            .transpose()?
            .unwrap_or_default();
        let digest_type = digest_type
            .map(str::parse::<DigestType>)
            .transpose()?
            .unwrap_or_default();
        let max_length = max_length
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_LENGTH);

        Ok(Self {
            algorithm,
            digest_type,
            max_length,
        })
    }

    /// Digest `contents` and render it, truncated to `max_length`.
    pub fn render(&self, contents: &[u8]) -> Result<String> {
        let digest = self.algorithm.digest(contents);
        let mut text = match self.digest_type {
            DigestType::Hex => hex::encode(digest),
            DigestType::Base(n) => base::encode(&digest, n)?,
        };
        // Both renderings are ASCII
        text.truncate(self.max_length);
        Ok(text)
    }
}

//! Positional radix encoding of digests.
//!
//! Digests are read as one non-negative integer, least significant byte
//! first (`bytes[0]` has weight `256^0`), then rendered most significant
//! digit first in one of eight fixed alphabets.
//!
//! | base | alphabet                                                        |
//! |------|-----------------------------------------------------------------|
//! | 26   | lowercase                                                       |
//! | 32   | `1-9` + lowercase, no `0 l i o`                                 |
//! | 36   | digits + lowercase                                              |
//! | 49   | lowercase + uppercase, no `l I O`                               |
//! | 52   | lowercase + uppercase                                           |
//! | 58   | `1-9` + lowercase + uppercase, no `0 l I O`                     |
//! | 62   | digits + lowercase + uppercase                                  |
//! | 64   | digits + lowercase + uppercase + `-_`                           |

use num_bigint::BigUint;

use crate::error::{AssetError, Result};

/// Bases accepted by [`encode`].
pub const SUPPORTED_BASES: [u32; 8] = [26, 32, 36, 49, 52, 58, 62, 64];

/// Alphabet for `base`, or `None` when the base is not supported.
pub fn alphabet(base: u32) -> Option<&'static [u8]> {
    let table: &'static [u8] = match base {
        26 => b"abcdefghijklmnopqrstuvwxyz",
        32 => b"123456789abcdefghjkmnpqrstuvwxyz",
        36 => b"0123456789abcdefghijklmnopqrstuvwxyz",
        49 => b"abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
        52 => b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        58 => b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
        62 => b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        64 => b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_",
        _ => return None,
    };
    Some(table)
}

/// Encode `bytes` in `base`.
///
/// A zero value (including an empty slice) encodes to the empty string.
///
/// # Errors
///
/// Returns [`AssetError::UnsupportedBase`] for any base outside
/// [`SUPPORTED_BASES`].
pub fn encode(bytes: &[u8], base: u32) -> Result<String> {
    let table = alphabet(base).ok_or(AssetError::UnsupportedBase(base))?;

    let value = BigUint::from_bytes_le(bytes);
    if value.bits() == 0 {
        return Ok(String::new());
    }

    Ok(value
        .to_radix_be(base)
        .into_iter()
        .map(|digit| table[digit as usize] as char)
        .collect())
}

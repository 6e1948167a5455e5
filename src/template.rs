//! Name template expansion.
//!
//! Placeholders (all case-insensitive):
//!
//! ```text
//! [ext]    file extension without the dot
//! [name]   file stem
//! [path]   directory relative to the context, with a trailing `/`
//! [hash]   content digest, see below
//! ```
//!
//! The hash placeholder takes up to three optional qualifiers:
//! `[<algo>:hash:<digestType>:<maxLength>]`, e.g. `[hash:8]`,
//! `[sha1:hash:base62]`, `[sha256:hash:hex:16]`. Every occurrence is replaced,
//! each with its own qualifiers. Other bracketed text is left alone.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::hash::DigestSpec;

static EXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[ext\]").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[name\]").unwrap());
static PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[path\]").unwrap());
static HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(?:([^:\[\]]+):)?hash(?::([a-z]+[0-9]*))?(?::([0-9]+))?\]").unwrap()
});

/// Path-derived placeholder values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParts {
    pub ext: String,
    pub name: String,
    pub directory: String,
}

/// Replace `[ext]`, `[name]` and `[path]`.
pub fn expand_file_parts(template: &str, parts: &FileParts) -> String {
    let out = EXT_RE.replace_all(template, regex::NoExpand(&parts.ext));
    let out = NAME_RE.replace_all(&out, regex::NoExpand(&parts.name));
    PATH_RE
        .replace_all(&out, regex::NoExpand(&parts.directory))
        .into_owned()
}

/// Replace every hash placeholder with the rendered digest of `contents`.
///
/// # Errors
///
/// The first placeholder with an unsupported algorithm, base, or digest type.
pub fn expand_hashes(template: &str, contents: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in HASH_RE.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        out.push_str(&digest_spec(&caps)?.render(contents)?);
        last = whole.end();
    }
    out.push_str(&template[last..]);

    Ok(out)
}

fn digest_spec(caps: &Captures<'_>) -> Result<DigestSpec> {
    let group = |i| caps.get(i).map(|m| m.as_str());
    DigestSpec::parse(group(1), group(2), group(3))
}

/// The on-disk part of an expanded name: query string dropped, no leading `/`.
pub fn on_disk_name(expanded: &str) -> &str {
    let path = expanded.split('?').next().unwrap_or(expanded);
    path.trim_start_matches('/')
}

//! Asset resolution: source file → URI.

use std::fs;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::debug;
use crate::error::{AssetError, Result};
use crate::template::{expand_file_parts, expand_hashes, on_disk_name};
use crate::utils::mime;

use super::meta::file_parts;
use super::process::copy_to_outputs;
use super::{AssetRequest, ResolvedUri};

/// Resolve one asset into the URI that replaces its reference.
///
/// Files strictly smaller than `limit` come back as a data URI and are never
/// copied. Everything else is named from the template, copied into each
/// output directory (unless output is disabled) and returned as
/// `<public_path>/<name>`, query string included.
///
/// # Errors
///
/// - [`AssetError::NotFound`] if the file does not exist (checked first)
/// - unsupported algorithm, base, or digest type in the template
/// - [`AssetError::Io`] on read, mkdir, or copy failure
pub fn resolve(request: &AssetRequest<'_>) -> Result<ResolvedUri> {
    let AssetRequest {
        file,
        root,
        options,
    } = *request;

    debug_assert!(
        file.is_absolute() && root.is_absolute(),
        "asset file and root must be absolute paths"
    );

    if !file.exists() {
        return Err(AssetError::NotFound(file.to_path_buf()));
    }

    let parts = file_parts(file, root, options.context_dir());
    let name = expand_file_parts(&options.name, &parts);

    let contents = fs::read(file).map_err(|err| AssetError::io(file, err))?;

    if (contents.len() as u64) < options.limit {
        debug!("inline"; "{} ({} bytes)", file.display(), contents.len());
        return Ok(ResolvedUri::Inline(data_uri(&parts.ext, &contents)));
    }

    let name = expand_hashes(&name, &contents)?;
    let written = copy_to_outputs(file, root, options.output_path.dirs(), on_disk_name(&name))?;

    let uri = format!(
        "{}/{}",
        options.public_prefix(),
        name.trim_start_matches('/')
    );
    debug!("resolve"; "{} -> {}", file.display(), uri);

    Ok(ResolvedUri::Reference { uri, written })
}

/// `data:<mime>;base64,<payload>`; unknown types leave the mime empty.
fn data_uri(ext: &str, contents: &[u8]) -> String {
    let mime = mime::from_extension(ext).unwrap_or_default();
    format!("data:{mime};base64,{}", STANDARD.encode(contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri("txt", b"hello"), "data:text/plain;base64,aGVsbG8=");
        assert_eq!(data_uri("unknown", b"hello"), "data:;base64,aGVsbG8=");
        assert_eq!(data_uri("png", b""), "data:image/png;base64,");
    }
}

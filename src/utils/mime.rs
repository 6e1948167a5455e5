//! MIME type detection for inline data URIs.
//!
//! Types carry no parameters (`text/plain`, not `text/plain; charset=utf-8`)
//! since they are spliced straight into `data:<mime>;base64,...`.

/// Common MIME type constants.
pub mod types {
    // Text
    pub const HTML: &str = "text/html";
    pub const PLAIN: &str = "text/plain";
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "text/javascript";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
    pub const MARKDOWN: &str = "text/markdown";
    pub const CSV: &str = "text/csv";

    // Documents
    pub const PDF: &str = "application/pdf";

    // Binary
    pub const WASM: &str = "application/wasm";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
    pub const BMP: &str = "image/bmp";
    pub const TIFF: &str = "image/tiff";

    // Audio
    pub const MP3: &str = "audio/mpeg";
    pub const WAV: &str = "audio/wav";
    pub const OGG_AUDIO: &str = "audio/ogg";
    pub const FLAC: &str = "audio/flac";

    // Video
    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";

    // Fonts
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
}

/// Guess MIME type from a file extension (without the dot, any case).
///
/// Returns `None` for unknown extensions.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        // Web / Text
        "html" | "htm" => types::HTML,
        "css" => types::CSS,
        "js" | "mjs" | "cjs" => types::JAVASCRIPT,
        "json" => types::JSON,
        "xml" => types::XML,
        "csv" => types::CSV,
        "txt" => types::PLAIN,
        "md" => types::MARKDOWN,

        // Images
        "svg" => types::SVG,
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "avif" => types::AVIF,
        "ico" => types::ICO,
        "bmp" => types::BMP,
        "tif" | "tiff" => types::TIFF,

        // Audio
        "mp3" => types::MP3,
        "wav" => types::WAV,
        "ogg" | "oga" => types::OGG_AUDIO,
        "flac" => types::FLAC,

        // Video
        "mp4" | "m4v" => types::MP4,
        "webm" => types::WEBM,

        // Fonts
        "woff" => types::WOFF,
        "woff2" => types::WOFF2,
        "ttf" => types::TTF,
        "otf" => types::OTF,

        // Documents / Binary
        "pdf" => types::PDF,
        "wasm" => types::WASM,

        _ => return None,
    };
    Some(mime)
}

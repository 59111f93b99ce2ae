//! Local files as `data:` URLs for image elements and thumbnails.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode bytes as `data:<mime>;base64,<payload>`.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read `path` and encode it as a `data:` URL, guessing the MIME type from
/// the extension.
///
/// # Errors
///
/// Any I/O error from reading the file.
pub async fn data_url_from_file(path: &Path) -> std::io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(data_url(mime.essence_str(), &bytes))
}

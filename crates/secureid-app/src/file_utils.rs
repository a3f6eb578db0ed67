//! Local image previews.

use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// MIME type guessed from the file extension.
pub fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Encode raw image bytes as a data URL for the webview.
pub fn image_data_url(path: &Path, data: &[u8]) -> String {
    format!("data:{};base64,{}", image_mime(path), STANDARD.encode(data))
}

/// Read a local file into a data URL. `None` if it cannot be read.
pub fn load_image_as_data_url(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(data) => Some(image_data_url(path, &data)),
        Err(e) => {
            tracing::warn!("Could not read image {}: {}", path.display(), e);
            None
        }
    }
}

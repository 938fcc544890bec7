//! Loading images from disk.

use std::fs;
use std::path::Path;

use image::ImageFormat;
use mosquito_core::ImageFile;

use crate::error::{CliError, CliResult};

/// MIME type used when neither content nor extension identify an image.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Read a file into an [`ImageFile`].
///
/// No size or type checks happen here; that is the workflow's job.
pub fn load_image(path: &Path) -> CliResult<ImageFile> {
    let bytes = fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();

    let mime = sniff_mime(path, &bytes);
    tracing::debug!(file = %name, mime = %mime, size = bytes.len(), "loaded image");

    Ok(ImageFile::new(name, mime, bytes))
}

/// Detect a MIME type from magic bytes, falling back to the extension.
pub fn sniff_mime(path: &Path, bytes: &[u8]) -> String {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok())
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

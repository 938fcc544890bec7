//! Display-only image previews.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode bytes as a `data:` URI usable as an `<img src>`.
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

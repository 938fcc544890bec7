//! Reads a picked file into a data URI for the preview image.

use js_sys::Uint8Array;
use mosquito_core::preview::data_uri;
use mosquito_core::FileCandidate;
use wasm_bindgen_futures::JsFuture;

use crate::types::BrowserFile;

/// Read the whole file via `Blob.arrayBuffer()` and base64-encode it.
pub async fn read_data_uri(file: &BrowserFile) -> Result<String, String> {
    let buffer = JsFuture::from(file.inner().array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(data_uri(file.mime_type(), &bytes))
}

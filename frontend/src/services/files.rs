//! Browser file I/O: reading the selected file and saving the result.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use crate::workflow::{DownloadArtifact, SelectedFile};

/// Declared metadata of a browser file.
pub fn selected_file(file: &File) -> SelectedFile {
    SelectedFile::new(file.name(), file.type_(), file.size() as u64)
}

/// Read the whole file into memory (local, no network).
pub async fn read_file_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Save the artifact through a temporary Blob URL and anchor click.
pub fn trigger_download(artifact: &DownloadArtifact) -> Result<(), String> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(artifact.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&artifact.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create Blob: {:?}", e))?;

    let blob_url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| "not an anchor element")?;
    link.set_href(&blob_url);
    link.set_download(&artifact.file_name);

    body.append_child(&link)
        .map_err(|e| format!("Failed to attach anchor: {:?}", e))?;
    link.click();
    let _ = body.remove_child(&link);
    let _ = Url::revoke_object_url(&blob_url);

    log::info!("Model Testing: download initiated via Blob URL ({})", artifact.file_name);
    Ok(())
}

use wasm_bindgen_futures::JsFuture;

/// Read a picked file fully into memory. The storage client takes plain
/// bytes, so the read happens before the upload is submitted.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Error reading file: {:?}", e))?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

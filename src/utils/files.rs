use crate::api::types::FileUpload;

/// Reads a browser `File` into memory so it can be attached to a multipart
/// request body.
#[cfg(target_arch = "wasm32")]
pub async fn read_file(file: &web_sys::File) -> Result<FileUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file".to_string())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}

/// Wires a file input's change event to an upload slot. Reading happens in
/// the background; a read failure leaves the slot unchanged.
#[cfg(target_arch = "wasm32")]
pub fn capture_upload(ev: &web_sys::Event, slot: leptos::RwSignal<Option<FileUpload>>) {
    use leptos::SignalSet;

    let Some(file) = first_selected_file(ev) else {
        slot.set(None);
        return;
    };
    leptos::spawn_local(async move {
        match read_file(&file).await {
            Ok(upload) => slot.set(Some(upload)),
            Err(msg) => log::warn!("file read failed: {}", msg),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn capture_upload(_ev: &web_sys::Event, _slot: leptos::RwSignal<Option<FileUpload>>) {}

pub fn first_selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

pub fn current_pathname() -> Option<String> {
    web_sys::window().and_then(|win| win.location().pathname().ok())
}

pub fn is_secure_context() -> bool {
    web_sys::window()
        .and_then(|win| win.location().protocol().ok())
        .map(|protocol| protocol == "https:")
        .unwrap_or(false)
}

pub fn read_cookie(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = window().ok()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    cookies.split(';').find_map(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if key == name => Some(value.to_string()),
            _ => None,
        }
    })
}

pub fn write_cookie(raw: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = window()?
        .document()
        .ok_or_else(|| "No document".to_string())?;
    let html_document = document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| "Not an HTML document".to_string())?;
    html_document
        .set_cookie(raw)
        .map_err(|_| "Failed to write cookie".to_string())
}

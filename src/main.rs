#[cfg(target_arch = "wasm32")]
fn main() {
    // Startup happens in menta_admin::start via #[wasm_bindgen(start)]
    // when the module instantiates.
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("menta-admin targets wasm32; build with trunk");
}

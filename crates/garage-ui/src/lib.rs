#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod errors;
pub mod pages;
pub mod router;
pub mod store;

pub use app::App;

/// Mounts the console app onto the document body. Called from the binary
/// entry point; exported for external embedding.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("garage console starting");
    leptos::mount::mount_to_body(App);
}

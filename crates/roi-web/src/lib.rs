//! Meeting ROI Calculator Frontend
//!
//! Leptos-based WASM frontend: input panel, results panel, and the
//! payment-gated savings comparison.

mod app;
mod browser;
mod components;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

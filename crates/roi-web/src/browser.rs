//! Browser Glue
//!
//! Thin wrappers around the web-sys globals so the gate and checkout logic
//! stay free of ambient browser state. Everything here degrades to a no-op
//! when the window object is unavailable.

use roi_payments::{AccessStore, PaymentError, Result, ACCESS_KEY, ACCESS_VALUE};

/// Durable access flag backed by `window.localStorage`.
pub struct LocalStorageAccess {
    storage: web_sys::Storage,
}

impl LocalStorageAccess {
    /// `None` when localStorage is unavailable (e.g. storage disabled).
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl AccessStore for LocalStorageAccess {
    fn load(&self) -> Result<bool> {
        let value = self
            .storage
            .get_item(ACCESS_KEY)
            .map_err(|_| PaymentError::Storage("localStorage read failed".into()))?;
        Ok(value.as_deref() == Some(ACCESS_VALUE))
    }

    fn set_unlocked(&self) -> Result<()> {
        self.storage
            .set_item(ACCESS_KEY, ACCESS_VALUE)
            .map_err(|_| PaymentError::Storage("localStorage write failed".into()))
    }
}

/// Origin of the current page, e.g. `https://roi.example`. The checkout
/// endpoint is resolved against it because the request builder needs an
/// absolute URL.
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Raw query string of the current page, e.g. `?session_id=abc`.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Remove the completion marker from the visible address without a reload.
pub fn strip_query() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/"));
        }
    }
}

/// Navigate the page to the checkout URL.
pub fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Blocking alert for checkout failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

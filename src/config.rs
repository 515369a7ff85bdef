//! Application configuration.
//!
//! Centralized configuration for the Driveline frontend. The parsing-service
//! base URL can be supplied by the hosting page via a `DRIVELINE_API_URL`
//! global; otherwise the hard-coded default is used.

use wasm_bindgen::JsValue;

/// Default parsing-service base URL.
pub const DEFAULT_API_BASE: &str = "https://driveline-api-server-production.up.railway.app";

/// The only accepted MIME type for uploads.
pub const PDF_MIME: &str = "application/pdf";

/// Maximum employment entries shown in the results panel.
///
/// Display-only truncation; CSV export always serializes the full history.
pub const EMPLOYMENT_DISPLAY_LIMIT: usize = 5;

/// Resolve the parsing-service base URL.
///
/// Reads `window.DRIVELINE_API_URL` if the hosting page set one, falling back
/// to [`DEFAULT_API_BASE`].
pub fn api_base() -> String {
    let window = gloo_utils::window();
    js_sys::Reflect::get(&window, &JsValue::from_str("DRIVELINE_API_URL"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

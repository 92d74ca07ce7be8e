//! Best-effort clipboard writes via the async Clipboard API.

use wasm_bindgen_futures::JsFuture;

/// Write text to the system clipboard.
///
/// Returns `false` when the browser window is unavailable or the write is
/// rejected (e.g. missing permission). Callers treat copying as best-effort
/// and only show feedback on success.
pub async fn write_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.is_ok()
}

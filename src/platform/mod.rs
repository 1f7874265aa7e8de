//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory natively)
//! - Cell rendering (DOM elements on web)
//! - User-facing dialogs
//! - Keyboard shortcuts

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod keys;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use keys::Shortcut;

use crate::error::EditorError;

/// Show a blocking informational dialog
#[cfg(target_arch = "wasm32")]
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn notify(message: &str) {
    log::info!("{message}");
}

/// Log a failed operation and tell the user
pub fn report(err: &EditorError) {
    log::warn!("{err} ({:?})", err.kind());
    notify(&err.user_message());
}

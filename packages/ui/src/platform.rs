//! Browser side effects: the cookie jar, blocking alerts and navigation.
//!
//! Off the web these degrade to an in-memory jar and traces, so the
//! components still render under desktop or test renderers.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformJar = store::DocumentJar;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformJar = store::MemoryJar;

/// Show a blocking notification.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    tracing::warn!("{}", message);
}

/// Reload the app at `/` so the page starts from the new cookie.
pub fn redirect_home() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("redirect to / skipped outside the browser");
}

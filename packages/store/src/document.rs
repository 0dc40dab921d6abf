//! # `document.cookie` jar: browser-side cookie access
//!
//! [`DocumentJar`] is the [`CookieJar`] used on the **web platform**. It reads
//! and assigns `document.cookie` through `web-sys`, so the browser applies the
//! `path` and `SameSite` attributes carried by each [`SetCookie`].
//!
//! ## Error handling
//!
//! If the window or an HTML document is unavailable, or the cookie property
//! throws (e.g. on a sandboxed `data:` page), reads return `""` and writes are
//! dropped with an error trace. An unreadable cookie is an anonymous session.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::codec::SetCookie;
use crate::jar::CookieJar;

/// CookieJar backed by the current page's `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentJar;

impl DocumentJar {
    pub fn new() -> Self {
        Self
    }

    fn html_document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CookieJar for DocumentJar {
    fn read(&self) -> String {
        let Some(document) = Self::html_document() else {
            tracing::error!("no html document, treating cookie as empty");
            return String::new();
        };
        match document.cookie() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("failed to read document.cookie: {:?}", e);
                String::new()
            }
        }
    }

    fn write(&self, cookie: &SetCookie) {
        let Some(document) = Self::html_document() else {
            tracing::error!(name = %cookie.name, "no html document, cookie not written");
            return;
        };
        if let Err(e) = document.set_cookie(&cookie.to_string()) {
            tracing::error!(name = %cookie.name, "failed to write document.cookie: {:?}", e);
        }
    }
}

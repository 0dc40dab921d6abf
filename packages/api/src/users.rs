//! Backend user record creation (`POST /users`).

use reqwest::Client;
use serde::Serialize;
use store::BackendConfig;

use crate::auth::AuthError;

#[derive(Debug, Serialize)]
struct NewUser<'a> {
    email: &'a str,
}

/// Creates the backend record for a freshly signed-up account.
#[allow(async_fn_in_trait)]
pub trait UserRegistry {
    async fn register(&self, email: &str) -> Result<(), AuthError>;
}

/// Origin used off the web when `base_url` is empty.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Origin of the page the client runs in.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> String {
    match web_sys::window().and_then(|window| window.location().origin().ok()) {
        Some(origin) => origin,
        None => {
            tracing::error!("no window location, using {}", DEFAULT_ORIGIN);
            DEFAULT_ORIGIN.to_string()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

/// [`UserRegistry`] that posts `{ "email": ... }` to the backend.
///
/// Only the status matters; the response body is ignored.
pub struct HttpUserRegistry {
    url: String,
    client: Client,
}

impl HttpUserRegistry {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            url: config.users_url(&page_origin()),
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UserRegistry for HttpUserRegistry {
    async fn register(&self, email: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(&self.url)
            .json(&NewUser { email })
            .send()
            .await
            .map_err(|e| AuthError::Registration(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Registration(format!(
                "{} returned {}",
                self.url, status
            )));
        }
        Ok(())
    }
}

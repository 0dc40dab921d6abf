//! # Firebase Authentication over the Identity Toolkit REST API
//!
//! [`FirebaseAuth`] implements [`IdentityProvider`] with the same endpoints the
//! Firebase JS SDK calls for email/password accounts:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`create_account`](IdentityProvider::create_account) | `accounts:signUp` |
//! | [`sign_in`](IdentityProvider::sign_in) | `accounts:signInWithPassword` |
//!
//! Both take `{ email, password, returnSecureToken: true }` and answer with
//! the account's `localId`, `email` and `idToken`. The account is kept in
//! memory until [`sign_out`](IdentityProvider::sign_out), which is a local
//! operation just like the SDK's.
//!
//! ## Errors
//!
//! Failed calls answer with
//! `{ "error": { "code": 400, "message": "WEAK_PASSWORD : Password should be at least 6 characters" } }`.
//! The part before ` : ` is the provider code, the rest (when present) is the
//! human-readable detail.

use std::sync::Mutex;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use store::FirebaseConfig;

use super::error::AuthError;
use super::provider::{Account, IdentityProvider, NO_CURRENT_USER};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Map an Identity Toolkit error response body to an [`AuthError`].
pub(crate) fn parse_error_body(status: u16, body: &str) -> AuthError {
    let raw = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_default();
    if raw.is_empty() {
        return AuthError::provider(&format!("http-{status}"), format!("HTTP {status}"));
    }
    match raw.split_once(" : ") {
        Some((code, detail)) => AuthError::provider(code.trim(), detail.trim()),
        None => AuthError::provider(&raw, readable(&raw)),
    }
}

/// `INVALID_LOGIN_CREDENTIALS` -> `Invalid login credentials`.
fn readable(code: &str) -> String {
    let lower = code.replace('_', " ").to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Firebase email/password identity provider.
pub struct FirebaseAuth {
    config: FirebaseConfig,
    client: Client,
    current: Mutex<Option<Account>>,
}

impl FirebaseAuth {
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            current: Mutex::new(None),
        }
    }

    /// The account signed in through this handle, if any.
    pub fn current_account(&self) -> Option<Account> {
        self.current.lock().unwrap().clone()
    }

    async fn password_call(
        &self,
        method: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthError> {
        let response = self
            .client
            .post(self.config.identity_toolkit_url(method))
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = parse_error_body(status.as_u16(), &body);
            tracing::error!(method, status = status.as_u16(), "identity toolkit call failed: {}", err);
            return Err(err);
        }

        let body: AccountResponse = response.json().await?;
        let account = Account {
            local_id: body.local_id,
            email: if body.email.is_empty() {
                email.to_string()
            } else {
                body.email
            },
            id_token: body.id_token,
        };
        *self.current.lock().unwrap() = Some(account.clone());
        Ok(account)
    }
}

impl IdentityProvider for FirebaseAuth {
    async fn create_account(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        self.password_call("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        self.password_call("signInWithPassword", email, password).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.current.lock().unwrap() = None;
        Ok(())
    }

    async fn current_token(&self) -> Result<String, AuthError> {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .map(|account| account.id_token.clone())
            .ok_or_else(|| AuthError::provider(NO_CURRENT_USER, "No user is signed in"))
    }
}

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Provider code used when a token is requested with nobody signed in.
pub const NO_CURRENT_USER: &str = "no-current-user";

/// A signed-in account as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
}

/// Async interface to the identity provider.
///
/// The futures are not required to be `Send`: on the web they wrap browser
/// `fetch` promises.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<Account, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Account, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// ID token of the currently signed-in account.
    async fn current_token(&self) -> Result<String, AuthError>;
}

//! Authentication against the identity provider.

mod config;
mod error;
mod firebase;
mod provider;

#[cfg(not(target_arch = "wasm32"))]
pub use config::firebase_from_env;
pub use config::{load_app_config, ConfigError};
pub use error::{Action, AuthError, ProviderErrorCode, ValidationError};
pub use firebase::FirebaseAuth;
pub use provider::{Account, IdentityProvider, NO_CURRENT_USER};

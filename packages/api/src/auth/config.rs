//! Client configuration: embedded `taskboard.toml`, with Firebase settings
//! overridable from environment variables on native targets.

use store::AppConfig;
#[cfg(not(target_arch = "wasm32"))]
use store::FirebaseConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("invalid taskboard.toml: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Parse the embedded config. On native targets a set `FIREBASE_API_KEY`
/// replaces the whole `[firebase]` section with [`firebase_from_env`].
pub fn load_app_config(embedded: &str) -> Result<AppConfig, ConfigError> {
    #[allow(unused_mut)]
    let mut config = AppConfig::from_toml(embedded)?;

    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        if std::env::var_os("FIREBASE_API_KEY").is_some() {
            config.firebase = firebase_from_env()?;
            tracing::info!(project_id = %config.firebase.project_id, "firebase config from environment");
        }
    }

    Ok(config)
}

#[cfg(not(target_arch = "wasm32"))]
fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

#[cfg(not(target_arch = "wasm32"))]
fn optional(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Create Firebase config from environment variables.
#[cfg(not(target_arch = "wasm32"))]
pub fn firebase_from_env() -> Result<FirebaseConfig, ConfigError> {
    dotenvy::dotenv().ok();

    Ok(FirebaseConfig {
        api_key: required("FIREBASE_API_KEY")?,
        auth_domain: required("FIREBASE_AUTH_DOMAIN")?,
        project_id: required("FIREBASE_PROJECT_ID")?,
        storage_bucket: optional("FIREBASE_STORAGE_BUCKET"),
        messaging_sender_id: optional("FIREBASE_MESSAGING_SENDER_ID"),
        app_id: optional("FIREBASE_APP_ID"),
    })
}

//! # Client configuration: `taskboard.toml`
//!
//! Defines the TOML file the web client embeds at build time. It names the
//! Firebase project used for sign-in and the backend that receives new user
//! records.
//!
//! ## Structure
//!
//! ```toml
//! [firebase]
//! api_key = "AIza..."
//! auth_domain = "my-project.firebaseapp.com"
//! project_id = "my-project"
//! storage_bucket = "my-project.firebasestorage.app"
//! messaging_sender_id = "1234567890"
//! app_id = "1:1234567890:web:abcdef"
//!
//! [backend]
//! base_url = ""        # empty = same origin as the page
//! users_path = "/users"
//! ```
//!
//! A missing `[backend]` section is equivalent to the defaults above. Every
//! `[firebase]` key except `api_key` may be omitted.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `taskboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Firebase web app settings, as shown in the Firebase console.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub app_id: String,
}

const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";

impl FirebaseConfig {
    /// Identity Toolkit endpoint for an `accounts:<method>` call.
    pub fn identity_toolkit_url(&self, method: &str) -> String {
        format!(
            "{IDENTITY_TOOLKIT_BASE}/accounts:{method}?key={}",
            self.api_key
        )
    }
}

/// Backend HTTP settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Origin of the backend. Empty means the page's own origin.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_users_path")]
    pub users_path: String,
}

fn default_users_path() -> String {
    "/users".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            users_path: default_users_path(),
        }
    }
}

impl BackendConfig {
    /// Absolute URL of the user registration endpoint. An empty `base_url`
    /// resolves against `page_origin` (e.g. `https://tasks.example.com`).
    pub fn users_url(&self, page_origin: &str) -> String {
        let base = if self.base_url.is_empty() {
            page_origin
        } else {
            &self.base_url
        };
        format!("{}{}", base.trim_end_matches('/'), self.users_path)
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml(
            r#"
            [firebase]
            api_key = "key-1"
            auth_domain = "demo.firebaseapp.com"
            project_id = "demo"
            storage_bucket = "demo.firebasestorage.app"
            messaging_sender_id = "42"
            app_id = "1:42:web:ff"

            [backend]
            base_url = "http://localhost:8000/"
            users_path = "/api/users"
            "#,
        )
        .unwrap();

        assert_eq!(config.firebase.project_id, "demo");
        assert_eq!(
            config.backend.users_url("https://ignored.example.com"),
            "http://localhost:8000/api/users"
        );
    }

    #[test]
    fn test_backend_defaults() {
        let config = AppConfig::from_toml("[firebase]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.backend, BackendConfig::default());
        assert_eq!(config.backend.users_path, "/users");
        assert_eq!(
            config.backend.users_url("https://tasks.example.com/"),
            "https://tasks.example.com/users"
        );
        assert_eq!(config.firebase.auth_domain, "");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        assert!(AppConfig::from_toml("[firebase]\nproject_id = \"p\"\n").is_err());
    }

    #[test]
    fn test_identity_toolkit_url() {
        let firebase = FirebaseConfig {
            api_key: "abc".to_string(),
            ..Default::default()
        };
        assert_eq!(
            firebase.identity_toolkit_url("signUp"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=abc"
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.firebase.api_key = "k".to_string();
        config.backend.base_url = "https://api.example.com".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}

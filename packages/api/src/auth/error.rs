//! # Error taxonomy for authentication actions
//!
//! Three sources of failure reach the user:
//!
//! - **Validation** of the credential form, before any network call.
//! - **Provider** errors reported by the identity provider, carrying a
//!   provider-defined code. Only three codes are classified
//!   ([`ProviderErrorCode`]); everything else falls back to the provider's
//!   message.
//! - **Registration** failures of the backend `POST /users` call, which are
//!   not classified.
//!
//! [`AuthError::user_message`] turns any of them into the text shown in the
//! blocking alert for a given [`Action`].

use thiserror::Error;

const GENERIC_SIGNUP_MESSAGE: &str = "An error occurred during signup.";

/// The user action that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SignUp,
    Login,
    SignOut,
}

/// Provider error codes this client knows how to explain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderErrorCode {
    EmailAlreadyInUse,
    InvalidEmail,
    WeakPassword,
    Other(String),
}

impl ProviderErrorCode {
    /// Classify a raw code. Accepts the JS SDK spelling
    /// (`auth/email-already-in-use`) and the REST spelling (`EMAIL_EXISTS`).
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/email-already-in-use" | "EMAIL_EXISTS" => Self::EmailAlreadyInUse,
            "auth/invalid-email" | "INVALID_EMAIL" => Self::InvalidEmail,
            "auth/weak-password" | "WEAK_PASSWORD" => Self::WeakPassword,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Credential form problems caught before contacting the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Provider {
        code: ProviderErrorCode,
        message: String,
    },

    #[error("user registration failed: {0}")]
    Registration(String),

    #[error("request to identity provider failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AuthError {
    pub fn provider(code: &str, message: impl Into<String>) -> Self {
        Self::Provider {
            code: ProviderErrorCode::from_code(code),
            message: message.into(),
        }
    }

    /// Text for the blocking notification shown when `action` fails.
    pub fn user_message(&self, action: Action) -> String {
        if let Self::Validation(e) = self {
            return e.to_string();
        }
        match action {
            Action::SignUp => self.signup_message(),
            Action::Login => format!("Login failed: {}", self.detail()),
            Action::SignOut => format!("Sign out failed: {}", self.detail()),
        }
    }

    fn signup_message(&self) -> String {
        match self {
            Self::Provider { code, message } => match code {
                ProviderErrorCode::EmailAlreadyInUse => {
                    "This email is already registered. Please use a different email or login."
                        .to_string()
                }
                ProviderErrorCode::InvalidEmail => {
                    "Please enter a valid email address.".to_string()
                }
                ProviderErrorCode::WeakPassword => {
                    "Password should be at least 6 characters long.".to_string()
                }
                ProviderErrorCode::Other(_) if message.is_empty() => {
                    GENERIC_SIGNUP_MESSAGE.to_string()
                }
                ProviderErrorCode::Other(_) => message.clone(),
            },
            _ => GENERIC_SIGNUP_MESSAGE.to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Provider { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

//! # Sign-up, login and sign-out flows
//!
//! [`AuthFlow`] ties an [`IdentityProvider`], a [`UserRegistry`] and a
//! [`CookieJar`] together. Each user action is one async call taking the
//! credentials and returning the new [`UiState`] or an [`AuthError`]:
//!
//! | Action | Steps |
//! |--------|-------|
//! | [`sign_up`](AuthFlow::sign_up) | validate → create account → get token → set cookie → `POST /users` |
//! | [`login`](AuthFlow::login) | sign in → get token → set cookie |
//! | [`sign_out`](AuthFlow::sign_out) | provider sign-out → set empty cookie |
//!
//! On any failure the cookie is left as it was before the action. For
//! sign-up that means rewriting the previous token and signing the new
//! account out of the provider if the backend call fails after the cookie
//! was already set. Nothing is retried.

use store::{compute_ui_state, decode, encode, CookieJar, UiState};

use crate::auth::{AuthError, IdentityProvider, ValidationError};
use crate::users::UserRegistry;

/// Minimum password length accepted by the sign-up form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Email and password entered in the credential form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn validate_for_sign_up(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

pub struct AuthFlow<P, R, J> {
    provider: P,
    registry: R,
    jar: J,
}

impl<P, R, J> AuthFlow<P, R, J>
where
    P: IdentityProvider,
    R: UserRegistry,
    J: CookieJar,
{
    pub fn new(provider: P, registry: R, jar: J) -> Self {
        Self {
            provider,
            registry,
            jar,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Session state on page load, from the existing cookie.
    pub fn initial_state(&self) -> UiState {
        compute_ui_state(&decode(&self.jar.read()))
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<UiState, AuthError> {
        credentials.validate_for_sign_up()?;

        let account = self
            .provider
            .create_account(&credentials.email, &credentials.password)
            .await?;
        tracing::info!(email = %account.email, "account created");

        let token = self.provider.current_token().await?;
        let previous = decode(&self.jar.read());
        self.jar.write(&encode(&token));

        if let Err(e) = self.registry.register(&account.email).await {
            tracing::error!(email = %account.email, "user registration failed: {}", e);
            self.jar.write(&encode(&previous));
            if let Err(sign_out_err) = self.provider.sign_out().await {
                tracing::error!("provider sign-out after failed registration: {}", sign_out_err);
            }
            return Err(e);
        }

        Ok(compute_ui_state(&token))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UiState, AuthError> {
        let account = self
            .provider
            .sign_in(&credentials.email, &credentials.password)
            .await?;
        let token = self.provider.current_token().await?;
        self.jar.write(&encode(&token));
        tracing::info!(email = %account.email, "logged in");

        Ok(compute_ui_state(&token))
    }

    pub async fn sign_out(&self) -> Result<UiState, AuthError> {
        self.provider.sign_out().await?;
        self.jar.write(&encode(""));
        tracing::info!("signed out");

        Ok(compute_ui_state(""))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use store::{MemoryJar, SessionState};

    use super::*;
    use crate::auth::{Account, Action, ProviderErrorCode, NO_CURRENT_USER};

    /// In-memory provider keyed by email/password pairs.
    #[derive(Default)]
    struct FakeProvider {
        accounts: RefCell<Vec<(String, String)>>,
        signed_in: RefCell<Option<Account>>,
        calls: Cell<usize>,
        fail_sign_out: bool,
    }

    impl FakeProvider {
        fn with_account(email: &str, password: &str) -> Self {
            let provider = Self::default();
            provider
                .accounts
                .borrow_mut()
                .push((email.to_string(), password.to_string()));
            provider
        }

        fn account(email: &str) -> Account {
            Account {
                local_id: format!("uid-{email}"),
                email: email.to_string(),
                id_token: format!("token-for-{email}"),
            }
        }
    }

    impl IdentityProvider for FakeProvider {
        async fn create_account(&self, email: &str, password: &str) -> Result<Account, AuthError> {
            self.calls.set(self.calls.get() + 1);
            if self.accounts.borrow().iter().any(|(e, _)| e == email) {
                return Err(AuthError::provider("auth/email-already-in-use", "in use"));
            }
            self.accounts
                .borrow_mut()
                .push((email.to_string(), password.to_string()));
            let account = Self::account(email);
            *self.signed_in.borrow_mut() = Some(account.clone());
            Ok(account)
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<Account, AuthError> {
            self.calls.set(self.calls.get() + 1);
            let known = self
                .accounts
                .borrow()
                .iter()
                .any(|(e, p)| e == email && p == password);
            if !known {
                return Err(AuthError::provider(
                    "INVALID_LOGIN_CREDENTIALS",
                    "Invalid login credentials",
                ));
            }
            let account = Self::account(email);
            *self.signed_in.borrow_mut() = Some(account.clone());
            Ok(account)
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            if self.fail_sign_out {
                return Err(AuthError::provider("network-request-failed", "offline"));
            }
            *self.signed_in.borrow_mut() = None;
            Ok(())
        }

        async fn current_token(&self) -> Result<String, AuthError> {
            self.signed_in
                .borrow()
                .as_ref()
                .map(|a| a.id_token.clone())
                .ok_or_else(|| AuthError::provider(NO_CURRENT_USER, "No user is signed in"))
        }
    }

    #[derive(Default)]
    struct FakeRegistry {
        registered: RefCell<Vec<String>>,
        fail: bool,
    }

    impl UserRegistry for FakeRegistry {
        async fn register(&self, email: &str) -> Result<(), AuthError> {
            if self.fail {
                return Err(AuthError::Registration("/users returned 500".to_string()));
            }
            self.registered.borrow_mut().push(email.to_string());
            Ok(())
        }
    }

    fn flow(
        provider: FakeProvider,
        registry: FakeRegistry,
        jar: MemoryJar,
    ) -> AuthFlow<FakeProvider, FakeRegistry, MemoryJar> {
        AuthFlow::new(provider, registry, jar)
    }

    #[tokio::test]
    async fn test_fresh_page_load_is_anonymous() {
        let flow = flow(FakeProvider::default(), FakeRegistry::default(), MemoryJar::new());
        let state = flow.initial_state();
        assert_eq!(state.session(), SessionState::Anonymous);
        assert!(!state.regions().task_board);
    }

    #[tokio::test]
    async fn test_existing_cookie_is_authenticated() {
        let jar = MemoryJar::with_cookie("token=abc");
        let flow = flow(FakeProvider::default(), FakeRegistry::default(), jar);
        assert!(flow.initial_state().authenticated);
    }

    #[tokio::test]
    async fn test_login_sets_cookie() {
        let jar = MemoryJar::new();
        let flow = flow(
            FakeProvider::with_account("xyz@example.com", "hunter22"),
            FakeRegistry::default(),
            jar.clone(),
        );

        let state = flow
            .login(&Credentials::new("xyz@example.com", "hunter22"))
            .await
            .unwrap();

        assert_eq!(state.session(), SessionState::Authenticated);
        assert_eq!(
            jar.last_written().as_deref(),
            Some("token=token-for-xyz@example.com;path=/;SameSite=Strict")
        );
        assert!(flow.initial_state().authenticated);
    }

    #[tokio::test]
    async fn test_login_failure_leaves_cookie_untouched() {
        let jar = MemoryJar::new();
        let flow = flow(
            FakeProvider::with_account("a@example.com", "right-password"),
            FakeRegistry::default(),
            jar.clone(),
        );

        let err = flow
            .login(&Credentials::new("a@example.com", "wrong-password"))
            .await
            .unwrap_err();

        assert_eq!(
            err.user_message(Action::Login),
            "Login failed: Invalid login credentials"
        );
        assert!(jar.history().is_empty());
        assert!(!flow.initial_state().authenticated);
    }

    #[tokio::test]
    async fn test_sign_up_registers_after_cookie() {
        let jar = MemoryJar::new();
        let flow = flow(FakeProvider::default(), FakeRegistry::default(), jar.clone());

        let state = flow
            .sign_up(&Credentials::new("new@example.com", "secret1"))
            .await
            .unwrap();

        assert!(state.authenticated);
        assert_eq!(decode(&jar.read()), "token-for-new@example.com");
        assert_eq!(*flow.registry.registered.borrow(), vec!["new@example.com"]);
    }

    #[tokio::test]
    async fn test_sign_up_validation_skips_provider() {
        let flow = flow(FakeProvider::default(), FakeRegistry::default(), MemoryJar::new());

        let err = flow
            .sign_up(&Credentials::new("", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(Action::SignUp),
            "Please enter both email and password"
        );

        let err = flow
            .sign_up(&Credentials::new("a@example.com", "12345"))
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(Action::SignUp),
            "Password must be at least 6 characters long"
        );

        assert_eq!(flow.provider().calls.get(), 0);
        assert!(flow.jar().history().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_email_in_use() {
        let jar = MemoryJar::new();
        let flow = flow(
            FakeProvider::with_account("taken@example.com", "whatever"),
            FakeRegistry::default(),
            jar.clone(),
        );

        let err = flow
            .sign_up(&Credentials::new("taken@example.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Provider {
                code: ProviderErrorCode::EmailAlreadyInUse,
                ..
            }
        ));
        assert!(jar.history().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_registration_failure_restores_cookie() {
        let jar = MemoryJar::with_cookie("theme=dark");
        let registry = FakeRegistry {
            fail: true,
            ..Default::default()
        };
        let flow = flow(FakeProvider::default(), registry, jar.clone());

        let err = flow
            .sign_up(&Credentials::new("new@example.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(
            err.user_message(Action::SignUp),
            "An error occurred during signup."
        );
        assert_eq!(decode(&jar.read()), "");
        assert!(!flow.initial_state().authenticated);
        assert_eq!(jar.history().len(), 2);
        assert!(flow.provider().current_token().await.is_err());
    }

    #[tokio::test]
    async fn test_sign_out_empties_cookie() {
        let jar = MemoryJar::new();
        let flow = flow(
            FakeProvider::with_account("a@example.com", "secret1"),
            FakeRegistry::default(),
            jar.clone(),
        );
        flow.login(&Credentials::new("a@example.com", "secret1"))
            .await
            .unwrap();

        let state = flow.sign_out().await.unwrap();

        assert_eq!(state.session(), SessionState::Anonymous);
        assert_eq!(jar.read(), "token=");
        assert_eq!(
            jar.last_written().as_deref(),
            Some("token=;path=/;SameSite=Strict")
        );
        assert!(!flow.initial_state().authenticated);
    }

    #[tokio::test]
    async fn test_sign_out_failure_keeps_session() {
        let jar = MemoryJar::with_cookie("token=abc");
        let provider = FakeProvider {
            fail_sign_out: true,
            ..Default::default()
        };
        let flow = flow(provider, FakeRegistry::default(), jar.clone());

        let err = flow.sign_out().await.unwrap_err();

        assert_eq!(err.user_message(Action::SignOut), "Sign out failed: offline");
        assert_eq!(decode(&jar.read()), "abc");
    }
}

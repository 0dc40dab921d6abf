//! # API crate: identity provider and backend calls for the task board client
//!
//! Everything the page does over the network lives here, behind traits so the
//! flows can be exercised without a browser or a Firebase project.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `IdentityProvider` trait, Firebase Identity Toolkit client, config loading, error taxonomy and user-facing messages |
//! | [`users`] | `UserRegistry` trait and the `POST /users` client |
//! | [`flow`] | `AuthFlow`: sign-up, login and sign-out as request/result calls that keep the token cookie in step |

pub mod auth;
pub mod flow;
pub mod users;

pub use auth::{load_app_config, Action, AuthError, ConfigError, FirebaseAuth, IdentityProvider};
pub use flow::{AuthFlow, Credentials};
pub use users::{HttpUserRegistry, UserRegistry};

/// Flow wired to the real provider and backend.
pub type HttpAuthFlow<J> = AuthFlow<FirebaseAuth, HttpUserRegistry, J>;

/// Build the production flow from the client config.
pub fn http_flow<J: store::CookieJar>(config: &store::AppConfig, jar: J) -> HttpAuthFlow<J> {
    AuthFlow::new(
        FirebaseAuth::new(config.firebase.clone()),
        HttpUserRegistry::new(&config.backend),
        jar,
    )
}

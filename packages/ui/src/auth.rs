//! Authentication context and controls for the UI.

use std::rc::Rc;

use api::{Action, AuthError, Credentials, HttpAuthFlow};
use dioxus::prelude::*;
use store::{update_ui, AppConfig, CookieJar, RegionVisibility, UiSink, UiState};

use crate::platform::{self, PlatformJar};

/// The flow every control in the page shares.
pub type ClientFlow = HttpAuthFlow<PlatformJar>;

/// Visible regions for the current session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthState {
    pub regions: RegionVisibility,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            regions: UiState::default().regions(),
        }
    }
}

impl UiSink for AuthState {
    fn apply(&mut self, regions: RegionVisibility) {
        self.regions = regions;
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_auth_flow() -> Rc<ClientFlow> {
    use_context::<Rc<ClientFlow>>()
}

/// Provider component that owns the session.
/// Wrap the page with this component to enable the auth controls.
#[component]
pub fn AuthProvider(config: AppConfig, children: Element) -> Element {
    let flow = use_hook(|| Rc::new(api::http_flow(&config, PlatformJar::default())));

    // The cookie is read once, on page load.
    let auth_state = use_signal(|| {
        let mut state = AuthState::default();
        update_ui(&flow.jar().read(), &mut state);
        state
    });

    use_context_provider(|| flow);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

fn finish(mut auth: Signal<AuthState>, action: Action, result: Result<UiState, AuthError>) {
    match result {
        Ok(state) => {
            auth.write().apply(state.regions());
            platform::redirect_home();
        }
        Err(e) => {
            tracing::error!(?action, "auth action failed: {}", e);
            platform::alert(&e.user_message(action));
        }
    }
}

/// Email/password form with the sign-up and login buttons.
/// Hidden while a session is active.
#[component]
pub fn LoginBox() -> Element {
    let auth = use_auth();
    let flow = use_auth_flow();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut signing_up = use_signal(|| false);

    let sign_up_flow = flow.clone();
    let on_sign_up = move |_| {
        let flow = sign_up_flow.clone();
        async move {
            let credentials = Credentials::new(email(), password());
            signing_up.set(true);
            let result = flow.sign_up(&credentials).await;
            signing_up.set(false);
            finish(auth, Action::SignUp, result);
        }
    };

    let on_login = move |_| {
        let flow = flow.clone();
        async move {
            let credentials = Credentials::new(email(), password());
            let result = flow.login(&credentials).await;
            finish(auth, Action::Login, result);
        }
    };

    rsx! {
        div {
            id: "login-box",
            hidden: !auth().regions.login_box,

            input {
                id: "email",
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                id: "password",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button {
                id: "sign-up",
                disabled: signing_up(),
                onclick: on_sign_up,
                if signing_up() {
                    "Creating account..."
                } else {
                    "Sign Up"
                }
            }
            button {
                id: "login",
                onclick: on_login,
                "Login"
            }
        }
    }
}

/// Button to sign out. Hidden while anonymous.
#[component]
pub fn SignOutButton(#[props(default = "Sign Out".to_string())] label: String) -> Element {
    let auth = use_auth();
    let flow = use_auth_flow();

    let onclick = move |_| {
        let flow = flow.clone();
        async move {
            let result = flow.sign_out().await;
            finish(auth, Action::SignOut, result);
        }
    };

    rsx! {
        button {
            id: "sign-out",
            hidden: !auth().regions.sign_out,
            onclick: onclick,
            "{label}"
        }
    }
}

/// Authenticated content. Rendered with `display: none` while anonymous.
#[component]
pub fn TaskBoardContainer(children: Element) -> Element {
    let auth = use_auth();
    let display = if auth().regions.task_board {
        "block"
    } else {
        "none"
    };

    rsx! {
        div {
            id: "task-board-container",
            style: "display: {display};",
            {children}
        }
    }
}

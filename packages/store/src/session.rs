//! # Session UI gate
//!
//! Decides which UI regions are visible from whether a session token is
//! present. The mapping is a pure function of [`UiState::authenticated`];
//! nothing else may influence it.
//!
//! | State | Login box | Sign-out button | Task board |
//! |-------|-----------|-----------------|------------|
//! | [`SessionState::Anonymous`] | shown | hidden | hidden |
//! | [`SessionState::Authenticated`] | hidden | shown | shown |

use crate::codec::decode;

/// Result of gating a decoded token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub authenticated: bool,
}

/// Visibility of each UI region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionVisibility {
    /// Credential entry form with the sign-up and login buttons.
    pub login_box: bool,
    pub sign_out: bool,
    /// Authenticated content.
    pub task_board: bool,
}

impl UiState {
    pub fn regions(&self) -> RegionVisibility {
        RegionVisibility {
            login_box: !self.authenticated,
            sign_out: self.authenticated,
            task_board: self.authenticated,
        }
    }

    pub fn session(&self) -> SessionState {
        if self.authenticated {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// Gate a decoded token.
pub fn compute_ui_state(token: &str) -> UiState {
    UiState {
        authenticated: !token.is_empty(),
    }
}

/// The two states a page session can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
}

/// Completed user actions that move the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedUp,
    LoggedIn,
    SignedOut,
}

impl SessionState {
    /// Initial state on page load.
    pub fn from_token(token: &str) -> Self {
        compute_ui_state(token).session()
    }

    pub fn transition(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::SignedUp | SessionEvent::LoggedIn => SessionState::Authenticated,
            SessionEvent::SignedOut => SessionState::Anonymous,
        }
    }

    pub fn ui_state(self) -> UiState {
        UiState {
            authenticated: self == SessionState::Authenticated,
        }
    }
}

/// Receiver of region visibility, e.g. a DOM adapter or a UI signal.
pub trait UiSink {
    fn apply(&mut self, regions: RegionVisibility);
}

/// Decode `raw_cookie`, gate it and push the resulting regions into `sink`.
pub fn update_ui(raw_cookie: &str, sink: &mut impl UiSink) -> UiState {
    let state = compute_ui_state(&decode(raw_cookie));
    tracing::debug!(authenticated = state.authenticated, "updating session ui");
    sink.apply(state.regions());
    state
}

//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{
    use_auth, use_auth_flow, AuthProvider, AuthState, ClientFlow, LoginBox, SignOutButton,
    TaskBoardContainer,
};

pub mod platform;

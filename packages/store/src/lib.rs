pub mod codec;
pub mod config;
pub mod jar;
pub mod session;

mod memory;
pub use memory::MemoryJar;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod document;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use document::DocumentJar;

pub use codec::{decode, encode, SameSite, SetCookie, TOKEN_COOKIE};
pub use config::{AppConfig, BackendConfig, FirebaseConfig};
pub use jar::CookieJar;
pub use session::{
    compute_ui_state, update_ui, RegionVisibility, SessionEvent, SessionState, UiSink, UiState,
};

//! # Cookie token codec
//!
//! Reads and writes the session token carried in the `token` cookie.
//!
//! - [`decode`] scans a raw cookie string (`document.cookie` format) for the
//!   first `token=` entry and returns its value, or `""` when there is none.
//!   An empty value is indistinguishable from a missing entry: sign-out writes
//!   `token=` and relies on that.
//! - [`encode`] builds the [`SetCookie`] instruction that stores a token. It is
//!   a session cookie scoped to `/` with `SameSite=Strict` and no expiry.
//!
//! Neither function can fail. Malformed segments are skipped.

use std::fmt;

/// Name of the cookie holding the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Path scope for the token cookie.
pub const COOKIE_PATH: &str = "/";

/// `SameSite` policy of a cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameSite {
    Strict,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => f.write_str("Strict"),
        }
    }
}

/// A cookie-set instruction, rendered as the string assigned to
/// `document.cookie`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub same_site: SameSite,
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={};path={};SameSite={}",
            self.name, self.value, self.path, self.same_site
        )
    }
}

/// Extract the session token from a raw cookie string.
///
/// Returns the value of the first entry whose trimmed name is exactly
/// `token`, or `""` if no such entry exists. Everything after the first `=`
/// is the value, so `token=a=b` yields `a=b` rather than the `a` that a plain
/// split on every `=` would give.
pub fn decode(raw: &str) -> String {
    for segment in raw.split(';') {
        let Some((name, value)) = segment.split_once('=') else {
            continue;
        };
        if name.trim() == TOKEN_COOKIE {
            return value.to_string();
        }
    }
    String::new()
}

/// Build the instruction that stores `token` in the token cookie.
///
/// `encode("")` is the sign-out instruction.
pub fn encode(token: &str) -> SetCookie {
    SetCookie {
        name: TOKEN_COOKIE.to_string(),
        value: token.to_string(),
        path: COOKIE_PATH.to_string(),
        same_site: SameSite::Strict,
    }
}

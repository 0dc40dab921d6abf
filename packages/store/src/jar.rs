use crate::codec::SetCookie;

/// Access to the page's cookie store.
///
/// `read` returns the raw cookie string in `document.cookie` format
/// (`name=value` pairs joined by `"; "`). `write` applies one cookie-set
/// instruction, overwriting any existing entry with the same name.
/// Implementations live in sibling modules ([`crate::memory`] and, on the
/// web, [`crate::document`]).
pub trait CookieJar {
    fn read(&self) -> String;

    fn write(&self, cookie: &SetCookie);
}

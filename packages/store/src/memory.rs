use std::sync::{Arc, Mutex};

use crate::codec::SetCookie;
use crate::jar::CookieJar;

/// In-memory CookieJar for testing and non-browser targets.
///
/// Behaves like `document.cookie` for a single path: writing an existing
/// name replaces its value in place, new names are appended. Clones share
/// the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryJar {
    entries: Arc<Mutex<Vec<(String, String)>>>,
    history: Arc<Mutex<Vec<SetCookie>>>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-populated from a raw cookie string.
    pub fn with_cookie(raw: &str) -> Self {
        let entries = raw
            .split(';')
            .filter_map(|segment| segment.split_once('='))
            .map(|(name, value)| (name.trim().to_string(), value.to_string()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(entries)),
            history: Arc::default(),
        }
    }

    /// Every instruction written so far, oldest first.
    pub fn history(&self) -> Vec<SetCookie> {
        self.history.lock().unwrap().clone()
    }

    /// The most recent instruction, rendered as assigned to `document.cookie`.
    pub fn last_written(&self) -> Option<String> {
        self.history.lock().unwrap().last().map(ToString::to_string)
    }
}

impl CookieJar for MemoryJar {
    fn read(&self) -> String {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, cookie: &SetCookie) {
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|(name, _)| *name == cookie.name) {
            Some(entry) => entry.1 = cookie.value.clone(),
            None => entries.push((cookie.name.clone(), cookie.value.clone())),
        }
        self.history.lock().unwrap().push(cookie.clone());
    }
}

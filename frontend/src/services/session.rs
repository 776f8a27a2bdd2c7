//! Browser-backed implementations of the session credential seams.

use gloo::storage::{SessionStorage, Storage};
use shared::session::SESSION_STORAGE_KEY;
use shared::{CredentialStore, Navigator};

use crate::services::logging::Logger;

/// Credential kept in `sessionStorage`, so it dies with the tab
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserSession;

impl CredentialStore for BrowserSession {
    fn get(&self) -> Option<String> {
        SessionStorage::get::<String>(SESSION_STORAGE_KEY).ok()
    }

    fn set(&self, credential: &str) {
        if let Err(e) = SessionStorage::set(SESSION_STORAGE_KEY, credential) {
            Logger::error_with_component("session", &format!("Failed to store session: {}", e));
        }
    }

    fn clear(&self) {
        SessionStorage::delete(SESSION_STORAGE_KEY);
    }
}

impl BrowserSession {
    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }
}

/// Navigates the window back to the application root.
///
/// The app is a single page served at `/`; when already there the page is
/// left as is so open dialogs keep their state. A 401 seen at `/`, for
/// example on the public `GET /shifts/`, therefore only clears the stored
/// credential; callers resync their logged-in flag from storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn to_root(&self) {
        let location = gloo::utils::window().location();
        let at_root = location.pathname().map(|path| path == "/").unwrap_or(false);
        if at_root {
            return;
        }
        if location.set_href("/").is_err() {
            Logger::error_with_component("session", "Failed to navigate to root");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_session_round_trip() {
        let session = BrowserSession;
        session.clear();
        assert!(!session.is_logged_in());

        session.set("token-1");
        assert_eq!(session.get(), Some("token-1".to_string()));

        session.clear();
        assert_eq!(session.get(), None);
    }
}

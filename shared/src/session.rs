//! Session credential policy shared by the HTTP client.
//!
//! The credential is attached to every outgoing request and dropped on the
//! first 401, whichever endpoint produced it.

use std::cell::RefCell;

/// Key under which the credential lives in browser session storage
pub const SESSION_STORAGE_KEY: &str = "sessionId";
/// Request header carrying the credential
pub const SESSION_REQUEST_HEADER: &str = "session-id";
/// Response header on which the login endpoint issues the credential
pub const SESSION_RESPONSE_HEADER: &str = "x-session-id";

pub const STATUS_UNAUTHORIZED: u16 = 401;

pub trait CredentialStore {
    fn get(&self) -> Option<String>;
    fn set(&self, credential: &str);
    fn clear(&self);
}

/// Sends the browser back to the application root
pub trait Navigator {
    fn to_root(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDisposition {
    PassThrough,
    Unauthorized,
}

/// Header to attach before sending, if a credential is stored
pub fn credential_header(store: &impl CredentialStore) -> Option<(&'static str, String)> {
    store
        .get()
        .filter(|credential| !credential.is_empty())
        .map(|credential| (SESSION_REQUEST_HEADER, credential))
}

/// Inspect a response status; a 401 clears the credential and navigates.
pub fn intercept_status(
    status: u16,
    store: &impl CredentialStore,
    navigator: &impl Navigator,
) -> ResponseDisposition {
    if status == STATUS_UNAUTHORIZED {
        store.clear();
        navigator.to_root();
        ResponseDisposition::Unauthorized
    } else {
        ResponseDisposition::PassThrough
    }
}

/// In-memory store, used where no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credential: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.credential.borrow().clone()
    }

    fn set(&self, credential: &str) {
        *self.credential.borrow_mut() = Some(credential.to_string());
    }

    fn clear(&self) {
        *self.credential.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Cell<u32>,
    }

    impl Navigator for RecordingNavigator {
        fn to_root(&self) {
            self.visits.set(self.visits.get() + 1);
        }
    }

    #[test]
    fn test_header_attached_only_when_stored() {
        let store = MemoryCredentialStore::new();
        assert_eq!(credential_header(&store), None);

        store.set("token-1");
        assert_eq!(
            credential_header(&store),
            Some((SESSION_REQUEST_HEADER, "token-1".to_string()))
        );
    }

    #[test]
    fn test_unauthorized_clears_and_navigates() {
        let store = MemoryCredentialStore::new();
        let navigator = RecordingNavigator::default();
        store.set("token-1");

        let disposition = intercept_status(401, &store, &navigator);

        assert_eq!(disposition, ResponseDisposition::Unauthorized);
        assert_eq!(store.get(), None);
        assert_eq!(navigator.visits.get(), 1);
    }

    #[test]
    fn test_other_statuses_pass_through() {
        let store = MemoryCredentialStore::new();
        let navigator = RecordingNavigator::default();
        store.set("token-1");

        for status in [200, 204, 400, 403, 404, 500] {
            assert_eq!(
                intercept_status(status, &store, &navigator),
                ResponseDisposition::PassThrough
            );
        }
        assert_eq!(store.get(), Some("token-1".to_string()));
        assert_eq!(navigator.visits.get(), 0);
    }

    #[test]
    fn test_unauthorized_without_credential_still_navigates() {
        let store = MemoryCredentialStore::new();
        let navigator = RecordingNavigator::default();

        intercept_status(401, &store, &navigator);
        assert_eq!(navigator.visits.get(), 1);
    }
}

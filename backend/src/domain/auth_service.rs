use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid password")]
    InvalidPassword,
}

/// Shared-password admin login with in-memory sessions.
///
/// Sessions do not expire and are lost on restart.
#[derive(Clone)]
pub struct AuthService {
    admin_password: String,
    sessions: Arc<RwLock<HashSet<String>>>,
}

impl AuthService {
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            admin_password: admin_password.into(),
            sessions: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Check the password and open a session, returning its id
    pub fn login(&self, password: &str) -> Result<String, AuthError> {
        if password != self.admin_password {
            warn!("Rejected admin login attempt");
            return Err(AuthError::InvalidPassword);
        }

        let session_id = Uuid::new_v4().simple().to_string();
        match self.sessions.write() {
            Ok(mut sessions) => {
                sessions.insert(session_id.clone());
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(session_id.clone());
            }
        }

        info!("Admin session opened ({} active)", self.active_sessions());
        Ok(session_id)
    }

    /// Drop a session; unknown ids are ignored
    pub fn logout(&self, session_id: &str) -> bool {
        let removed = match self.sessions.write() {
            Ok(mut sessions) => sessions.remove(session_id),
            Err(poisoned) => poisoned.into_inner().remove(session_id),
        };
        if removed {
            info!("Admin session closed ({} active)", self.active_sessions());
        }
        removed
    }

    pub fn is_valid(&self, session_id: &str) -> bool {
        match self.sessions.read() {
            Ok(sessions) => sessions.contains(session_id),
            Err(poisoned) => poisoned.into_inner().contains(session_id),
        }
    }

    pub fn active_sessions(&self) -> usize {
        match self.sessions.read() {
            Ok(sessions) => sessions.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_correct_password() {
        let service = AuthService::new("secret");
        let session_id = service.login("secret").unwrap();

        assert!(!session_id.is_empty());
        assert!(service.is_valid(&session_id));
        assert_eq!(service.active_sessions(), 1);
    }

    #[test]
    fn test_login_with_wrong_password() {
        let service = AuthService::new("secret");
        assert_eq!(service.login("Secret"), Err(AuthError::InvalidPassword));
        assert_eq!(service.login(""), Err(AuthError::InvalidPassword));
        assert_eq!(service.active_sessions(), 0);
    }

    #[test]
    fn test_sessions_are_distinct_and_revocable() {
        let service = AuthService::new("secret");
        let first = service.login("secret").unwrap();
        let second = service.login("secret").unwrap();
        assert_ne!(first, second);

        assert!(service.logout(&first));
        assert!(!service.is_valid(&first));
        assert!(service.is_valid(&second));
        assert!(!service.logout(&first));
    }
}

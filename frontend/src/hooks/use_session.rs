use shared::CredentialStore;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::session::BrowserSession;

pub struct UseSessionResult {
    pub logged_in: bool,
    pub actions: UseSessionActions,
}

#[derive(Clone)]
pub struct UseSessionActions {
    /// Called once the login dialog has stored a credential
    pub login_succeeded: Callback<()>,
    /// Drops the credential locally; the backend is not contacted
    pub logout: Callback<()>,
    /// Re-reads the flag from storage, e.g. after a 401 cleared it
    pub sync: Callback<()>,
}

/// Logged-in flag backed by the stored session credential
#[hook]
pub fn use_session() -> UseSessionResult {
    let logged_in = use_state(|| BrowserSession.is_logged_in());

    let login_succeeded = {
        let logged_in = logged_in.clone();
        use_callback((), move |_: (), _| {
            Logger::info_with_component("session", "Logged in");
            logged_in.set(true);
        })
    };

    let logout = {
        let logged_in = logged_in.clone();
        use_callback((), move |_: (), _| {
            BrowserSession.clear();
            Logger::info_with_component("session", "Logged out");
            logged_in.set(false);
        })
    };

    let sync = {
        let logged_in = logged_in.clone();
        use_callback((), move |_: (), _| {
            logged_in.set(BrowserSession.is_logged_in());
        })
    };

    UseSessionResult {
        logged_in: *logged_in,
        actions: UseSessionActions {
            login_succeeded,
            logout,
            sync,
        },
    }
}

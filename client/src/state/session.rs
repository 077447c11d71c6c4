//! Auth-session state for the current browser operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided at the app root. Route guards,
//! the login page and every authenticated request read it; nothing else
//! inspects the cookies directly.
//!
//! DESIGN
//! ======
//! Cookie access goes through the `CookieStore` trait so the lifecycle
//! (`init` / `establish` / `logout`) can be tested with an in-memory store.
//! The token and the logged-in marker are always written and cleared as a pair.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";
/// Cookie holding the JSON text of the backend's logged-in marker.
pub const LOGGED_IN_COOKIE: &str = "is_logged_in";

/// Persistent key/value storage for the session cookies.
pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
    fn remove(&self, name: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not yet read from cookies (server render, before hydration).
    #[default]
    Unknown,
    Anonymous,
    Authenticated,
}

/// Current session as derived from the cookies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub token: Option<String>,
}

impl SessionState {
    /// Load the session from `store`. Both cookies must be present and
    /// non-empty; a half-written pair is treated as anonymous.
    pub fn init(&mut self, store: &dyn CookieStore) {
        let token = non_empty(store.get(TOKEN_COOKIE));
        let marker = non_empty(store.get(LOGGED_IN_COOKIE));
        match (token, marker) {
            (Some(token), Some(_)) => {
                self.token = Some(token);
                self.status = SessionStatus::Authenticated;
            }
            _ => {
                self.token = None;
                self.status = SessionStatus::Anonymous;
            }
        }
    }

    /// Persist a fresh login.
    pub fn establish(&mut self, store: &dyn CookieStore, token: &str, marker: &str) {
        store.set(TOKEN_COOKIE, token);
        store.set(LOGGED_IN_COOKIE, marker);
        self.init(store);
    }

    /// Clear both cookies and drop to anonymous.
    pub fn logout(&mut self, store: &dyn CookieStore) {
        store.remove(TOKEN_COOKIE);
        store.remove(LOGGED_IN_COOKIE);
        self.token = None;
        self.status = SessionStatus::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn is_known(&self) -> bool {
        self.status != SessionStatus::Unknown
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

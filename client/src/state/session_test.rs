use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryCookies {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryCookies {
    fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (name, value) in pairs {
            store.set(name, value);
        }
        store
    }
}

impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.values.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn remove(&self, name: &str) {
        self.values.borrow_mut().remove(name);
    }
}

#[test]
fn default_session_is_unknown() {
    let session = SessionState::default();
    assert_eq!(session.status, SessionStatus::Unknown);
    assert!(!session.is_known());
    assert!(!session.is_authenticated());
}

#[test]
fn init_with_both_cookies_is_authenticated() {
    let store = MemoryCookies::with(&[(TOKEN_COOKIE, "abc"), (LOGGED_IN_COOKIE, "true")]);
    let mut session = SessionState::default();
    session.init(&store);
    assert!(session.is_authenticated());
    assert_eq!(session.bearer_token(), Some("abc"));
}

#[test]
fn init_with_token_only_is_anonymous() {
    let store = MemoryCookies::with(&[(TOKEN_COOKIE, "abc")]);
    let mut session = SessionState::default();
    session.init(&store);
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert_eq!(session.bearer_token(), None);
}

#[test]
fn init_with_blank_marker_is_anonymous() {
    let store = MemoryCookies::with(&[(TOKEN_COOKIE, "abc"), (LOGGED_IN_COOKIE, " ")]);
    let mut session = SessionState::default();
    session.init(&store);
    assert_eq!(session.status, SessionStatus::Anonymous);
}

#[test]
fn establish_writes_both_cookies() {
    let store = MemoryCookies::default();
    let mut session = SessionState::default();
    session.establish(&store, "tok", "true");
    assert_eq!(store.get(TOKEN_COOKIE).as_deref(), Some("tok"));
    assert_eq!(store.get(LOGGED_IN_COOKIE).as_deref(), Some("true"));
    assert!(session.is_authenticated());
}

#[test]
fn logout_clears_both_cookies_together() {
    let store = MemoryCookies::with(&[(TOKEN_COOKIE, "abc"), (LOGGED_IN_COOKIE, "true")]);
    let mut session = SessionState::default();
    session.init(&store);
    session.logout(&store);
    assert_eq!(store.get(TOKEN_COOKIE), None);
    assert_eq!(store.get(LOGGED_IN_COOKIE), None);
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert_eq!(session.token, None);
}

//! Shared session-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same redirect rules: protected screens bounce
//! anonymous users to `/login`, the login screen bounces authenticated users
//! to `/`. The guard only inspects local cookies; the backend still decides
//! on each request, and a 401 from any call ends the session here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiError;
use crate::state::session::{SessionState, SessionStatus};
use crate::util::cookies::BrowserCookies;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

/// Which sessions a route admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Requires an authenticated session.
    Protected,
    /// Only for anonymous users (the login screen).
    PublicOnly,
}

/// Where to send the user, or `None` to stay. No decision while `Unknown`.
pub fn guard_decision(access: RouteAccess, status: SessionStatus) -> Option<&'static str> {
    match (access, status) {
        (_, SessionStatus::Unknown)
        | (RouteAccess::Protected, SessionStatus::Authenticated)
        | (RouteAccess::PublicOnly, SessionStatus::Anonymous) => None,
        (RouteAccess::Protected, SessionStatus::Anonymous) => Some(LOGIN_ROUTE),
        (RouteAccess::PublicOnly, SessionStatus::Authenticated) => Some(HOME_ROUTE),
    }
}

/// Destination for an unknown path.
pub fn fallback_route(status: SessionStatus) -> Option<&'static str> {
    match status {
        SessionStatus::Unknown => None,
        SessionStatus::Authenticated => Some(HOME_ROUTE),
        SessionStatus::Anonymous => Some(LOGIN_ROUTE),
    }
}

/// Re-run `guard_decision` whenever the session changes and navigate when it
/// asks for a redirect.
pub fn install_session_guard<F>(session: RwSignal<SessionState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let status = session.get().status;
        if let Some(target) = guard_decision(access, status) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Load the session from the browser cookies.
pub fn init_session(session: RwSignal<SessionState>) {
    session.update(|s| s.init(&BrowserCookies));
}

/// Persist a fresh login in the browser cookies.
pub fn establish_session(session: RwSignal<SessionState>, token: &str, marker: &str) {
    session.update(|s| s.establish(&BrowserCookies, token, marker));
}

/// Clear both cookies. Guards watching `session` then redirect to `/login`.
pub fn end_session(session: RwSignal<SessionState>) {
    session.update(|s| s.logout(&BrowserCookies));
}

/// End the session if `err` means the token is no longer accepted.
///
/// Returns `true` when the session was ended.
pub fn end_session_if_unauthorized(session: RwSignal<SessionState>, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    leptos::logging::warn!("backend rejected session token: {err}");
    end_session(session);
    true
}

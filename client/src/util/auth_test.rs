use super::*;
use leptos::reactive::owner::Owner;

// Signals live in the arena of the current owner.
fn reactive_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

#[test]
fn protected_route_redirects_anonymous_to_login() {
    assert_eq!(guard_decision(RouteAccess::Protected, SessionStatus::Anonymous), Some("/login"));
}

#[test]
fn protected_route_admits_authenticated() {
    assert_eq!(guard_decision(RouteAccess::Protected, SessionStatus::Authenticated), None);
}

#[test]
fn login_route_redirects_authenticated_home() {
    assert_eq!(guard_decision(RouteAccess::PublicOnly, SessionStatus::Authenticated), Some("/"));
    assert_eq!(guard_decision(RouteAccess::PublicOnly, SessionStatus::Anonymous), None);
}

#[test]
fn unknown_session_makes_no_decision() {
    assert_eq!(guard_decision(RouteAccess::Protected, SessionStatus::Unknown), None);
    assert_eq!(guard_decision(RouteAccess::PublicOnly, SessionStatus::Unknown), None);
    assert_eq!(fallback_route(SessionStatus::Unknown), None);
}

#[test]
fn unknown_paths_follow_session() {
    assert_eq!(fallback_route(SessionStatus::Authenticated), Some("/"));
    assert_eq!(fallback_route(SessionStatus::Anonymous), Some("/login"));
}

#[test]
fn unauthorized_error_ends_session_and_triggers_login_redirect() {
    let _owner = reactive_owner();
    let session = RwSignal::new(SessionState {
        status: SessionStatus::Authenticated,
        token: Some("abc".to_owned()),
    });
    assert!(end_session_if_unauthorized(session, &ApiError::Unauthorized));
    let state = session.get_untracked();
    assert_eq!(state.status, SessionStatus::Anonymous);
    assert_eq!(state.token, None);
    assert_eq!(guard_decision(RouteAccess::Protected, state.status), Some("/login"));
}

#[test]
fn other_errors_keep_session() {
    let _owner = reactive_owner();
    let session = RwSignal::new(SessionState {
        status: SessionStatus::Authenticated,
        token: Some("abc".to_owned()),
    });
    assert!(!end_session_if_unauthorized(session, &ApiError::Network("offline".to_owned())));
    assert!(session.get_untracked().is_authenticated());
}

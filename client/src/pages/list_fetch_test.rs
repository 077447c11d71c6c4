use super::*;
use crate::state::listing::{FetchTrigger, Settled};
use crate::state::session::SessionStatus;
use leptos::reactive::owner::Owner;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Signals live in the arena of the current owner.
fn reactive_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

fn signed_in() -> RwSignal<SessionState> {
    RwSignal::new(SessionState { status: SessionStatus::Authenticated, token: Some("abc".to_owned()) })
}

fn page(current: u32, rows: &[u32]) -> Page<u32> {
    Page { current_page: current, total_pages: 3, total_data: 12, rows: rows.to_vec() }
}

fn issue(list: RwSignal<ListState<u32>>, trigger: FetchTrigger) -> FetchTicket {
    list.try_update(|s| s.begin_fetch(trigger)).flatten().unwrap()
}

// =============================================================
// Success and staleness
// =============================================================

#[test]
fn success_updates_rows() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let ticket = issue(list, FetchTrigger::Mount);

    assert_eq!(settle_list_fetch(list, session, ticket, Ok(page(1, &[1, 2, 3]))), Settled::Applied);
    assert_eq!(list.get_untracked().rows, vec![1, 2, 3]);
}

#[test]
fn stale_response_is_discarded() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let first = issue(list, FetchTrigger::Mount);
    let second = issue(list, FetchTrigger::Retry);

    assert_eq!(settle_list_fetch(list, session, second, Ok(page(1, &[9]))), Settled::Applied);
    assert_eq!(settle_list_fetch(list, session, first, Ok(page(1, &[1]))), Settled::Stale);
    assert_eq!(list.get_untracked().rows, vec![9]);
}

#[test]
fn stale_response_does_not_notify_subscribers() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let first = issue(list, FetchTrigger::Mount);
    issue(list, FetchTrigger::Retry);

    let runs = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&runs);
    let watcher = Memo::new(move |_| {
        list.track();
        counted.fetch_add(1, Ordering::SeqCst);
    });
    watcher.get_untracked();
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    settle_list_fetch(list, session, first, Ok(page(1, &[1])));
    watcher.get_untracked();
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    let current = issue(list, FetchTrigger::Retry);
    settle_list_fetch(list, session, current, Ok(page(1, &[2])));
    watcher.get_untracked();
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn response_past_the_end_refetches_clamped_page() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let ticket = issue(list, FetchTrigger::Mutation);

    let past_end = Page { current_page: 3, total_pages: 2, total_data: 10, rows: Vec::new() };
    let Settled::Refetch(next) = settle_list_fetch(list, session, ticket, Ok(past_end)) else {
        panic!("expected a follow-up fetch");
    };
    assert_eq!(next.page, 2);
    assert_eq!(next.seq, list.get_untracked().latest_seq());
}

// =============================================================
// Failures
// =============================================================

#[test]
fn failure_shows_backend_message_and_sticks() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let ticket = issue(list, FetchTrigger::Mount);

    settle_list_fetch(list, session, ticket, Err(ApiError::rejected(500, r#"{"message":"DB down"}"#)));

    let state = list.get_untracked();
    assert_eq!(state.error.as_deref(), Some("DB down"));
    assert!(state.stuck);
    assert!(session.get_untracked().is_authenticated());
}

#[test]
fn network_failure_uses_default_message() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let ticket = issue(list, FetchTrigger::Mount);

    settle_list_fetch(list, session, ticket, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(list.get_untracked().error.as_deref(), Some(crate::net::api::FETCH_FAILED_MESSAGE));
}

#[test]
fn unauthorized_failure_ends_session() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let ticket = issue(list, FetchTrigger::Mount);

    settle_list_fetch(list, session, ticket, Err(ApiError::Unauthorized));
    assert_eq!(session.get_untracked().status, SessionStatus::Anonymous);
}

#[test]
fn stale_unauthorized_failure_still_ends_session() {
    let _owner = reactive_owner();
    let list = RwSignal::new(ListState::<u32>::new(5));
    let session = signed_in();
    let first = issue(list, FetchTrigger::Mount);
    issue(list, FetchTrigger::Retry);

    assert_eq!(settle_list_fetch(list, session, first, Err(ApiError::Unauthorized)), Settled::Stale);
    assert_eq!(session.get_untracked().status, SessionStatus::Anonymous);
    assert_eq!(list.get_untracked().error, None);
}

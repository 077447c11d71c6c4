//! Fetch orchestration shared by the paginated list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages decide *when* to fetch by asking their `ListState` for a ticket;
//! this module runs the request and folds the outcome back into the state.
//! A response for a page past the end is followed by one fetch for the
//! clamped page, driven from the same task.
//!
//! ERROR HANDLING
//! ==============
//! A 401 ends the session (the route guard then redirects), even when the
//! response is stale. Any other error becomes the single inline message on
//! the list, unless a newer request superseded it.

#[cfg(test)]
#[path = "list_fetch_test.rs"]
mod list_fetch_test;

use std::future::Future;

use leptos::logging::log;
use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::listing::{FetchTicket, ListState, Page};
use crate::state::session::SessionState;

/// Run `fetch` for `ticket` in the background and settle the result.
///
/// A `None` ticket means the state declined to fetch (suppressed after a
/// failure, or a page change that clamped to the current page).
pub(crate) fn spawn_list_fetch<T, F, Fut>(
    list: RwSignal<ListState<T>>,
    session: RwSignal<SessionState>,
    ticket: Option<FetchTicket>,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: Fn(FetchTicket) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let Some(ticket) = ticket else {
        log!("list fetch skipped");
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut ticket = ticket;
        loop {
            let result = fetch(ticket).await;
            match settle_list_fetch(list, session, ticket, result) {
                crate::state::listing::Settled::Refetch(next) => {
                    log!("page {} is past the end, fetching page {}", ticket.page, next.page);
                    ticket = next;
                }
                _ => break,
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, session, ticket, fetch);
    }
}

/// Fold one response into `list`.
///
/// The sequence check runs before any write, so a stale response leaves the
/// list signal untouched and notifies nobody.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn settle_list_fetch<T>(
    list: RwSignal<ListState<T>>,
    session: RwSignal<SessionState>,
    ticket: FetchTicket,
    result: Result<Page<T>, ApiError>,
) -> crate::state::listing::Settled
where
    T: Send + Sync + 'static,
{
    use crate::state::listing::Settled;
    use crate::util::auth::end_session_if_unauthorized;

    if list.try_with_untracked(ListState::latest_seq) != Some(ticket.seq) {
        if let Err(err) = &result {
            end_session_if_unauthorized(session, err);
        }
        log!("discarded stale list response seq={}", ticket.seq);
        return Settled::Stale;
    }

    match result {
        Ok(page) => list.try_update(|s| s.apply_success(ticket, page)).unwrap_or(Settled::Stale),
        Err(err) => {
            let message = err.message_or(crate::net::api::FETCH_FAILED_MESSAGE);
            list.update(|s| {
                s.apply_failure(ticket, message);
            });
            if !end_session_if_unauthorized(session, &err) {
                leptos::logging::warn!("list fetch failed (page {}): {err}", ticket.page);
            }
            Settled::Applied
        }
    }
}

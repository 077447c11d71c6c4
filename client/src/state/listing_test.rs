use super::*;

fn page_of(current: u32, total_pages: u32, total_data: u64, rows: &[u32]) -> Page<u32> {
    Page { current_page: current, total_pages, total_data, rows: rows.to_vec() }
}

fn loaded(current: u32, total_pages: u32) -> ListState<u32> {
    let mut state = ListState::new(5);
    let ticket = state.begin_fetch(FetchTrigger::Mount).unwrap();
    let settled = state.apply_success(ticket, page_of(current, total_pages, u64::from(total_pages) * 5, &[1, 2]));
    assert_eq!(settled, Settled::Applied);
    state
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn new_state_starts_on_page_one_and_idle() {
    let state = ListState::<u32>::new(10);
    assert_eq!(state.pagination, Pagination { current_page: 1, total_pages: 0, total_data: 0, page_size: 10 });
    assert!(!state.loading);
    assert!(state.rows.is_empty());
}

#[test]
fn begin_fetch_issues_current_page_and_size() {
    let mut state = ListState::<u32>::new(5);
    let ticket = state.begin_fetch(FetchTrigger::Mount).unwrap();
    assert_eq!(ticket, FetchTicket { seq: 1, page: 1, page_size: 5 });
    assert!(state.loading);
}

#[test]
fn success_replaces_rows_and_counters() {
    let mut state = ListState::new(5);
    let ticket = state.begin_fetch(FetchTrigger::Mount).unwrap();
    assert_eq!(state.apply_success(ticket, page_of(1, 3, 12, &[7, 8, 9])), Settled::Applied);
    assert_eq!(state.rows, vec![7, 8, 9]);
    assert_eq!(state.pagination.total_pages, 3);
    assert_eq!(state.pagination.total_data, 12);
    assert!(!state.loading);
}

#[test]
fn failure_sets_error_clears_rows_and_sticks() {
    let mut state = loaded(1, 3);
    let ticket = state.begin_fetch(FetchTrigger::Retry).unwrap();
    assert!(state.apply_failure(ticket, "boom".to_owned()));
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(state.rows.is_empty());
    assert!(state.stuck);
    assert!(!state.loading);
}

#[test]
fn stuck_state_suppresses_automatic_fetches_only() {
    let mut state = ListState::<u32>::new(5);
    let ticket = state.begin_fetch(FetchTrigger::Mount).unwrap();
    state.apply_failure(ticket, "down".to_owned());

    assert_eq!(state.begin_fetch(FetchTrigger::Mount), None);

    let retry = state.begin_fetch(FetchTrigger::Retry);
    assert!(retry.is_some());
    assert!(!state.stuck);
    assert_eq!(state.error, None);
}

#[test]
fn filter_change_clears_stuck_and_restarts_at_page_one() {
    let mut state = loaded(2, 3);
    let ticket = state.begin_fetch(FetchTrigger::Retry).unwrap();
    state.apply_failure(ticket, "down".to_owned());

    let ticket = state.restart(FetchTrigger::FilterChange).unwrap();
    assert_eq!(ticket.page, 1);
    assert!(!state.stuck);
}

#[test]
fn stale_success_is_discarded() {
    let mut state = loaded(1, 3);
    let slow = state.go_to_page(2).unwrap();
    let fast = state.go_to_page(3).unwrap();

    assert_eq!(state.apply_success(fast, page_of(3, 3, 15, &[30])), Settled::Applied);
    assert_eq!(state.apply_success(slow, page_of(2, 3, 15, &[20])), Settled::Stale);
    assert_eq!(state.rows, vec![30]);
    assert_eq!(state.pagination.current_page, 3);
}

#[test]
fn stale_failure_is_discarded() {
    let mut state = loaded(1, 3);
    let slow = state.go_to_page(2).unwrap();
    let fast = state.go_to_page(3).unwrap();
    assert_eq!(state.apply_success(fast, page_of(3, 3, 15, &[30])), Settled::Applied);
    assert!(!state.apply_failure(slow, "late".to_owned()));
    assert_eq!(state.error, None);
    assert!(!state.stuck);
}

// =============================================================
// Page navigation
// =============================================================

#[test]
fn twelve_rows_at_five_per_page_never_issue_page_four() {
    let mut state = ListState::<u32>::new(5);
    let ticket = state.begin_fetch(FetchTrigger::Mount).unwrap();
    state.apply_success(ticket, page_of(1, 3, 12, &[1, 2, 3, 4, 5]));

    let ticket = state.go_to_page(4).unwrap();
    assert_eq!(ticket.page, 3);
    assert_eq!(state.go_to_page(4), None);
    assert!(!state.pagination.can_go_next());
}

#[test]
fn go_to_page_clamps_below_one() {
    let mut state = loaded(3, 3);
    let ticket = state.go_to_page(0).unwrap();
    assert_eq!(ticket.page, 1);
    assert_eq!(state.pagination.current_page, 1);
}

#[test]
fn go_to_page_on_empty_list_issues_nothing() {
    let mut state = loaded(1, 0);
    assert_eq!(state.go_to_page(2), None);
    assert!(!state.pagination.can_go_next());
}

#[test]
fn previous_disabled_on_first_page_and_next_on_last() {
    let first = loaded(1, 3);
    assert!(!first.pagination.can_go_previous());
    assert!(first.pagination.can_go_next());

    let last = loaded(3, 3);
    assert!(last.pagination.can_go_previous());
    assert!(!last.pagination.can_go_next());
}

#[test]
fn set_page_size_restarts_from_first_page() {
    let mut state = loaded(3, 3);
    let ticket = state.set_page_size(25).unwrap();
    assert_eq!(ticket.page, 1);
    assert_eq!(ticket.page_size, 25);
}

#[test]
fn response_past_last_page_drops_rows_and_refetches_clamped_page() {
    // Last row of page 3 deleted: the refresh comes back as page 3 of 2.
    let mut state = loaded(3, 3);
    let ticket = state.begin_fetch(FetchTrigger::Mutation).unwrap();

    let Settled::Refetch(next) = state.apply_success(ticket, page_of(3, 2, 10, &[])) else {
        panic!("expected a follow-up fetch for the clamped page");
    };
    assert_eq!(next.page, 2);
    assert_eq!(next.seq, state.latest_seq());
    assert_eq!(state.pagination.current_page, 2);
    assert!(state.rows.is_empty());
    assert!(state.loading);

    assert_eq!(state.apply_success(next, page_of(2, 2, 10, &[6, 7])), Settled::Applied);
    assert_eq!(state.rows, vec![6, 7]);
}

#[test]
fn empty_result_on_page_one_needs_no_refetch() {
    let mut state = ListState::<u32>::new(5);
    let ticket = state.begin_fetch(FetchTrigger::Mount).unwrap();
    assert_eq!(state.apply_success(ticket, page_of(1, 0, 0, &[])), Settled::Applied);
    assert_eq!(state.pagination.current_page, 1);
}

// =============================================================
// Page window
// =============================================================

#[test]
fn window_is_centred_in_the_middle() {
    assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_keeps_width_near_the_start() {
    assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_keeps_width_near_the_end() {
    assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
}

#[test]
fn pagination_window_follows_current_page() {
    let pagination = Pagination { current_page: 4, total_pages: 10, total_data: 50, page_size: 5 };
    assert_eq!(pagination.page_window(), vec![2, 3, 4, 5, 6]);
}

#[test]
fn window_shrinks_when_fewer_pages_exist() {
    assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    assert!(page_window(1, 0, 5).is_empty());
}

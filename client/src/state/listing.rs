//! Paginated list state shared by the gate and traffic screens.
//!
//! DESIGN
//! ======
//! The state is a plain struct held in an `RwSignal` owned by the page. All
//! transitions are methods so pagination rules can be tested without a DOM.
//! Every fetch is issued through a `FetchTicket` carrying a sequence number;
//! a response whose ticket is not the latest one issued is dropped, so a slow
//! page-2 response can never overwrite a newer page-3 result.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch sets `stuck`. While stuck, only automatic (mount-time)
//! fetches are suppressed; every explicit user action clears the flag.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Number of numbered page buttons rendered by the pager.
pub const PAGE_WINDOW: u32 = 5;

/// One page of rows plus the counters the backend reported for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_data: u64,
    pub rows: Vec<T>,
}

/// Pagination counters. `current_page` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_data: u64,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self { current_page: 1, total_pages: 0, total_data: 0, page_size: page_size.max(1) }
    }

    /// Clamp a requested page into `[1, total_pages]` (or to 1 when empty).
    pub fn clamp(&self, page: u32) -> u32 {
        if self.total_pages == 0 {
            return 1;
        }
        page.clamp(1, self.total_pages)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.total_pages > 0 && self.current_page < self.total_pages
    }

    /// Numbered pages to render around the current page.
    pub fn page_window(&self) -> Vec<u32> {
        page_window(self.current_page, self.total_pages, PAGE_WINDOW)
    }
}

/// What caused a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchTrigger {
    Mount,
    Retry,
    FilterChange,
    PageChange,
    PageSizeChange,
    Mutation,
}

impl FetchTrigger {
    /// Automatic triggers fire without a user action and respect `stuck`.
    pub fn is_automatic(self) -> bool {
        matches!(self, Self::Mount)
    }
}

/// Outcome of folding one response into a `ListState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Superseded by a newer request; nothing changed.
    Stale,
    /// Rows and counters now reflect the response.
    Applied,
    /// The response was for a page past the end. The current page was
    /// clamped and must be fetched with this ticket.
    Refetch(FetchTicket),
}

/// Parameters of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Rows and request bookkeeping for one paginated screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub pagination: Pagination,
    pub rows: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub stuck: bool,
    seq: u64,
}

impl<T> ListState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            rows: Vec::new(),
            loading: false,
            error: None,
            stuck: false,
            seq: 0,
        }
    }

    /// Sequence number of the most recently issued request.
    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    /// Issue a fetch for the current page.
    ///
    /// Returns `None` when an automatic trigger is suppressed by a prior
    /// failure. Any explicit trigger clears the failure.
    pub fn begin_fetch(&mut self, trigger: FetchTrigger) -> Option<FetchTicket> {
        if trigger.is_automatic() && self.stuck {
            return None;
        }
        self.stuck = false;
        self.error = None;
        self.loading = true;
        self.seq += 1;
        Some(FetchTicket {
            seq: self.seq,
            page: self.pagination.current_page,
            page_size: self.pagination.page_size,
        })
    }

    /// Move to `page`, clamped into range. A request that clamps to the
    /// current page issues nothing.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchTicket> {
        let target = self.pagination.clamp(page);
        if target == self.pagination.current_page {
            return None;
        }
        self.pagination.current_page = target;
        self.begin_fetch(FetchTrigger::PageChange)
    }

    /// Change the page size and restart from page 1.
    pub fn set_page_size(&mut self, page_size: u32) -> Option<FetchTicket> {
        self.pagination.page_size = page_size.max(1);
        self.restart(FetchTrigger::PageSizeChange)
    }

    /// Go back to page 1 and fetch (filter change, reset).
    pub fn restart(&mut self, trigger: FetchTrigger) -> Option<FetchTicket> {
        self.pagination.current_page = 1;
        self.begin_fetch(trigger)
    }

    /// Apply a successful response.
    ///
    /// When the backend reports a page past `total_pages` (the last row of
    /// the last page was deleted), the rows belong to no valid page: they are
    /// dropped and a fetch for the clamped page is issued instead.
    pub fn apply_success(&mut self, ticket: FetchTicket, page: Page<T>) -> Settled {
        if ticket.seq != self.seq {
            return Settled::Stale;
        }
        self.loading = false;
        self.error = None;
        self.stuck = false;
        self.pagination.total_pages = page.total_pages;
        self.pagination.total_data = page.total_data;
        self.pagination.current_page = self.pagination.clamp(page.current_page);
        if page.total_pages > 0 && page.current_page > page.total_pages {
            self.rows.clear();
            return self.begin_fetch(FetchTrigger::PageChange).map_or(Settled::Applied, Settled::Refetch);
        }
        self.rows = page.rows;
        Settled::Applied
    }

    /// Apply a failed response. Returns `false` when the ticket is stale.
    pub fn apply_failure(&mut self, ticket: FetchTicket, message: String) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        self.stuck = true;
        self.rows.clear();
        true
    }
}

/// A `width`-wide run of page numbers centred on `current`, shifted to stay
/// within `[1, total]` while keeping its width when enough pages exist.
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total);
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(width / 2).max(1);
    let mut end = start + width - 1;
    if end > total {
        end = total;
        start = end + 1 - width;
    }
    (start..=end).collect()
}

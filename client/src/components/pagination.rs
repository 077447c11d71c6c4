//! Pager and page-size selector for list tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::state::listing::Pagination;

/// Page sizes offered on the gate table.
pub const PAGE_SIZES: [u32; 4] = [5, 10, 25, 50];

/// `"Showing N of TOTAL data"`.
pub fn showing_label(shown: usize, total: u64) -> String {
    format!("Showing {shown} of {total} data")
}

/// 1-based row number across pages.
pub fn row_number(pagination: &Pagination, index: usize) -> u64 {
    let offset = u64::from(pagination.current_page.saturating_sub(1)) * u64::from(pagination.page_size);
    offset + index as u64 + 1
}

/// Previous / numbered window / next buttons. `on_page` receives the target
/// page; the list state decides whether it actually fetches.
#[component]
pub fn Pager(pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    let current = move || pagination.get().current_page;

    view! {
        <nav class="pager" aria-label="Pagination">
            <button
                class="btn pager__step"
                disabled=move || { !pagination.get().can_go_previous() }
                on:click=move |_| on_page.run(current().saturating_sub(1))
            >
                "<"
            </button>
            {move || {
                let state = pagination.get();
                state
                    .page_window()
                    .into_iter()
                    .map(|page| {
                        let class = if page == state.current_page {
                            "btn pager__page pager__page--active"
                        } else {
                            "btn pager__page"
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| on_page.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="btn pager__step"
                disabled=move || { !pagination.get().can_go_next() }
                on:click=move |_| on_page.run(current() + 1)
            >
                ">"
            </button>
        </nav>
    }
}

/// `Show: N entries` selector.
#[component]
pub fn PageSizeSelect(page_size: Signal<u32>, on_change: Callback<u32>) -> impl IntoView {
    view! {
        <select
            class="pager__size"
            prop:value=move || page_size.get().to_string()
            on:change=move |ev| {
                if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                    on_change.run(size);
                }
            }
        >
            {PAGE_SIZES
                .iter()
                .map(|size| {
                    view! { <option value=size.to_string()>{format!("Show: {size} entries")}</option> }
                })
                .collect_view()}
        </select>
    }
}

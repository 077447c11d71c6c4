//! Laporan Lalin Per Hari: paginated, filterable traffic-record report.
//!
//! SYSTEM CONTEXT
//! ==============
//! Search and date are edited freely and applied by "Filter"; category tabs
//! apply immediately. Every applied filter restarts at page 1. Each request
//! reads the filter as it stands when the request is issued.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch hides the table behind one message and a "Coba Lagi"
//! button; nothing refetches on its own until the operator acts.

#[cfg(test)]
#[path = "lalin_test.rs"]
mod lalin_test;

use leptos::prelude::*;

use crate::components::pagination::{Pager, row_number, showing_label};
use crate::net::config::ApiConfig;
use crate::net::types::{TrafficRecord, cell_text};
use crate::pages::list_fetch::spawn_list_fetch;
use crate::state::filter::{TrafficFilter, VehicleCategory};
use crate::state::listing::{FetchTicket, FetchTrigger, ListState};
use crate::state::session::SessionState;

pub const TRAFFIC_PAGE_SIZE: u32 = 10;

/// Cabang, Gerbang, Gardu, Golongan, Asal Gerbang.
pub(crate) fn traffic_cells(record: &TrafficRecord) -> [String; 5] {
    [
        cell_text(record.branch_id.as_ref()),
        cell_text(record.gate_id.as_ref()),
        cell_text(record.lane_id.as_ref()),
        cell_text(record.vehicle_class.as_ref()),
        cell_text(record.origin_gate.as_ref()),
    ]
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab--active" } else { "tab" }
}

#[component]
pub fn LalinPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = StoredValue::new(expect_context::<ApiConfig>());

    let list = RwSignal::new(ListState::<TrafficRecord>::new(TRAFFIC_PAGE_SIZE));
    let filter = RwSignal::new(TrafficFilter::default());

    let load = move |ticket: Option<FetchTicket>| {
        let cfg = api.get_value();
        let token = session.get_untracked().token;
        let applied = filter.get_untracked();
        spawn_list_fetch(list, session, ticket, move |t| {
            let (cfg, token, applied) = (cfg.clone(), token.clone(), applied.clone());
            async move { crate::net::api::list_traffic(&cfg, token.as_deref(), t.page, t.page_size, &applied).await }
        });
    };
    let restart = move |trigger: FetchTrigger| load(list.try_update(|s| s.restart(trigger)).flatten());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || !session.with(SessionState::is_authenticated) {
            return;
        }
        requested.set(true);
        load(list.try_update(|s| s.begin_fetch(FetchTrigger::Mount)).flatten());
    });

    let on_reset = move |_| {
        filter.set(TrafficFilter::default());
        restart(FetchTrigger::FilterChange);
    };
    let on_category = move |category: VehicleCategory| {
        filter.update(|f| f.category = category);
        restart(FetchTrigger::FilterChange);
    };

    let pagination = Signal::derive(move || list.get().pagination);
    let on_page = Callback::new(move |page: u32| load(list.try_update(|s| s.go_to_page(page)).flatten()));

    view! {
        <div class="list-page">
            <h1 class="page-title">"Laporan Lalin Per Hari"</h1>
            <div class="list-page__toolbar">
                <input
                    class="list-page__search"
                    type="text"
                    placeholder="Search"
                    prop:value=move || filter.get().search
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <input
                    class="filter-bar__date"
                    type="date"
                    prop:value=move || filter.get().date
                    on:input=move |ev| filter.update(|f| f.date = event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| restart(FetchTrigger::FilterChange)>
                    "Filter"
                </button>
                <button class="btn" disabled=move || filter.with(TrafficFilter::is_default) on:click=on_reset>
                    "Reset"
                </button>
            </div>
            <div class="tabs">
                {VehicleCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class=move || tab_class(filter.get().category == category)
                                on:click=move |_| on_category(category)
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || list.get().error.is_some()>
                <div class="alert alert--danger" role="alert">
                    <span>{move || list.get().error.unwrap_or_default()}</span>
                    <button
                        class="btn"
                        on:click=move |_| load(list.try_update(|s| s.begin_fetch(FetchTrigger::Retry)).flatten())
                    >
                        "Coba Lagi"
                    </button>
                </div>
            </Show>
            <Show when=move || list.get().loading>
                <p class="page-loading">"Loading..."</p>
            </Show>
            <Show when=move || { let s = list.get(); !s.loading && s.error.is_none() }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"No"</th>
                            <th>"Cabang"</th>
                            <th>"Gerbang"</th>
                            <th>"Gardu"</th>
                            <th>"Golongan"</th>
                            <th>"Asal Gerbang"</th>
                            <th>"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.get();
                            if state.rows.is_empty() {
                                return view! { <tr><td colspan="7" class="data-table__status">"Tidak ada data yang ditemukan"</td></tr> }
                                    .into_any();
                            }
                            state
                                .rows
                                .iter()
                                .enumerate()
                                .map(|(index, record)| {
                                    let [branch, gate, lane, class, origin] = traffic_cells(record);
                                    view! {
                                        <tr>
                                            <td>{row_number(&state.pagination, index)}</td>
                                            <td>{branch}</td>
                                            <td>{gate}</td>
                                            <td>{lane}</td>
                                            <td>{class}</td>
                                            <td>{origin}</td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="icon-btn icon-btn--danger"
                                                    disabled=true
                                                    title="Data lalin tidak dapat dihapus"
                                                >
                                                    "🗑"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
                <Show when=move || !list.get().rows.is_empty()>
                    <div class="list-page__footer">
                        <span class="list-page__count">
                            {move || {
                                let s = list.get();
                                showing_label(s.rows.len(), s.pagination.total_data)
                            }}
                        </span>
                        <Pager pagination=pagination on_page=on_page/>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

//! Dashboard page: daily traffic aggregates as bar and donut charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data comes from the local source (`/dummyDashboard.json`), not the REST
//! backend, so no bearer token is attached and a failure never ends the
//! session. The date filter re-fetches; responses for a superseded date are
//! dropped by sequence number.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::charts::{Bar, BarChart, DonutChart};
use crate::net::config::ApiConfig;
use crate::net::types::DashboardData;
use crate::state::dashboard::{DashboardState, display_date};

#[cfg(feature = "hydrate")]
const DASHBOARD_FAILED_MESSAGE: &str = "Gagal memuat data dashboard";

pub(crate) fn bank_bars(data: &DashboardData) -> Vec<Bar> {
    data.bank_traffic.iter().map(|b| Bar { label: b.bank.clone(), value: b.jumlah }).collect()
}

pub(crate) fn gate_bars(data: &DashboardData) -> Vec<Bar> {
    data.gate_traffic.iter().map(|g| Bar { label: g.gerbang.clone(), value: g.jumlah }).collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiConfig>());
    let state = RwSignal::new(DashboardState::for_today());

    let load = move |seq: Option<u64>| {
        let Some(seq) = seq else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let cfg = api.get_value();
            leptos::task::spawn_local(async move {
                let applied = match crate::net::api::fetch_dashboard(&cfg).await {
                    Ok(data) => state.try_update(|s| s.apply_success(seq, data)),
                    Err(err) => {
                        leptos::logging::warn!("dashboard fetch failed: {err}");
                        state.try_update(|s| s.apply_failure(seq, err.message_or(DASHBOARD_FAILED_MESSAGE)))
                    }
                };
                if applied != Some(true) {
                    leptos::logging::log!("discarded stale dashboard response seq={seq}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, seq);
        }
    };

    Effect::new(move || load(state.try_update(|s| Some(s.begin_fetch())).flatten()));

    let data = move || state.get().data.unwrap_or_default();
    let bank = Signal::derive(move || bank_bars(&data()));
    let gates = Signal::derive(move || gate_bars(&data()));
    let shifts = Signal::derive(move || data().shift_traffic);
    let ruas = Signal::derive(move || data().ruas_traffic);

    view! {
        <div class="dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            <div class="filter-bar">
                <input
                    class="filter-bar__date"
                    type="date"
                    placeholder="Tanggal"
                    prop:value=move || state.get().date
                    on:change=move |ev| load(state.try_update(|s| s.set_date(event_target_value(&ev))).flatten())
                />
                <button
                    class="btn btn--primary"
                    on:click=move |_| load(state.try_update(|s| Some(s.begin_fetch())).flatten())
                >
                    "Filter"
                </button>
                <span class="filter-bar__caption">
                    {move || state.get().data.map(|d| display_date(&d.tanggal)).unwrap_or_default()}
                </span>
            </div>
            <Show when=move || state.get().error.is_some()>
                <p class="page-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !state.get().loading
                fallback=move || view! { <p class="page-loading">"Loading data..."</p> }
            >
                <div class="dashboard-page__grid">
                    <div class="panel">
                        <BarChart title="Lalin per Bank" bars=bank/>
                    </div>
                    <div class="panel">
                        <DonutChart title="Total Lalin" shares=shifts/>
                    </div>
                    <div class="panel">
                        <BarChart title="Lalin per Gerbang" bars=gates/>
                    </div>
                    <div class="panel">
                        <DonutChart title="Total Lalin" shares=ruas/>
                    </div>
                </div>
            </Show>
        </div>
    }
}

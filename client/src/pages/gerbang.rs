//! Master Gerbang page: paginated gate table with create/edit/view/delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is one backend page (`GET /gerbangs?page&limit`); the search box
//! narrows that page locally by gate name. Writes go through `DialogState`
//! and each success closes the dialog and re-fetches the current page once.
//!
//! TRADE-OFFS
//! ==========
//! No optimistic updates: the table only ever shows what the backend returned,
//! at the cost of one extra round trip per write.

#[cfg(test)]
#[path = "gerbang_test.rs"]
mod gerbang_test;

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::pagination::{PageSizeSelect, Pager, row_number};
use crate::net::config::ApiConfig;
use crate::net::types::Gate;
use crate::pages::list_fetch::spawn_list_fetch;
use crate::state::dialog::{DialogState, GateForm};
use crate::state::listing::{FetchTicket, FetchTrigger, ListState};
use crate::state::session::SessionState;

pub const DEFAULT_GATE_PAGE_SIZE: u32 = 5;
#[cfg(any(test, feature = "hydrate"))]
const MUTATION_FAILED_MESSAGE: &str = "Gagal menyimpan data gerbang";

/// Rows whose gate name contains `query`, case-insensitively.
pub(crate) fn filter_by_name(rows: &[Gate], query: &str) -> Vec<Gate> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter().filter(|g| g.gate_name.to_lowercase().contains(&needle)).cloned().collect()
}

/// Fold a write outcome into the page state.
///
/// Success closes the dialog and returns the single refresh ticket. Failure
/// keeps the dialog open with an inline message, unless the session ended.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn settle_mutation(
    dialog: RwSignal<DialogState<Gate>>,
    list: RwSignal<ListState<Gate>>,
    session: RwSignal<SessionState>,
    dialog_error: RwSignal<Option<String>>,
    result: Result<(), crate::net::api::ApiError>,
) -> Option<FetchTicket> {
    use crate::state::dialog::complete_mutation;
    use crate::util::auth::end_session_if_unauthorized;

    match result {
        Ok(()) => {
            dialog_error.set(None);
            let mut ticket = None;
            dialog.update(|d| list.update(|l| ticket = complete_mutation(d, l)));
            ticket
        }
        Err(err) => {
            if end_session_if_unauthorized(session, &err) {
                dialog.update(DialogState::close);
                return None;
            }
            leptos::logging::warn!("gate write failed: {err}");
            dialog_error.set(Some(err.message_or(MUTATION_FAILED_MESSAGE)));
            None
        }
    }
}

#[component]
pub fn GerbangPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = StoredValue::new(expect_context::<ApiConfig>());

    let list = RwSignal::new(ListState::<Gate>::new(DEFAULT_GATE_PAGE_SIZE));
    let search = RwSignal::new(String::new());
    let dialog = RwSignal::new(DialogState::<Gate>::Closed);
    let form = RwSignal::new(GateForm::default());
    let dialog_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let load = move |ticket: Option<FetchTicket>| {
        let cfg = api.get_value();
        let token = session.get_untracked().token;
        spawn_list_fetch(list, session, ticket, move |t| {
            let (cfg, token) = (cfg.clone(), token.clone());
            async move { crate::net::api::list_gates(&cfg, token.as_deref(), t.page, t.page_size).await }
        });
    };

    // Fetch once the session is known to be authenticated.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || !session.with(SessionState::is_authenticated) {
            return;
        }
        requested.set(true);
        load(list.try_update(|s| s.begin_fetch(FetchTrigger::Mount)).flatten());
    });

    let open = move |next: DialogState<Gate>| {
        form.set(next.initial_form());
        dialog_error.set(None);
        dialog.set(next);
    };
    let on_close = Callback::new(move |()| {
        if !busy.get_untracked() {
            dialog.set(DialogState::Closed);
        }
    });

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let mutation = match dialog.with_untracked(|d| d.mutation(&form.get_untracked())) {
            Ok(mutation) => mutation,
            Err(err) => {
                dialog_error.set(Some(err.to_string()));
                return;
            }
        };
        busy.set(true);
        dialog_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let cfg = api.get_value();
            let token = session.get_untracked().token;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::apply_mutation(&cfg, token.as_deref(), &mutation).await;
                busy.set(false);
                load(settle_mutation(dialog, list, session, dialog_error, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mutation;
            busy.set(false);
        }
    });

    let visible_rows = move || filter_by_name(&list.get().rows, &search.get());
    let pagination = Signal::derive(move || list.get().pagination);
    let page_size = Signal::derive(move || list.get().pagination.page_size);
    let on_page = Callback::new(move |page: u32| load(list.try_update(|s| s.go_to_page(page)).flatten()));
    let on_page_size = Callback::new(move |size: u32| load(list.try_update(|s| s.set_page_size(size)).flatten()));

    view! {
        <div class="list-page">
            <h1 class="page-title">"Master Gerbang"</h1>
            <div class="list-page__toolbar">
                <input
                    class="list-page__search"
                    type="text"
                    placeholder="Search"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <span class="list-page__spacer"></span>
                <button
                    class="btn"
                    on:click=move |_| load(list.try_update(|s| s.begin_fetch(FetchTrigger::Retry)).flatten())
                >
                    "⟳ Refresh"
                </button>
                <button class="btn btn--primary" on:click=move |_| open(DialogState::Creating)>
                    "+ Tambah"
                </button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No."</th>
                        <th>"Nama Cabang"</th>
                        <th>"Nama Gerbang"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = list.get();
                        if state.loading {
                            return view! { <tr><td colspan="4" class="data-table__status">"Loading..."</td></tr> }.into_any();
                        }
                        if let Some(error) = state.error {
                            return view! { <tr><td colspan="4" class="data-table__status data-table__status--error">{error}</td></tr> }
                                .into_any();
                        }
                        let rows = visible_rows();
                        if rows.is_empty() {
                            return view! { <tr><td colspan="4" class="data-table__status">"No data available"</td></tr> }.into_any();
                        }
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, gate)| {
                                let number = row_number(&state.pagination, index);
                                let (edit, view_row, delete) = (gate.clone(), gate.clone(), gate.clone());
                                view! {
                                    <tr>
                                        <td>{number}</td>
                                        <td>{gate.branch_name}</td>
                                        <td>{gate.gate_name}</td>
                                        <td class="data-table__actions">
                                            <button class="icon-btn" title="Edit" on:click=move |_| open(DialogState::Editing(edit.clone()))>"✎"</button>
                                            <button class="icon-btn" title="Detail" on:click=move |_| open(DialogState::Viewing(view_row.clone()))>"👁"</button>
                                            <button class="icon-btn icon-btn--danger" title="Hapus" on:click=move |_| open(DialogState::ConfirmingDelete(delete.clone()))>"🗑"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <div class="list-page__footer">
                <PageSizeSelect page_size=page_size on_change=on_page_size/>
                <Pager pagination=pagination on_page=on_page/>
            </div>
            {move || match dialog.get() {
                DialogState::Closed => ().into_any(),
                DialogState::Creating | DialogState::Editing(_) => {
                    let title = dialog.with_untracked(DialogState::<Gate>::title);
                    let submit_label = dialog.with_untracked(DialogState::<Gate>::submit_label);
                    view! {
                        <GateFormDialog title=title submit_label=submit_label form=form error=dialog_error busy=busy on_close=on_close on_submit=on_submit/>
                    }
                    .into_any()
                }
                DialogState::Viewing(gate) => view! { <GateDetailDialog gate=gate on_close=on_close/> }.into_any(),
                DialogState::ConfirmingDelete(gate) => {
                    view! { <DeleteGateDialog gate=gate error=dialog_error busy=busy on_close=on_close on_confirm=on_submit/> }.into_any()
                }
            }}
        </div>
    }
}

/// Create/edit form.
#[component]
fn GateFormDialog(
    title: &'static str,
    submit_label: &'static str,
    form: RwSignal<GateForm>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_close>
            <form
                class="dialog__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <label class="dialog__label">
                    "ID Cabang"
                    <input
                        class="dialog__input"
                        type="number"
                        required=true
                        prop:value=move || form.get().branch_id
                        on:input=move |ev| form.update(|f| f.branch_id = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Nama Gerbang"
                    <input
                        class="dialog__input"
                        type="text"
                        required=true
                        prop:value=move || form.get().gate_name
                        on:input=move |ev| form.update(|f| f.gate_name = event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Batal"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Read-only detail view.
#[component]
fn GateDetailDialog(gate: Gate, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Detail Gerbang" on_close=on_close>
            <dl class="dialog__details">
                <dt>"ID"</dt>
                <dd>{gate.id}</dd>
                <dt>"ID Cabang"</dt>
                <dd>{gate.branch_id}</dd>
                <dt>"Nama Cabang"</dt>
                <dd>{gate.branch_name}</dd>
                <dt>"Nama Gerbang"</dt>
                <dd>{gate.gate_name}</dd>
            </dl>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Tutup"
                </button>
            </div>
        </Modal>
    }
}

/// Delete confirmation.
#[component]
fn DeleteGateDialog(
    gate: Gate,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Hapus Gerbang" on_close=on_close>
            <p>{format!("Apakah Anda yakin ingin menghapus gerbang \"{}\"?", gate.gate_name)}</p>
            <Show when=move || error.get().is_some()>
                <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Batal"
                </button>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=move |_| on_confirm.run(())>
                    "Hapus"
                </button>
            </div>
        </Modal>
    }
}

//! Catch-all route: unknown paths go home or to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::fallback_route;

#[component]
pub fn NotFound() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = fallback_route(session.get().status) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <p class="page-loading">"Redirecting..."</p> }
}

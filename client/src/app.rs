//! Application shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the host for every SSR request and carries the
//! backend base URLs as meta tags. `App` provides the session and API
//! configuration to every page, then mounts the router. All protected routes
//! nest under `DashboardLayout`, which owns the session guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::DashboardLayout;
use crate::net::config::{API_BASE_META, ApiConfig, LOCAL_API_BASE_META};
use crate::pages::dashboard::DashboardPage;
use crate::pages::gerbang::GerbangPage;
use crate::pages::lalin::LalinPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFound;
use crate::state::session::SessionState;
use crate::util::auth::init_session;

/// HTML document for both SSR and hydration.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api.api_base_url/>
                <meta name=LOCAL_API_BASE_META content=api.local_api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The host provides the config during SSR; the browser reads the meta tags.
    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(api);

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Effects only run in the browser, so SSR always renders `Unknown`.
    Effect::new(move || init_session(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/tollgate.css"/>
        <Title text="Tollgate Dashboard"/>
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/login") view=LoginPage/>
                <ParentRoute path=path!("") view=DashboardLayout>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("lalin-perday-report") view=LalinPage/>
                    <Route path=path!("master-gerbang") view=GerbangPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

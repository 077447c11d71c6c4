//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR pages, the WASM bundle under `/pkg`,
//! the dashboard data file and whatever else lives in the public directory.
//! The REST backend is a separate service; nothing here proxies to it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tollgate_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Dashboard aggregates file inside the public directory.
pub const DASHBOARD_FILE: &str = "dummyDashboard.json";

/// Health check, legacy redirect and static files. No Leptos rendering.
pub fn public_routes(public_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/dashboard", get(redirect_dashboard_to_root))
        .route_service(&format!("/{DASHBOARD_FILE}"), ServeFile::new(public_dir.join(DASHBOARD_FILE)))
        .fallback_service(ServeDir::new(public_dir))
}

/// Full host router: public routes plus Leptos SSR and `/pkg`.
pub fn app(config: &HostConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let api = config.api_config();

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = api.clone();
                move || provide_context(api.clone())
            },
            {
                let opts = leptos_options.clone();
                move || shell(opts.clone(), api.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let router = public_routes(&config.public_dir)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")));

    let router = if config.trace_requests { router.layer(TraceLayer::new_for_http()) } else { router };
    router.layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_dashboard_to_root() -> Redirect {
    Redirect::temporary("/")
}

//! REST helpers for the toll-gate backend and the local dashboard source.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since every endpoint here is
//! only meaningful in the browser where the session cookies live.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 from an authenticated
//! endpoint maps to `ApiError::Unauthorized` so callers can force a logout;
//! other non-2xx bodies are parsed leniently into `ErrorBody` for display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{DashboardData, ErrorBody, Gate, GateDraft, LoginRequest, LoginResponse, TrafficRecord};
use crate::state::filter::TrafficFilter;
use crate::state::listing::Page;

/// Shown when a list fetch fails without a backend message.
pub const FETCH_FAILED_MESSAGE: &str = "Terjadi kesalahan saat mengambil data";

pub const LOGIN_PATH: &str = "/auth/login";
pub const GATES_PATH: &str = "/gerbangs";
pub const TRAFFIC_PATH: &str = "/lalins";
pub const DASHBOARD_PATH: &str = "/dummyDashboard.json";

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired")]
    Unauthorized,
    #[error("not logged in")]
    MissingToken,
    #[error("request rejected with status {status}")]
    Rejected { status: u16, body: ErrorBody },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Classify a non-2xx response from an authenticated endpoint.
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::rejected(status, raw_body)
    }

    pub fn rejected(status: u16, raw_body: &str) -> Self {
        Self::Rejected { status, body: ErrorBody::parse(raw_body) }
    }

    /// Whether the caller must drop the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::MissingToken)
    }

    /// Backend `message` when one was sent, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { body, .. } => body
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }
}

// =============================================================================
// URLS
// =============================================================================

/// `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn login_url(cfg: &ApiConfig) -> String {
    cfg.api_url(LOGIN_PATH)
}

/// `GET /gerbangs?page&limit`.
///
/// # Errors
///
/// Returns `ApiError::InvalidUrl` if the configured base URL is not absolute.
pub fn gates_url(cfg: &ApiConfig, page: u32, limit: u32) -> Result<String, ApiError> {
    with_query(&cfg.api_url(GATES_PATH), &paging_pairs(page, limit))
}

pub fn gate_url(cfg: &ApiConfig, id: i64) -> String {
    cfg.api_url(&format!("{GATES_PATH}/{id}"))
}

/// `GET /lalins?page&limit&search&date&type`, omitting empty filters.
///
/// # Errors
///
/// Returns `ApiError::InvalidUrl` if the configured base URL is not absolute.
pub fn traffic_url(cfg: &ApiConfig, page: u32, limit: u32, filter: &TrafficFilter) -> Result<String, ApiError> {
    let mut pairs = paging_pairs(page, limit);
    pairs.extend(filter.query_pairs());
    with_query(&cfg.api_url(TRAFFIC_PATH), &pairs)
}

pub fn dashboard_url(cfg: &ApiConfig) -> String {
    cfg.local_url(DASHBOARD_PATH)
}

fn paging_pairs(page: u32, limit: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("limit", limit.to_string())]
}

fn with_query(base: &str, pairs: &[(&'static str, String)]) -> Result<String, ApiError> {
    url::Url::parse_with_params(base, pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .map(String::from)
        .map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// A gate write issued from a dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    Create(GateDraft),
    Update { id: i64, draft: GateDraft },
    Delete { id: i64 },
}

impl Mutation {
    pub fn url(&self, cfg: &ApiConfig) -> String {
        match self {
            Self::Create(_) => cfg.api_url(GATES_PATH),
            Self::Update { id, .. } | Self::Delete { id } => gate_url(cfg, *id),
        }
    }

    /// Request body; `None` for deletes.
    pub fn body(&self) -> Option<&GateDraft> {
        match self {
            Self::Create(draft) | Self::Update { draft, .. } => Some(draft),
            Self::Delete { .. } => None,
        }
    }
}

// =============================================================================
// CALLS
// =============================================================================

/// `POST /auth/login`.
///
/// # Errors
///
/// Any non-2xx status (including 401) is returned as `ApiError::Rejected` so
/// the login form can show the backend's validation lines.
pub async fn login(cfg: &ApiConfig, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&login_url(cfg))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let raw = resp.text().await.unwrap_or_default();
            return Err(ApiError::rejected(status, &raw));
        }
        resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, request);
        Err(not_available())
    }
}

/// Fetch one page of gates.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status or a malformed body.
pub async fn list_gates(cfg: &ApiConfig, token: Option<&str>, page: u32, limit: u32) -> Result<Page<Gate>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = gates_url(cfg, page, limit)?;
        let builder = authorized(gloo_net::http::Request::get(&url), token)?;
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let body: super::types::GateListResponse = read_json(resp).await?;
        Ok(body.into_page(page, limit))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, token, page, limit);
        Err(not_available())
    }
}

/// Send a create/update/delete for a gate.
///
/// # Errors
///
/// Returns `ApiError` on transport failure or non-2xx status.
pub async fn apply_mutation(cfg: &ApiConfig, token: Option<&str>, mutation: &Mutation) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let url = mutation.url(cfg);
        let builder = match mutation {
            Mutation::Create(_) => Request::post(&url),
            Mutation::Update { .. } => Request::put(&url),
            Mutation::Delete { .. } => Request::delete(&url),
        };
        let builder = authorized(builder, token)?;
        let resp = match mutation.body() {
            Some(draft) => builder.json(draft).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let raw = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &raw));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, token, mutation);
        Err(not_available())
    }
}

/// Fetch one page of traffic records.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status or a malformed body.
pub async fn list_traffic(
    cfg: &ApiConfig,
    token: Option<&str>,
    page: u32,
    limit: u32,
    filter: &TrafficFilter,
) -> Result<Page<TrafficRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = traffic_url(cfg, page, limit, filter)?;
        let builder = authorized(gloo_net::http::Request::get(&url), token)?;
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let body: super::types::TrafficListResponse = read_json(resp).await?;
        Ok(body.into_page(page, limit))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, token, page, limit, filter);
        Err(not_available())
    }
}

/// Fetch the dashboard aggregates from the local source. No auth header.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status or a malformed body.
pub async fn fetch_dashboard(cfg: &ApiConfig) -> Result<DashboardData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&dashboard_url(cfg))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: super::types::DashboardResponse = read_json(resp).await?;
        Ok(body.data.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
        Err(not_available())
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> Result<gloo_net::http::RequestBuilder, ApiError> {
    let token = token.ok_or(ApiError::MissingToken)?;
    Ok(builder.header("Authorization", &bearer(token)))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &raw));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

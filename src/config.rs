//! Host configuration from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup, after `.env` is loaded. Backend URLs are validated
//! here and handed to the client through the SSR shell, so a typo fails the
//! boot instead of every browser request.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use tollgate_client::net::config::{ApiConfig, DEFAULT_API_BASE_URL};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not a port number")]
    InvalidPort { key: &'static str, value: String },
    #[error("invalid {key}: {value:?} ({reason})")]
    InvalidUrl { key: &'static str, value: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// REST backend base URL, without trailing slash.
    pub api_url: String,
    /// Base URL for `/dummyDashboard.json`. Empty means same origin.
    pub local_api_url: String,
    /// Directory served for everything the router does not match.
    pub public_dir: PathBuf,
    /// Emit request spans.
    pub trace_requests: bool,
}

impl HostConfig {
    /// Read `PORT`, `TOLLGATE_API_URL`, `TOLLGATE_LOCAL_API_URL`,
    /// `PUBLIC_DIR` and `TOLLGATE_TRACE_REQUESTS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a port number, or if either
    /// URL is set but does not parse as an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { key: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let api_url = env_url("TOLLGATE_API_URL", DEFAULT_API_BASE_URL)?;
        let local_api_url = env_url("TOLLGATE_LOCAL_API_URL", "")?;
        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"));
        let trace_requests = env_bool("TOLLGATE_TRACE_REQUESTS").unwrap_or(true);

        Ok(Self { port, api_url, local_api_url, public_dir, trace_requests })
    }

    /// Configuration handed to the client app.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&self.api_url, &self.local_api_url)
    }
}

/// Read `key` as an absolute URL, trimming trailing `/`. Empty means `default`.
fn env_url(key: &'static str, default: &str) -> Result<String, ConfigError> {
    let raw = std::env::var(key).unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default.to_owned());
    }
    validate_url(key, raw)
}

pub(crate) fn validate_url(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    url::Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        key,
        value: raw.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(raw.trim_end_matches('/').to_owned())
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

//! Backend base URLs shared by every request helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders both URLs into `<meta>` tags in the SSR shell; on hydrate
//! the client reads them back so server and browser agree on endpoints.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta name=...>` carrying the REST backend base URL.
pub const API_BASE_META: &str = "tollgate:api-base";
/// `<meta name=...>` carrying the local data-source base URL.
pub const LOCAL_API_BASE_META: &str = "tollgate:local-api-base";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Base URLs for the REST backend and the local dashboard data source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// REST backend, e.g. `https://api.example.com`. No trailing slash.
    pub api_base_url: String,
    /// Local data source. Empty means same origin as the page.
    pub local_api_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), local_api_base_url: String::new() }
    }
}

impl ApiConfig {
    pub fn new(api_base_url: &str, local_api_base_url: &str) -> Self {
        Self {
            api_base_url: trim_base(api_base_url),
            local_api_base_url: trim_base(local_api_base_url),
        }
    }

    /// Absolute backend URL for `path` (which must start with `/`).
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }

    /// Local data-source URL for `path`; relative when no base is configured.
    pub fn local_url(&self, path: &str) -> String {
        format!("{}{path}", self.local_api_base_url)
    }

    /// Read the configuration from the SSR shell's meta tags.
    ///
    /// Falls back to defaults outside the browser or when a tag is absent.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let defaults = Self::default();
            let api = read_meta(API_BASE_META).unwrap_or(defaults.api_base_url);
            let local = read_meta(LOCAL_API_BASE_META).unwrap_or(defaults.local_api_base_url);
            Self::new(&api, &local)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

fn trim_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
    element.get_attribute("content")
}

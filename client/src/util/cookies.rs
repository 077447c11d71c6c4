//! Browser cookie access for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserCookies` is the `CookieStore` used by the running app. Parsing and
//! formatting go through the `cookie` crate so values are percent-encoded
//! the same way on write and read; only the `document.cookie` glue is
//! hydrate-gated.
//!
//! TRADE-OFFS
//! ==========
//! The cookies are script-readable (not `HttpOnly`) because the client itself
//! attaches the bearer token to backend requests.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use cookie::Cookie;
use cookie::time::Duration;

use crate::state::session::CookieStore;

/// `CookieStore` backed by `document.cookie`. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieStore for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        read_document_cookie().and_then(|raw| find_cookie(&raw, name))
    }

    fn set(&self, name: &str, value: &str) {
        write_document_cookie(&set_cookie_header(name, value));
    }

    fn remove(&self, name: &str) {
        write_document_cookie(&removal_cookie_header(name));
    }
}

/// Value of `name` in a `document.cookie` string, percent-decoded.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
}

/// Assignment string that stores `name=value` site-wide.
pub fn set_cookie_header(name: &str, value: &str) -> String {
    let cookie = Cookie::build((name, value))
        .path("/")
        .same_site(cookie::SameSite::Lax)
        .build();
    cookie.encoded().to_string()
}

/// Assignment string that expires `name` immediately.
pub fn removal_cookie_header(name: &str) -> String {
    let cookie = Cookie::build((name, ""))
        .path("/")
        .same_site(cookie::SameSite::Lax)
        .max_age(Duration::ZERO)
        .build();
    cookie.encoded().to_string()
}

fn read_document_cookie() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        html_document()?.cookie().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn write_document_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(assignment).is_err() {
                leptos::logging::warn!("cookie write rejected by the browser");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

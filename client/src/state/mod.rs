//! Client state models held in Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is provided app-wide through context; the remaining modules are
//! owned by the page that renders them. Every model is a plain struct with
//! methods so transitions are testable without a browser.

pub mod dashboard;
pub mod dialog;
pub mod filter;
pub mod listing;
pub mod login;
pub mod session;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell, list paging controls, dialogs
//! and dashboard charts, reading shared state from Leptos context providers
//! or from signals handed down by the page.

pub mod charts;
pub mod layout;
pub mod modal;
pub mod pagination;

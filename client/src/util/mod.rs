//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, navigation guards) from
//! page and component logic.

pub mod auth;
pub mod cookies;

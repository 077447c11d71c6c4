//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod gerbang;
pub mod lalin;
pub(crate) mod list_fetch;
pub mod login;
pub mod not_found;

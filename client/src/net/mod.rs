//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `config` locates the backend, and `types` defines
//! the wire schema.

pub mod api;
pub mod config;
pub mod types;

//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the JSON wire schema, and
//! `error` is the failure type every call returns.

pub mod api;
pub mod error;
pub mod types;

//! Networking modules for the same-origin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the server proxy and `types` defines the shared
//! wire schema.

pub mod api;
pub mod types;

//! Networking modules for the HR backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `types` defines the wire schema.

pub mod api;
pub mod types;

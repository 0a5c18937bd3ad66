//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `resource`, etc.) and kept
//! free of Leptos types so every transition is unit-testable. Pages wrap
//! these structs in `RwSignal`s.

pub mod auth;
pub mod employees;
pub mod error;
pub mod profile;
pub mod resource;
pub mod session;

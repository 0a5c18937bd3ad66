//! User-visible error state shared by every view.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::api::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Shown in place; the view stays usable.
    Recoverable,
    /// The session is no longer valid; the view must send the user to login.
    SessionExpired,
}

/// An error message attached to a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ViewError {
    pub fn recoverable(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Recoverable, message: message.into() }
    }

    /// Wrap an API failure, prefixing the action that was attempted.
    #[must_use]
    pub fn from_api(action: &str, err: &ApiError) -> Self {
        let kind = if err.is_session_expired() { ErrorKind::SessionExpired } else { ErrorKind::Recoverable };
        Self { kind, message: format!("{action}: {err}") }
    }

    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        self.kind == ErrorKind::SessionExpired
    }
}

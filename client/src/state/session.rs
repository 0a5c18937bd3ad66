//! Persistent auth session: bearer token plus role.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is provided once through Leptos context by `App` and is the
//! only accessor for the token and role. Reads always go to the backing
//! storage so a token rotated elsewhere is used by the very next request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the role string.
pub const ROLE_KEY: &str = "role";

/// Authorization class carried in the token's role claim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Employee,
    /// Any other claim value, kept verbatim.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "employee" => Self::Employee,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the persisted session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.role.as_ref() == Some(role)
    }
}

/// Synchronous string key-value backend for the session.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Returns whether `key` is gone afterwards.
    fn remove(&self, key: &str) -> bool;
}

/// Process-local storage used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.lock().map(|mut entries| entries.remove(key)).is_ok()
    }
}

/// Typed accessor over a [`SessionStorage`] backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by an empty in-memory map.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Store for the current environment: localStorage in the browser,
    /// in-memory everywhere else.
    #[must_use]
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(crate::util::storage::BrowserStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    /// Persist a freshly issued token and its role, replacing any prior session.
    pub fn set(&self, token: &str, role: &Role) {
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(ROLE_KEY, role.as_str());
    }

    #[must_use]
    pub fn get(&self) -> Session {
        Session {
            token: self.token(),
            role: self.storage.get(ROLE_KEY).map(|raw| Role::parse(&raw)),
        }
    }

    /// Current bearer token; empty strings count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Drop token and role. Returns `false` if either could not be removed.
    pub fn clear(&self) -> bool {
        let token_cleared = self.storage.remove(TOKEN_KEY);
        let role_cleared = self.storage.remove(ROLE_KEY);
        token_cleared && role_cleared
    }
}

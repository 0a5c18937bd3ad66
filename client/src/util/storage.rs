//! Browser localStorage backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only glue so `state::session` stays free of `web-sys` calls.
//! Storage failures (private mode, quota) degrade to "no session".

use crate::state::session::SessionStorage;

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for key {key}");
        }
    }

    fn remove(&self, key: &str) -> bool {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; key {key} not cleared");
            return false;
        };
        if storage.remove_item(key).is_err() {
            log::warn!("localStorage remove failed for key {key}");
            return false;
        }
        true
    }
}

//! Generic cached collection for a REST resource.
//!
//! DESIGN
//! ======
//! Views hold a `ResourceState<T>` and feed it API responses in whatever
//! order they land. Every local mutation advances an epoch and stamps the id
//! it touched; refresh snapshots carry the epoch at which they were issued.
//! Deletes tombstone the id at issue time.
//!
//! Consequences:
//! - an id that was deleted never reappears, whether the late response is a
//!   create, an update, or a stale refresh snapshot;
//! - a snapshot issued before a local create/update keeps the local record;
//! - a snapshot older than one already applied is dropped.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::collections::{HashMap, HashSet};

use crate::state::error::ViewError;

/// A record with a server-assigned integer key.
pub trait Resource: Clone {
    fn key(&self) -> i64;
}

/// Handle for one in-flight refresh; returned by [`ResourceState::begin_refresh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
    epoch: u64,
}

#[derive(Clone, Debug)]
pub struct ResourceState<T> {
    items: Vec<T>,
    epoch: u64,
    touched: HashMap<i64, u64>,
    tombstones: HashSet<i64>,
    pending_deletes: HashMap<i64, (usize, T)>,
    refresh_seq: u64,
    applied_refresh: Option<u64>,
    pub loading: bool,
    pub error: Option<ViewError>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            epoch: 0,
            touched: HashMap::new(),
            tombstones: HashSet::new(),
            pending_deletes: HashMap::new(),
            refresh_seq: 0,
            applied_refresh: None,
            loading: false,
            error: None,
        }
    }
}

impl<T: Resource> ResourceState<T> {
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, key: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    fn position(&self, key: i64) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    fn stamp(&mut self, key: i64) {
        self.epoch += 1;
        self.touched.insert(key, self.epoch);
    }

    fn touched_after(&self, key: i64, epoch: u64) -> bool {
        self.touched.get(&key).is_some_and(|&at| at > epoch)
    }

    /// Mark a list fetch as issued.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh_seq += 1;
        self.loading = true;
        RefreshTicket { seq: self.refresh_seq, epoch: self.epoch }
    }

    /// Apply a list snapshot. Returns `false` when the snapshot was stale.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, records: Vec<T>) -> bool {
        if ticket.seq == self.refresh_seq {
            self.loading = false;
        }
        if self.applied_refresh.is_some_and(|seq| seq >= ticket.seq) {
            return false;
        }
        self.applied_refresh = Some(ticket.seq);

        let mut next = Vec::with_capacity(records.len());
        let mut seen = HashSet::new();
        for record in records {
            let key = record.key();
            if self.tombstones.contains(&key) || !seen.insert(key) {
                continue;
            }
            if self.touched_after(key, ticket.epoch) {
                if let Some(local) = self.get(key) {
                    next.push(local.clone());
                    continue;
                }
            }
            next.push(record);
        }
        for local in &self.items {
            let key = local.key();
            if !seen.contains(&key) && self.touched_after(key, ticket.epoch) {
                seen.insert(key);
                next.push(local.clone());
            }
        }
        self.items = next;
        self.error = None;
        true
    }

    /// Record a failed list fetch.
    pub fn fail_refresh(&mut self, ticket: RefreshTicket, error: ViewError) {
        if ticket.seq == self.refresh_seq {
            self.loading = false;
        }
        self.error = Some(error);
    }

    /// Apply a create response: insert, or replace a record with the same key.
    /// Returns `false` if the key was deleted in the meantime.
    pub fn apply_created(&mut self, record: T) -> bool {
        let key = record.key();
        if self.tombstones.contains(&key) {
            return false;
        }
        self.stamp(key);
        match self.position(key) {
            Some(index) => self.items[index] = record,
            None => self.items.push(record),
        }
        self.error = None;
        true
    }

    /// Apply an update response to the record with the same key only.
    /// Returns `false` if that key is unknown or deleted.
    pub fn apply_updated(&mut self, record: T) -> bool {
        let key = record.key();
        if self.tombstones.contains(&key) {
            return false;
        }
        let Some(index) = self.position(key) else {
            return false;
        };
        self.stamp(key);
        self.items[index] = record;
        self.error = None;
        true
    }

    /// Remove `key` as soon as its delete is issued. Returns whether a cached
    /// record was removed; the key is tombstoned either way.
    pub fn begin_delete(&mut self, key: i64) -> bool {
        self.tombstones.insert(key);
        self.stamp(key);
        let Some(index) = self.position(key) else {
            return false;
        };
        let record = self.items.remove(index);
        self.pending_deletes.insert(key, (index, record));
        true
    }

    pub fn confirm_delete(&mut self, key: i64) {
        self.pending_deletes.remove(&key);
        self.error = None;
    }

    /// Undo [`begin_delete`](Self::begin_delete) after the server refused it,
    /// restoring the record at its former position.
    pub fn rollback_delete(&mut self, key: i64, error: ViewError) {
        self.tombstones.remove(&key);
        self.stamp(key);
        if let Some((index, record)) = self.pending_deletes.remove(&key) {
            let index = index.min(self.items.len());
            self.items.insert(index, record);
        }
        self.error = Some(error);
    }
}

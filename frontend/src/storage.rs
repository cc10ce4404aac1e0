use std::collections::VecDeque;

use log::warn;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use web_sys::Storage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0} storage is not available")]
    Unavailable(&'static str),
    #[error("failed to read `{0}`")]
    Read(String),
    #[error("failed to write `{0}`")]
    Write(String),
    #[error("failed to encode log entry: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value storage, the shape shared by `localStorage` and `sessionStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser-backed store. The underlying `Storage` handle is acquired per
/// operation and released when the operation returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStore {
    Local,
    Session,
}

impl BrowserStore {
    fn label(self) -> &'static str {
        match self {
            BrowserStore::Local => "local",
            BrowserStore::Session => "session",
        }
    }

    fn acquire(self) -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable(self.label()))?;
        let storage = match self {
            BrowserStore::Local => window.local_storage(),
            BrowserStore::Session => window.session_storage(),
        };
        storage
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable(self.label()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.acquire()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.acquire()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// Appends `entry` and drops from the front until at most `cap` entries remain.
pub fn push_bounded<T>(entries: &mut VecDeque<T>, entry: T, cap: usize) {
    entries.push_back(entry);
    while entries.len() > cap {
        entries.pop_front();
    }
}

/// Append-only JSON array stored under one key, keeping only the newest `cap` entries.
pub struct BoundedLog<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    key: &'static str,
    cap: usize,
}

impl<'a, S: KeyValueStore + ?Sized> BoundedLog<'a, S> {
    pub fn new(store: &'a S, key: &'static str, cap: usize) -> Self {
        Self { store, key, cap }
    }

    pub fn entries(&self) -> Result<VecDeque<Value>, StorageError> {
        let Some(raw) = self.store.get(self.key)? else {
            return Ok(VecDeque::new());
        };
        match serde_json::from_str::<VecDeque<Value>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // A corrupt log is replaced on the next write rather than blocking it.
                warn!("Discarding unreadable log `{}`: {}", self.key, e);
                Ok(VecDeque::new())
            }
        }
    }

    /// Returns the log length after the append.
    pub fn append<T: Serialize + ?Sized>(&self, entry: &T) -> Result<usize, StorageError> {
        let entry = serde_json::to_value(entry)?;
        let mut entries = self.entries()?;
        push_bounded(&mut entries, entry, self.cap);
        let encoded = serde_json::to_string(&entries)?;
        self.store.set(self.key, &encoded)?;
        Ok(entries.len())
    }

    /// Same as [`append`](Self::append) but a failure is logged and swallowed,
    /// so a full or blocked storage never interrupts the calling flow.
    pub fn append_or_warn<T: Serialize + ?Sized>(&self, entry: &T) -> bool {
        match self.append(entry) {
            Ok(_) => true,
            Err(e) => {
                warn!("Could not append to `{}`: {}", self.key, e);
                false
            }
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{KeyValueStore, StorageError};

    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        reject_writes: Cell<bool>,
    }

    impl MemoryStore {
        pub fn rejecting_writes() -> Self {
            let store = Self::default();
            store.reject_writes.set(true);
            store
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.reject_writes.get() {
                return Err(StorageError::Write(key.to_string()));
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn push_bounded_evicts_oldest_first() {
        let mut entries = VecDeque::new();
        for i in 0..7 {
            push_bounded(&mut entries, i, 3);
        }
        assert_eq!(entries, VecDeque::from(vec![4, 5, 6]));
    }

    #[test]
    fn log_keeps_most_recent_cap_entries_in_order() {
        let store = MemoryStore::default();
        let log = BoundedLog::new(&store, "vr_events", 5);
        for i in 0..12 {
            log.append(&json!({ "n": i })).unwrap();
        }
        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 5);
        let ns: Vec<i64> = entries.iter().map(|e| e["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![7, 8, 9, 10, 11]);
    }

    #[test]
    fn append_reports_length_below_cap() {
        let store = MemoryStore::default();
        let log = BoundedLog::new(&store, "vr_visits", 50);
        assert_eq!(log.append(&json!("a")).unwrap(), 1);
        assert_eq!(log.append(&json!("b")).unwrap(), 2);
    }

    #[test]
    fn unreadable_log_is_replaced() {
        let store = MemoryStore::default();
        store.set("vr_events", "{not json").unwrap();
        let log = BoundedLog::new(&store, "vr_events", 10);
        assert_eq!(log.append(&json!(1)).unwrap(), 1);
        assert_eq!(store.raw("vr_events").as_deref(), Some("[1]"));
    }

    #[test]
    fn write_failure_is_swallowed_by_append_or_warn() {
        let store = MemoryStore::rejecting_writes();
        let log = BoundedLog::new(&store, "vr_bookings", 10);
        assert!(matches!(log.append(&json!(1)), Err(StorageError::Write(_))));
        assert!(!log.append_or_warn(&json!(1)));
    }
}

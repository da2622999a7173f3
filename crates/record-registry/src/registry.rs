//! # Concurrent Record Registry
//!
//! This module defines the `Registry`, the core component that manages a
//! keyed collection of records shared between independent workers.
//!
//! # Architecture Note
//! This struct owns the map and the lock that guards it.
//!
//! **Concurrency Model**:
//! Every operation acquires a single `Mutex` covering the whole map for its
//! full duration. The guard is scoped, so the lock is released on every exit
//! path, including early returns. The API is synchronous end to end, which
//! means the lock is never held across an `await` point and never held while
//! doing blocking I/O.
//!
//! Records live behind `Arc`. The map holds one ownership share; every
//! handle returned from [`Registry::get`] or [`Registry::snapshot`] holds
//! another. Removing an entry drops the map's share only, so a reader that
//! obtained a handle before the removal keeps a valid, read-only view.

use crate::error::RegistryError;
use crate::record::RegistryRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// A thread-safe, in-memory registry of records keyed by string identifier.
///
/// Generic over the stored record type. Use a concrete type
/// (`Registry<Customer>`) for a fully typed store, or
/// `Registry<dyn RegistryRecord>` for a heterogeneous one.
///
/// # Operations
///
/// * **insert**: adds or replaces the entry for an id (last writer wins,
///   replacing is not an error).
/// * **get**: returns a shared handle to the record if present. `None` is a
///   normal negative result.
/// * **remove**: deletes the entry if present and returns the evicted
///   handle. Absent ids are a no-op.
/// * **snapshot**: returns all records present at the moment the lock is
///   held. Each call independently re-reads current state; order is
///   unspecified.
///
/// All operations are individually atomic with respect to each other. The
/// total order of effects on the map equals the order in which operations
/// acquire the lock.
pub struct Registry<T: RegistryRecord + ?Sized> {
    entries: Mutex<HashMap<String, Arc<T>>>,
}

impl<T: RegistryRecord + ?Sized> Registry<T> {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    // Extract just the type name (e.g., "Customer" instead of
    // "crm_sample::model::customer::Customer") for log fields.
    fn record_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("record")
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<T>>>, RegistryError> {
        self.entries.lock().map_err(|_| RegistryError::Poisoned)
    }

    /// Inserts `record` under `id`, replacing any existing entry.
    ///
    /// Replacement follows last-writer-wins semantics and is not an error;
    /// the previous record stays alive for any reader still holding a handle
    /// to it.
    pub fn insert(&self, id: impl Into<String>, record: Arc<T>) -> Result<(), RegistryError> {
        let record_type = Self::record_type();
        let id = id.into();
        let mut entries = self.entries()?;
        let replaced = entries.insert(id.clone(), record).is_some();
        info!(
            record_type,
            %id,
            size = entries.len(),
            replaced,
            thread = ?std::thread::current().id(),
            "Added"
        );
        Ok(())
    }

    /// Removes the entry for `id`, returning the evicted handle if one was
    /// present. Removing an absent id is a no-op, not an error.
    pub fn remove(&self, id: &str) -> Result<Option<Arc<T>>, RegistryError> {
        let record_type = Self::record_type();
        let mut entries = self.entries()?;
        let removed = entries.remove(id);
        if removed.is_some() {
            info!(
                record_type,
                %id,
                size = entries.len(),
                thread = ?std::thread::current().id(),
                "Removed"
            );
        } else {
            debug!(record_type, %id, "Remove on absent id");
        }
        Ok(removed)
    }

    /// Returns a shared handle to the record stored under `id`, or `None`.
    ///
    /// The handle stays valid independently of later registry mutations.
    pub fn get(&self, id: &str) -> Result<Option<Arc<T>>, RegistryError> {
        let record_type = Self::record_type();
        let entries = self.entries()?;
        let record = entries.get(id).cloned();
        let found = record.is_some();
        debug!(record_type, %id, found, "Get");
        Ok(record)
    }

    /// Returns every record present at the moment the lock is held.
    ///
    /// The returned handles form a point-in-time view: mutations after the
    /// call do not affect it, and no consistency is promised across separate
    /// calls. Order is unspecified.
    pub fn snapshot(&self) -> Result<Vec<Arc<T>>, RegistryError> {
        let record_type = Self::record_type();
        let entries = self.entries()?;
        let records: Vec<Arc<T>> = entries.values().cloned().collect();
        debug!(record_type, size = records.len(), "Snapshot");
        Ok(records)
    }

    /// Number of entries currently present.
    pub fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.entries()?.len())
    }

    /// Whether the registry currently holds no entries.
    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.entries()?.is_empty())
    }
}

impl<T: RegistryRecord + ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        text: String,
    }

    impl RegistryRecord for Note {
        fn describe(&self) -> String {
            format!("Note: {}", self.text)
        }
    }

    #[test]
    fn empty_registry_has_no_records() {
        let registry: Registry<Note> = Registry::default();
        assert!(registry.is_empty().unwrap());
        assert!(registry.snapshot().unwrap().is_empty());
        assert!(registry.get("missing").unwrap().is_none());
    }

    #[test]
    fn insert_then_get_returns_the_record() {
        let registry = Registry::new();
        registry
            .insert("n-1", Arc::new(Note { text: "hello".into() }))
            .unwrap();

        let note = registry.get("n-1").unwrap().unwrap();
        assert_eq!(note.describe(), "Note: hello");
    }

    #[test]
    fn remove_returns_the_evicted_handle() {
        let registry = Registry::new();
        registry
            .insert("n-1", Arc::new(Note { text: "hello".into() }))
            .unwrap();

        let removed = registry.remove("n-1").unwrap().unwrap();
        assert_eq!(removed.describe(), "Note: hello");
        assert!(registry.is_empty().unwrap());
    }
}

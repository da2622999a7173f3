//! # CRM System
//!
//! The facade that owns the customer registry and is the one type the demo
//! binary and the integration tests talk to.

use crate::model::Customer;
use record_registry::{Registry, RegistryError};
use std::sync::Arc;

/// The customer-facing surface over a shared [`Registry<Customer>`].
///
/// `CrmSystem` is responsible for:
/// - **Record Construction**: `add_customer` builds the [`Customer`] record
///   from the caller's fields, using the id as `customer_id`
/// - **Registry Access**: every operation delegates to the lock-guarded
///   registry, so calls from parallel workers need no extra synchronization
///
/// All methods take `&self`; share the system between workers behind an
/// `Arc`.
///
/// # Example
///
/// ```rust
/// use crm_sample::crm::CrmSystem;
///
/// let system = CrmSystem::new();
/// system.add_customer("C001", "Alice", 30).unwrap();
///
/// let alice = system.customer("C001").unwrap().unwrap();
/// assert_eq!(alice.name, "Alice");
/// ```
pub struct CrmSystem {
    registry: Registry<Customer>,
}

impl CrmSystem {
    /// Creates a new system with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Registers a customer under `id`, with `customer_id` set to the same
    /// value. An existing entry for `id` is replaced (last writer wins).
    pub fn add_customer(&self, id: &str, name: &str, age: u32) -> Result<(), RegistryError> {
        self.registry.insert(id, Arc::new(Customer::new(id, name, age)))
    }

    /// Removes the customer stored under `id`. Absent ids are a no-op.
    pub fn remove_customer(&self, id: &str) -> Result<(), RegistryError> {
        self.registry.remove(id).map(|_| ())
    }

    /// Looks up a single customer. `None` is a normal negative result;
    /// rendering it is the caller's concern.
    pub fn customer(&self, id: &str) -> Result<Option<Arc<Customer>>, RegistryError> {
        self.registry.get(id)
    }

    /// Point-in-time snapshot of all registered customers, in unspecified
    /// order.
    pub fn customers(&self) -> Result<Vec<Arc<Customer>>, RegistryError> {
        self.registry.snapshot()
    }

    /// Number of customers currently registered.
    pub fn customer_count(&self) -> Result<usize, RegistryError> {
        self.registry.len()
    }

    /// Whether no customers are currently registered.
    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        self.registry.is_empty()
    }
}

impl Default for CrmSystem {
    fn default() -> Self {
        Self::new()
    }
}

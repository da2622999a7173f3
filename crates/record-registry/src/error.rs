//! # Registry Errors
//!
//! This module defines the error type shared by all registry operations.
//! Absent keys are not represented here: lookups and removals on a missing
//! id are normal negative outcomes, returned as `Ok(None)`.

/// Errors that can occur within the registry itself.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A previous operation panicked while holding the registry lock.
    /// Once poisoned, every subsequent operation reports the registry as
    /// unavailable.
    #[error("registry lock poisoned")]
    Poisoned,
}

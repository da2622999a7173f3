//! # Record Registry
//!
//! This crate provides a thread-safe, in-memory registry of records keyed by
//! string identifier. It is built for the simplest faithful concurrency
//! design: one coarse-grained lock around the whole map, with every operation
//! individually atomic with respect to all others.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into two layers:
//!
//! 1. **Record Layer** ([`RegistryRecord`]) - Your domain types and their
//!    display capability
//! 2. **Storage Layer** ([`Registry`]) - The lock-guarded keyed store
//!
//! You implement the record trait once per domain type, and the registry
//! handles all locking, shared ownership, and diagnostics.
//!
//! ## Core Abstractions
//!
//! ### [`RegistryRecord`] - The Record Contract
//!
//! Define what a stored record can do (produce a human-readable summary):
//!
//! ```rust
//! use record_registry::{Registry, RegistryRecord};
//! use std::sync::Arc;
//!
//! struct Device {
//!     serial: String,
//! }
//!
//! impl RegistryRecord for Device {
//!     fn describe(&self) -> String {
//!         format!("Device {}", self.serial)
//!     }
//! }
//!
//! let registry = Registry::new();
//! registry
//!     .insert("dev-1", Arc::new(Device { serial: "dev-1".into() }))
//!     .unwrap();
//!
//! let device = registry.get("dev-1").unwrap().unwrap();
//! assert_eq!(device.describe(), "Device dev-1");
//! ```
//!
//! The trait is object-safe, so `Registry<dyn RegistryRecord>` stores mixed
//! record kinds behind one key space.
//!
//! ## Concurrency Model
//!
//! - One `std::sync::Mutex` guards the entire map (coarse-grained, not
//!   per-entry)
//! - Each operation holds the lock for its full duration and releases it on
//!   every exit path (scoped guard)
//! - The API is fully synchronous, so the lock is never held across an
//!   `await` point
//! - Records are handed out as `Arc` handles; a handle obtained from
//!   [`Registry::get`] or [`Registry::snapshot`] stays valid even if the
//!   entry is concurrently removed
//!
//! The effect order on the map equals the order in which operations acquire
//! the lock. Two racing writers on the same id resolve to whichever acquires
//! the lock last; that is the only ordering promise made.
//!
//! ## Error Handling
//!
//! Absent keys are normal outcomes (`Ok(None)`), never errors. The only
//! failure the registry reports is [`RegistryError::Poisoned`]: a prior
//! operation panicked while holding the lock, and the registry is treated as
//! unavailable from then on.
//!
//! ## Observability
//!
//! Mutations emit `info!` events and reads emit `debug!` events through the
//! `tracing` crate, each carrying the record type, the id, the resulting map
//! size, and the executing thread. Binaries can call
//! [`setup_tracing`](crate::tracing::setup_tracing) once at startup and
//! control verbosity via `RUST_LOG`.

pub mod error;
pub mod record;
pub mod registry;
pub mod tracing;

// Re-export core types for convenience
pub use error::RegistryError;
pub use record::RegistryRecord;
pub use registry::Registry;

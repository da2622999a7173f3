//! # CRM Sample
//!
//! Demo application for the `record-registry` crate. It models a minimal
//! customer registry accessed by concurrent workers.
//!
//! - **[model]**: Pure data records ([`Person`](model::Person),
//!   [`Customer`](model::Customer)) implementing the
//!   [`RegistryRecord`](record_registry::RegistryRecord) capability.
//! - **[crm]**: The [`CrmSystem`](crm::CrmSystem) facade that owns the
//!   shared registry and exposes the add/remove/lookup/list operations.
//!
//! The binary entry point in `main.rs` drives a fixed workload of parallel
//! add and remove workers; this library exposes the modules for integration
//! testing.

pub mod crm;
pub mod model;

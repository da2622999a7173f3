//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by binaries and demos.
//!
//! The registry itself only emits events; it never installs a subscriber.
//! Call [`setup_tracing`] once at startup and control verbosity via the
//! `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show reads and snapshots too
//! RUST_LOG=debug cargo run
//! ```
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! the registry's `record_type` field carries that information instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - record_type carries the context
        .compact()
        .init();
}

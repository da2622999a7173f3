//! # CRM Demo
//!
//! Drives a fixed workload against a shared [`CrmSystem`]: three workers run
//! in parallel, two registering customers and one removing, then the final
//! registry contents are reported.
//!
//! Run with `RUST_LOG=info cargo run` (or `debug` to see lookups and
//! snapshots too).

use crm_sample::crm::CrmSystem;
use record_registry::tracing::setup_tracing;
use record_registry::RegistryRecord;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Instrument};

/// Simulated worker: register a customer, then spend some time on follow-up
/// work before finishing.
async fn add_customer_task(
    system: Arc<CrmSystem>,
    id: &str,
    name: &str,
    age: u32,
) -> Result<(), String> {
    system.add_customer(id, name, age).map_err(|e| e.to_string())?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}

/// Simulated worker: remove a customer, then spend some time on follow-up
/// work before finishing.
async fn remove_customer_task(system: Arc<CrmSystem>, id: &str) -> Result<(), String> {
    system.remove_customer(id).map_err(|e| e.to_string())?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting CRM demo");

    let system = Arc::new(CrmSystem::new());

    // Three workers race on the shared registry; the lock serializes them.
    let workers = vec![
        tokio::spawn(
            add_customer_task(system.clone(), "C001", "Alice", 30)
                .instrument(tracing::info_span!("worker", id = 1)),
        ),
        tokio::spawn(
            add_customer_task(system.clone(), "C002", "Bob", 25)
                .instrument(tracing::info_span!("worker", id = 2)),
        ),
        tokio::spawn(
            remove_customer_task(system.clone(), "C001")
                .instrument(tracing::info_span!("worker", id = 3)),
        ),
    ];

    for worker in workers {
        worker.await.map_err(|e| e.to_string())??;
    }

    // Single-record lookup; whether C001 survived depends on which worker
    // acquired the lock last.
    match system.customer("C001").map_err(|e| e.to_string())? {
        Some(customer) => info!(details = %customer.describe(), "Lookup C001"),
        None => info!("Customer C001 not found"),
    }

    info!("Final list of customers");
    for customer in system.customers().map_err(|e| e.to_string())? {
        info!(details = %customer.describe(), "Customer");
    }

    info!("Demo completed");
    Ok(())
}

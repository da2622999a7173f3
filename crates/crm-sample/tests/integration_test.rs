use crm_sample::crm::CrmSystem;
use crm_sample::model::{Customer, Person};
use record_registry::{Registry, RegistryRecord};
use std::sync::Arc;

#[test]
fn test_add_then_lookup_returns_matching_fields() {
    let system = CrmSystem::new();
    system.add_customer("C010", "Carol", 41).unwrap();

    let customer = system.customer("C010").unwrap().expect("customer not found");
    assert_eq!(customer.customer_id, "C010");
    assert_eq!(customer.name, "Carol");
    assert_eq!(customer.age, 41);
}

#[test]
fn test_remove_absent_id_is_a_noop() {
    let system = CrmSystem::new();
    system.add_customer("C001", "Alice", 30).unwrap();

    system.remove_customer("C999").unwrap();

    assert_eq!(system.customer_count().unwrap(), 1);
    assert!(system.customer("C001").unwrap().is_some());
}

#[test]
fn test_listing_counts() {
    let system = CrmSystem::new();
    assert!(system.customers().unwrap().is_empty());

    for i in 0..5u32 {
        system
            .add_customer(&format!("C{i:03}"), "Customer", 20 + i)
            .unwrap();
    }

    assert_eq!(system.customers().unwrap().len(), 5);
}

#[test]
fn test_adding_an_existing_id_replaces_the_record() {
    let system = CrmSystem::new();
    system.add_customer("C001", "Alice", 30).unwrap();
    system.add_customer("C001", "Alicia", 31).unwrap();

    assert_eq!(system.customer_count().unwrap(), 1);
    let customer = system.customer("C001").unwrap().unwrap();
    assert_eq!(customer.name, "Alicia");
    assert_eq!(customer.age, 31);
}

/// The fixed demo workload, issued sequentially: after adding Alice and Bob
/// and removing Alice, exactly Bob remains.
#[test]
fn test_demo_scenario() {
    let system = CrmSystem::new();
    system.add_customer("C001", "Alice", 30).unwrap();
    system.add_customer("C002", "Bob", 25).unwrap();
    system.remove_customer("C001").unwrap();

    let remaining = system.customers().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining[0].describe(),
        "Customer ID: C002, Name: Bob, Age: 25"
    );
    assert!(system.customer("C001").unwrap().is_none());
}

#[test]
fn test_handle_outlives_removal() {
    let system = CrmSystem::new();
    system.add_customer("C001", "Alice", 30).unwrap();

    let handle = system.customer("C001").unwrap().unwrap();
    system.remove_customer("C001").unwrap();

    assert!(system.customer("C001").unwrap().is_none());
    // The reader keeps its share of the record after the registry entry
    // is gone.
    assert_eq!(handle.name, "Alice");
    assert_eq!(handle.age, 30);
}

/// Both record kinds share one heterogeneous registry and produce different
/// summaries for the same underlying person data.
#[test]
fn test_mixed_record_kinds() {
    let registry: Registry<dyn RegistryRecord> = Registry::new();
    registry
        .insert("p-1", Arc::new(Person::new("Dana", 52)))
        .unwrap();
    registry
        .insert("C003", Arc::new(Customer::new("C003", "Eve", 28)))
        .unwrap();

    let person = registry.get("p-1").unwrap().unwrap();
    assert_eq!(person.describe(), "Name: Dana, Age: 52");

    let customer = registry.get("C003").unwrap().unwrap();
    assert_eq!(customer.describe(), "Customer ID: C003, Name: Eve, Age: 28");
}

/// K concurrent adds with distinct ids followed by K concurrent removes on
/// the same ids must leave the registry empty.
#[tokio::test]
async fn test_concurrent_add_remove() {
    let system = Arc::new(CrmSystem::new());

    let mut workers = vec![];
    for i in 0..16u32 {
        let system = system.clone();
        workers.push(tokio::spawn(async move {
            system.add_customer(&format!("C{i:03}"), "Customer", 20 + i)
        }));
    }
    for worker in workers {
        worker.await.unwrap().unwrap();
    }
    assert_eq!(system.customer_count().unwrap(), 16);

    let mut workers = vec![];
    for i in 0..16u32 {
        let system = system.clone();
        workers.push(tokio::spawn(
            async move { system.remove_customer(&format!("C{i:03}")) },
        ));
    }
    for worker in workers {
        worker.await.unwrap().unwrap();
    }
    assert!(system.is_empty().unwrap());
}

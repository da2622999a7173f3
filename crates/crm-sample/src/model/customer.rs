use record_registry::RegistryRecord;
use serde::{Deserialize, Serialize};

/// A registered customer.
///
/// # Record Registry
/// This struct implements the
/// [`RegistryRecord`](record_registry::RegistryRecord) capability, allowing
/// it to be stored in a [`Registry`](record_registry::Registry).
///
/// Specialized record kind: unlike [`Person`](crate::model::Person), its
/// summary includes the customer identifier. By convention `customer_id`
/// equals the registry key the record is stored under; the registry does not
/// enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub age: u32,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `customer_id` - Identifier the customer is registered under
    /// * `name` - Customer's display name
    /// * `age` - Customer's age in years
    pub fn new(customer_id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            age,
        }
    }
}

impl RegistryRecord for Customer {
    fn describe(&self) -> String {
        format!(
            "Customer ID: {}, Name: {}, Age: {}",
            self.customer_id, self.name, self.age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_includes_the_customer_id() {
        let customer = Customer::new("C001", "Alice", 30);
        assert_eq!(customer.describe(), "Customer ID: C001, Name: Alice, Age: 30");
    }
}

use record_registry::RegistryRecord;
use serde::{Deserialize, Serialize};

/// A person with no customer role attached.
///
/// Base record kind: its summary carries name and age only. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl RegistryRecord for Person {
    fn describe(&self) -> String {
        format!("Name: {}, Age: {}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_omits_any_identifier() {
        let person = Person::new("Dana", 52);
        assert_eq!(person.describe(), "Name: Dana, Age: 52");
    }
}

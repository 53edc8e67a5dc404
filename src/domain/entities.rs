//! Domain entities: countries own people, people own animals

use serde::{Deserialize, Serialize};

/// An animal, identified only by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
}

/// A person and the animals they own, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub animals: Vec<Animal>,
}

/// A country and its people, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub people: Vec<Person>,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Case-sensitive substring match; the empty pattern matches every name.
    pub fn matches(&self, pattern: &str) -> bool {
        self.name.contains(pattern)
    }
}

impl Person {
    pub fn new(name: impl Into<String>, animals: Vec<Animal>) -> Self {
        Self {
            name: name.into(),
            animals,
        }
    }
}

impl Country {
    pub fn new(name: impl Into<String>, people: Vec<Person>) -> Self {
        Self {
            name: name.into(),
            people,
        }
    }
}

/// Append the survivor count to a name: `"name [count]"`.
pub fn annotated_name(name: &str, count: usize) -> String {
    format!("{} [{}]", name, count)
}

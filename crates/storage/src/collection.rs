//! Named collection
//!
//! A collection is a dictionary plus an identifying name: the unit of
//! namespacing inside the store. Keys in one collection are invisible to
//! lookups in another even when names collide.

use coffer_core::{Dictionary, Value};
use serde::{Deserialize, Serialize};

/// A named, independent namespace of keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    name: String,
    data: Dictionary,
}

impl Collection {
    /// Create an empty collection named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Dictionary::new(),
        }
    }

    /// The collection's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The backing dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.data
    }

    /// Mutable access to the backing dictionary.
    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.data
    }

    /// Insert or replace the value under `key`; returns the displaced
    /// value if the key existed.
    pub fn upsert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.data.upsert(key, value)
    }

    /// Read-only view of the value under `key`, if present.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.data.lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collection_is_empty() {
        let c = Collection::new("employees");
        assert_eq!(c.name(), "employees");
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
    }

    #[test]
    fn test_upsert_and_lookup() {
        let mut c = Collection::new("employees");
        assert_eq!(c.upsert("employee1_age", Value::Int(30)), None);
        assert_eq!(c.lookup("employee1_age"), Some(&Value::Int(30)));
        assert_eq!(c.lookup("employee2_age"), None);

        let old = c.upsert("employee1_age", Value::Int(31));
        assert_eq!(old, Some(Value::Int(30)));
        assert_eq!(c.len(), 1);
    }
}

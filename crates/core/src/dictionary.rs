//! Ordered dictionary
//!
//! An ordered mapping from string key to [`Value`], used both as the body
//! of a storage collection and as the payload of a nested Map value.
//!
//! # Design
//!
//! - Entries live in a `Vec` and lookups are a linear scan. That is
//!   intentional: insertion order is the iteration and display order, and
//!   at this scale an index would buy nothing.
//! - Keys are unique under case-sensitive exact match. `upsert` replaces in
//!   place without moving the entry, so display order is stable across
//!   type-changing updates.
//! - Every stored Value is owned exclusively by its entry. Replacing or
//!   removing an entry drops the old payload recursively.

use crate::value::Value;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One key-value entry.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: String,
    value: Value,
}

/// Ordered key -> Value mapping with unique keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace the value under `key`.
    ///
    /// If the key exists its value is replaced in place and the old value
    /// is returned; the entry keeps its position in iteration order. If the
    /// key is new the entry is appended at the end. Any type transition is
    /// legal (Int -> Text -> Map on the same key); the displaced payload,
    /// nested maps included, is dropped.
    pub fn upsert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        for entry in &mut self.entries {
            if entry.key == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
        }
        self.entries.push(Entry { key, value });
        None
    }

    /// Read-only view of the value under `key`, if present.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Mutable view of the value under `key`, if present.
    ///
    /// Lets callers mutate a nested Map in place without re-inserting the
    /// whole subtree.
    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Remove the entry under `key`, returning its value if it existed.
    ///
    /// Later entries shift up; their relative order is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|entry| entry.key == key)?;
        Some(self.entries.remove(pos).value)
    }

    /// True if `key` has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }
}

impl FromIterator<(String, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl Extend<(String, Value)> for Dictionary {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", entry.key, entry.value)?;
        }
        f.write_str("}")
    }
}

// Serialize as a JSON-style map so nested values read naturally. Entry
// order carries through because serde maps emit in iteration order.
impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DictVisitor;

        impl<'de> Visitor<'de> for DictVisitor {
            type Value = Dictionary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string keys to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dictionary, A::Error> {
                let mut dict = Dictionary::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    dict.upsert(key, value);
                }
                Ok(dict)
            }
        }

        deserializer.deserialize_map(DictVisitor)
    }
}

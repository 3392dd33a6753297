//! Top-level store
//!
//! An ordered sequence of collections keyed by unique name. Collections
//! are append-only: once created they live as long as the store. The
//! store exclusively owns its collections, each collection its
//! dictionary, each dictionary its values; dropping the store releases
//! the whole tree.
//!
//! Name resolution is a linear scan, matching the dictionary layer. The
//! store is constructor-created, never ambient global state, so tests can
//! run as many independent stores as they like.

use crate::collection::Collection;
use coffer_core::{CofferError, Result, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The top-level container owning all collections for one session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Store {
    collections: Vec<Collection>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            collections: Vec::new(),
        }
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// True if the store holds no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// True if a collection named `name` exists.
    pub fn contains_collection(&self, name: &str) -> bool {
        self.collections.iter().any(|c| c.name() == name)
    }

    /// Collection names in creation order.
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(Collection::name)
    }

    /// Iterate collections in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    /// Append a new empty collection named `name`.
    ///
    /// Duplicate names are rejected rather than silently appended, so a
    /// name always resolves to exactly one collection.
    pub fn add_collection(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.contains_collection(&name) {
            return Err(CofferError::CollectionAlreadyExists { collection: name });
        }
        debug!(collection = %name, "creating collection");
        self.collections.push(Collection::new(name));
        Ok(())
    }

    /// Resolve a collection by name.
    pub fn collection(&self, name: &str) -> Result<&Collection> {
        self.collections
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| CofferError::CollectionNotFound {
                collection: name.to_string(),
            })
    }

    /// Resolve a collection by name, mutably.
    pub fn collection_mut(&mut self, name: &str) -> Result<&mut Collection> {
        self.collections
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| CofferError::CollectionNotFound {
                collection: name.to_string(),
            })
    }

    /// Insert or replace `key` in the named collection.
    ///
    /// Returns the displaced value if the key existed. Fails with
    /// `CollectionNotFound` before touching anything, so a failing set
    /// never partially mutates the store.
    pub fn set(&mut self, collection: &str, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        let target = self.collection_mut(collection)?;
        let key = key.into();
        trace!(collection, key = %key, value_type = value.type_name(), "set");
        Ok(target.upsert(key, value))
    }

    /// Look up `key` in the named collection.
    pub fn get(&self, collection: &str, key: &str) -> Result<&Value> {
        let target = self.collection(collection)?;
        trace!(collection, key, "get");
        target.lookup(key).ok_or_else(|| CofferError::KeyNotFound {
            collection: collection.to_string(),
            key: key.to_string(),
        })
    }
}

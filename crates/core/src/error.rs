//! Error taxonomy for Coffer
//!
//! Every failure surfaced by the storage and executor layers maps to one of
//! these kinds. None of them is fatal: the query engine recovers every
//! variant at its boundary and renders a single diagnostic line.
//!
//! A filter that does not match is deliberately NOT an error; the executor
//! models it as a negative outcome instead.

use thiserror::Error;

/// Result alias used across all Coffer crates.
pub type Result<T> = std::result::Result<T, CofferError>;

/// All error kinds produced by Coffer operations.
///
/// The `#[error]` messages double as the user-visible diagnostic lines for
/// the variants the query surface reports directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CofferError {
    /// Referenced collection name has no collection in the store.
    #[error("Collection {collection} not found")]
    CollectionNotFound {
        /// Name that failed to resolve.
        collection: String,
    },

    /// Duplicate collection creation attempt.
    #[error("Collection {collection} already exists")]
    CollectionAlreadyExists {
        /// Name that was already taken.
        collection: String,
    },

    /// Referenced key is absent from the resolved collection.
    #[error("Key not found in collection {collection}")]
    KeyNotFound {
        /// Collection that was searched.
        collection: String,
        /// Key that was missing.
        key: String,
    },

    /// A SET payload did not convert to its declared type.
    #[error("Invalid value for {expected}: {payload}")]
    InvalidValue {
        /// Declared type keyword (INT, DOUBLE, STRING).
        expected: String,
        /// The payload that failed to parse.
        payload: String,
    },

    /// Command keyword or token count did not match any request shape.
    #[error("Invalid query")]
    InvalidQuery,
}

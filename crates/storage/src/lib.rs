//! Storage layer for Coffer
//!
//! Owns the top-level [`Store`]: an ordered sequence of named
//! [`Collection`]s, each wrapping one dictionary. The store is plain
//! single-owner mutable state; callers hold it directly and tear it down
//! by dropping it.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod collection;
pub mod store;

// Re-exports
pub use collection::Collection;
pub use store::Store;

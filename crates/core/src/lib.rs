//! Core types for Coffer
//!
//! This crate defines the value model shared by every layer:
//! - Value: discriminated sum of Int, Double, Text, Map payloads
//! - Dictionary: ordered key -> Value mapping with unique keys
//! - CofferError: the error taxonomy surfaced by storage and query layers
//!
//! The Dictionary doubles as the payload of a nested Map value and as the
//! body of a storage collection, so it lives here rather than in the
//! storage crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod dictionary;
pub mod error;
pub mod value;

// Re-exports
pub use dictionary::Dictionary;
pub use error::{CofferError, Result};
pub use value::Value;

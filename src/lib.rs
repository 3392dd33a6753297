//! CofferDB - typed hierarchical in-memory key-value store
//!
//! An in-process store organized into named collections of typed values,
//! with a minimal text-query surface (SET, GET, single-predicate FILTER).
//!
//! # Example
//!
//! ```
//! use cofferdb::{QueryEngine, Value};
//!
//! let mut engine = QueryEngine::new();
//! engine.store_mut().add_collection("employees").unwrap();
//!
//! engine.execute("SET employees employee1_name STRING John Doe");
//! let line = engine.execute("GET employees employee1_name");
//! assert_eq!(line, "employee1_name: John Doe");
//!
//! // The store is also a direct API; the query surface is optional.
//! let age = Value::Int(30);
//! engine.store_mut().set("employees", "employee1_age", age).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;

pub use types::*;

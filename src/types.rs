//! Public types for the Coffer unified API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Core value model
pub use coffer_core::Dictionary;
pub use coffer_core::Value;

// Errors
pub use coffer_core::{CofferError, Result};

// Storage
pub use coffer_storage::Collection;
pub use coffer_storage::Store;

// Query surface
pub use coffer_executor::{parse, Outcome, QueryEngine, Request};

//! Query execution layer for Coffer
//!
//! The [`QueryEngine`] owns a [`Store`] and drives one request at a time:
//! parse the line, dispatch to the store, fold the result into an
//! [`Outcome`]. Every error is recovered here and rendered as a single
//! diagnostic line; a request either fully applies or leaves the store
//! untouched.
//!
//! The engine never reads input streams or writes to a terminal. The
//! caller is both request source and result sink: it hands in one line
//! and receives one line back.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod outcome;
pub mod request;

// Re-exports
pub use outcome::Outcome;
pub use request::{parse, Request};

use coffer_core::Value;
use coffer_storage::Store;
use tracing::{debug, warn};

/// Evaluates query lines against an owned store.
///
/// Holds no state across requests beyond the store itself.
#[derive(Debug, Default)]
pub struct QueryEngine {
    store: Store,
}

impl QueryEngine {
    /// Create an engine over an empty store.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Create an engine over an existing store.
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable access to the underlying store, for setup outside the
    /// query surface (collection creation has no query command).
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Consume the engine, returning its store.
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Execute one request line and return the single output line.
    pub fn execute(&mut self, line: &str) -> String {
        self.run(line).to_string()
    }

    /// Execute one request line as a structured [`Outcome`].
    pub fn run(&mut self, line: &str) -> Outcome {
        let request = match request::parse(line) {
            Ok(request) => request,
            Err(err) => {
                warn!(%err, line, "rejected request");
                return Outcome::Failed(err);
            }
        };

        match request {
            Request::Set {
                collection,
                key,
                value,
            } => match self.store.set(&collection, key, value) {
                Ok(_) => Outcome::Accepted,
                Err(err) => Outcome::Failed(err),
            },
            Request::Get { collection, key } => match self.store.get(&collection, &key) {
                Ok(value) => Outcome::Found {
                    rendered: value.to_string(),
                    key,
                },
                Err(err) => Outcome::Failed(err),
            },
            Request::Filter {
                collection,
                key,
                filter,
            } => match self.store.get(&collection, &key) {
                Ok(value) if matches_filter(value, &filter) => Outcome::Found {
                    rendered: value.to_string(),
                    key,
                },
                Ok(_) => {
                    debug!(%collection, %key, %filter, "filter predicate not met");
                    Outcome::FilterNotMet { collection, key }
                }
                Err(err) => Outcome::Failed(err),
            },
        }
    }
}

/// Equality predicate for FILTER, dispatched strictly by the retrieved
/// value's tag.
///
/// Text compares by exact string equality; Int and Double compare against
/// the decimal parse of the filter operand, so an Int or Double of zero
/// is an ordinary comparable value. A filter operand that does not parse
/// as the target numeric type cannot be equal to it. Map values never
/// match.
fn matches_filter(value: &Value, filter: &str) -> bool {
    match value {
        Value::Text(s) => s == filter,
        Value::Int(n) => filter.parse::<i64>().map_or(false, |f| *n == f),
        Value::Double(x) => filter.parse::<f64>().map_or(false, |f| *x == f),
        Value::Map(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(collections: &[&str]) -> QueryEngine {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let mut engine = QueryEngine::new();
        for name in collections {
            engine.store_mut().add_collection(*name).unwrap();
        }
        engine
    }

    #[test]
    fn test_set_then_get_round_trips_multi_word_string() {
        let mut engine = engine_with(&["employees"]);

        assert_eq!(
            engine.execute("SET employees employee1_name STRING John Doe"),
            "OK"
        );
        assert_eq!(
            engine.execute("GET employees employee1_name"),
            "employee1_name: John Doe"
        );
    }

    #[test]
    fn test_filter_int_match_and_miss() {
        let mut engine = engine_with(&["employees"]);
        engine.execute("SET employees employee1_age INT 30");

        assert_eq!(
            engine.execute("FILTER employees employee1_age = 30"),
            "employee1_age: 30"
        );
        assert_eq!(
            engine.execute("FILTER employees employee1_age = 31"),
            "Filter condition not met for employee1_age in collection employees"
        );
    }

    #[test]
    fn test_filter_zero_is_a_comparable_value() {
        // Zero dispatches by tag like any other number.
        let mut engine = engine_with(&["c"]);
        engine.execute("SET c count INT 0");

        assert_eq!(engine.execute("FILTER c count = 0"), "count: 0");
        assert_eq!(
            engine.execute("FILTER c count = 1"),
            "Filter condition not met for count in collection c"
        );
    }

    #[test]
    fn test_filter_double_match() {
        let mut engine = engine_with(&["employees"]);
        engine.execute("SET employees employee1_salary DOUBLE 50000.00");

        assert_eq!(
            engine.execute("FILTER employees employee1_salary = 50000.00"),
            "employee1_salary: 50000"
        );
    }

    #[test]
    fn test_filter_operand_unparsable_as_target_type_never_matches() {
        let mut engine = engine_with(&["c"]);
        engine.execute("SET c age INT 30");

        assert_eq!(
            engine.execute("FILTER c age = thirty"),
            "Filter condition not met for age in collection c"
        );
    }

    #[test]
    fn test_filter_text_compares_exactly() {
        let mut engine = engine_with(&["c"]);
        engine.execute("SET c name STRING Jane");

        assert_eq!(engine.execute("FILTER c name = Jane"), "name: Jane");
        assert_eq!(
            engine.execute("FILTER c name = jane"),
            "Filter condition not met for name in collection c"
        );
    }

    #[test]
    fn test_missing_collection_diagnostic() {
        let mut engine = engine_with(&[]);
        assert_eq!(
            engine.execute("GET missing k"),
            "Collection missing not found"
        );
        assert_eq!(
            engine.execute("SET missing k INT 1"),
            "Collection missing not found"
        );
    }

    #[test]
    fn test_missing_key_diagnostic() {
        let mut engine = engine_with(&["c"]);
        engine.execute("SET c k2 INT 1");

        assert_eq!(
            engine.execute("GET c other"),
            "Key not found in collection c"
        );
    }

    #[test]
    fn test_invalid_query_never_touches_store() {
        let mut engine = engine_with(&["c"]);

        assert_eq!(engine.execute("PUT c k INT 1"), "Invalid query");
        assert_eq!(engine.execute("SET c k"), "Invalid query");
        assert!(engine.store().collection("c").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_value_aborts_before_mutation() {
        let mut engine = engine_with(&["c"]);

        assert_eq!(
            engine.execute("SET c k INT thirty"),
            "Invalid value for INT: thirty"
        );
        assert!(engine.store().collection("c").unwrap().is_empty());
    }

    #[test]
    fn test_matches_filter_map_never_matches() {
        let value = Value::Map(coffer_core::Dictionary::new());
        assert!(!matches_filter(&value, "{}"));
        assert!(!matches_filter(&value, ""));
    }

    #[test]
    fn test_run_returns_structured_outcome() {
        let mut engine = engine_with(&["c"]);
        engine.execute("SET c k INT 7");

        let outcome = engine.run("GET c k");
        assert_eq!(
            outcome,
            Outcome::Found {
                key: "k".to_string(),
                rendered: "7".to_string(),
            }
        );
        assert!(outcome.is_success());
    }
}

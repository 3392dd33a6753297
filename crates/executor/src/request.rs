//! Request parsing
//!
//! Turns one query line into a typed [`Request`] by strict whitespace
//! tokenization. The grammar has exactly three shapes:
//!
//! ```text
//! SET    <collection> <key> <INT|DOUBLE|STRING> <value...>
//! GET    <collection> <key>
//! FILTER <collection> <key> = <value>
//! ```
//!
//! Keywords are case-sensitive. SET re-joins every token after the type
//! slot with single spaces, so multi-word STRING payloads like
//! `John Doe` round-trip; the re-joined remainder is then converted per
//! the declared type. Anything else is rejected before any store access.

use coffer_core::{CofferError, Result, Value};

/// One parsed query, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Insert or replace a key in a collection.
    Set {
        /// Target collection name.
        collection: String,
        /// Key to write.
        key: String,
        /// Converted payload.
        value: Value,
    },
    /// Point lookup.
    Get {
        /// Target collection name.
        collection: String,
        /// Key to read.
        key: String,
    },
    /// Point lookup plus a single equality predicate.
    Filter {
        /// Target collection name.
        collection: String,
        /// Key to read.
        key: String,
        /// Raw filter operand, compared per the retrieved value's tag.
        filter: String,
    },
}

/// Parse one request line.
///
/// Returns `InvalidQuery` for an unrecognized command keyword or token
/// count, and `InvalidValue` when a SET payload does not convert to its
/// declared type. Neither leaves any trace in the store.
pub fn parse(line: &str) -> Result<Request> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["SET", collection, key, type_keyword, payload @ ..] if !payload.is_empty() => {
            let value = convert_payload(type_keyword, &payload.join(" "))?;
            Ok(Request::Set {
                collection: collection.to_string(),
                key: key.to_string(),
                value,
            })
        }
        ["GET", collection, key] => Ok(Request::Get {
            collection: collection.to_string(),
            key: key.to_string(),
        }),
        ["FILTER", collection, key, "=", filter] => Ok(Request::Filter {
            collection: collection.to_string(),
            key: key.to_string(),
            filter: filter.to_string(),
        }),
        _ => Err(CofferError::InvalidQuery),
    }
}

/// Convert a SET payload per its declared type keyword.
fn convert_payload(type_keyword: &str, payload: &str) -> Result<Value> {
    let invalid = || CofferError::InvalidValue {
        expected: type_keyword.to_string(),
        payload: payload.to_string(),
    };

    match type_keyword {
        "INT" => payload
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| invalid()),
        "DOUBLE" => payload
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| invalid()),
        "STRING" => Ok(Value::Text(payload.to_string())),
        _ => Err(invalid()),
    }
}

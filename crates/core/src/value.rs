//! Typed value model
//!
//! Value is the atomic unit stored everywhere: an explicit discriminated
//! sum with one payload per tag. The enum representation makes it
//! impossible to observe a payload under the wrong tag.
//!
//! # Design
//!
//! - Map payloads own their Dictionary outright; dropping a Value tears
//!   down nested maps recursively, exactly once per node.
//! - Serde uses the untagged representation so nested values serialize to
//!   natural JSON (`30`, `50000.0`, `"John Doe"`, `{...}`).

use crate::dictionary::Dictionary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value: integer, float, text, or nested map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Double(f64),
    /// Owned text.
    Text(String),
    /// Nested dictionary, arbitrarily deep.
    Map(Dictionary),
}

impl Value {
    /// Name of this value's tag, matching the query-surface type keywords.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INT",
            Value::Double(_) => "DOUBLE",
            Value::Text(_) => "STRING",
            Value::Map(_) => "DICTIONARY",
        }
    }

    /// Integer payload, if this is an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Float payload, if this is a Double.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Text payload, if this is a Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Dictionary payload, if this is a Map.
    pub fn as_map(&self) -> Option<&Dictionary> {
        match self {
            Value::Map(d) => Some(d),
            _ => None,
        }
    }

    /// Mutable dictionary payload, if this is a Map.
    pub fn as_map_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Value::Map(d) => Some(d),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Map(d)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
            Value::Map(d) => write!(f, "{}", d),
        }
    }
}

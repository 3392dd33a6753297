//! Query outcomes
//!
//! Every request produces exactly one [`Outcome`], and every outcome
//! renders as exactly one output line. A filter miss is a defined
//! negative result, not an error, so it gets its own variant rather than
//! an error kind.

use coffer_core::CofferError;
use std::fmt;

/// The result of executing one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A SET fully applied.
    Accepted,
    /// A GET or matching FILTER found a value; `rendered` is its display
    /// form.
    Found {
        /// Key that was read.
        key: String,
        /// Rendered value text.
        rendered: String,
    },
    /// A FILTER resolved the key but the predicate did not hold.
    FilterNotMet {
        /// Collection that was searched.
        collection: String,
        /// Key whose value failed the predicate.
        key: String,
    },
    /// The request failed; the error's message is the diagnostic line.
    Failed(CofferError),
}

impl Outcome {
    /// True for Accepted and Found.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Accepted | Outcome::Found { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted => f.write_str("OK"),
            Outcome::Found { key, rendered } => write!(f, "{}: {}", key, rendered),
            Outcome::FilterNotMet { collection, key } => write!(
                f,
                "Filter condition not met for {} in collection {}",
                key, collection
            ),
            Outcome::Failed(err) => write!(f, "{}", err),
        }
    }
}

impl From<CofferError> for Outcome {
    fn from(err: CofferError) -> Self {
        Outcome::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_found() {
        let outcome = Outcome::Found {
            key: "employee1_name".to_string(),
            rendered: "John Doe".to_string(),
        };
        assert_eq!(outcome.to_string(), "employee1_name: John Doe");
        assert!(outcome.is_success());
    }

    #[test]
    fn test_render_filter_not_met() {
        let outcome = Outcome::FilterNotMet {
            collection: "employees".to_string(),
            key: "employee1_age".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "Filter condition not met for employee1_age in collection employees"
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_render_failed_uses_error_message() {
        let outcome = Outcome::from(CofferError::CollectionNotFound {
            collection: "missing".to_string(),
        });
        assert_eq!(outcome.to_string(), "Collection missing not found");
    }
}

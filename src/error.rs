//! Load-time validation errors.
//!
//! The only failure mode in this crate is a malformed raw index: duplicate
//! locations or missing required fields. Tokenization, search, and snippet
//! extraction are total functions and degrade to empty output instead of
//! erroring.

use std::fmt;

/// Why a raw entry sequence was rejected at load time.
///
/// Construction never proceeds with a partially valid index: the first
/// violation aborts the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedIndex {
    /// Two entries share the same `location`.
    DuplicateLocation {
        location: String,
        /// Position of the first occurrence in the raw sequence.
        first: usize,
        /// Position of the duplicate.
        second: usize,
    },
    /// A required field (`location`, `page`, `title`, `category`) is absent.
    MissingField { entry: usize, field: &'static str },
    /// The raw payload could not be parsed at all.
    Parse { detail: String },
}

impl fmt::Display for MalformedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedIndex::DuplicateLocation {
                location,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate location '{}' at entries {} and {}",
                    location, first, second
                )
            }
            MalformedIndex::MissingField { entry, field } => {
                write!(f, "entry {} is missing required field '{}'", entry, field)
            }
            MalformedIndex::Parse { detail } => {
                write!(f, "unparseable index payload: {}", detail)
            }
        }
    }
}

impl std::error::Error for MalformedIndex {}

impl From<serde_json::Error> for MalformedIndex {
    fn from(err: serde_json::Error) -> Self {
        MalformedIndex::Parse {
            detail: err.to_string(),
        }
    }
}

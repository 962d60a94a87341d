//! Error types for the URL query codec
//!
//! Scalar parameters that fail to convert are reported rather than coerced
//! to defaults; the caller decides whether to fall back. Criterion entries
//! carry their position in the `c` list.

use crate::criteria::CriterionError;
use thiserror::Error;

/// Query-codec errors
#[derive(Debug, Error)]
pub enum QueryError {
    /// `disp` is not an integer
    #[error("Invalid display mode '{0}': expected an integer ordinal")]
    InvalidDisplayMode(String),

    /// `disp` is an integer but names no display mode
    #[error("Display mode ordinal {0} is out of range")]
    DisplayModeOutOfRange(i64),

    /// `p` is not a positive integer
    #[error("Invalid page '{0}': expected an integer of at least 1")]
    InvalidPage(String),

    /// A `c` entry could not be decoded
    #[error("Criterion #{index} could not be decoded: {source}")]
    Criterion {
        index: usize,
        #[source]
        source: CriterionError,
    },

    /// Raw query string is not valid percent-encoded UTF-8
    #[error("Invalid query string encoding: {0}")]
    InvalidEncoding(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

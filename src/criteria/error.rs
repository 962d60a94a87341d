//! Error types for criterion construction and decoding
//!
//! - **`UnknownKind`**: a kind identifier that no criterion kind answers to
//! - **`Malformed`**: an encoded criterion that is not valid JSON or lacks `type`
//! - **`InvalidValue`**: a value whose shape does not match the kind
//! - **`InvalidModifier`**: a modifier the kind does not accept

use thiserror::Error;

/// Criterion-specific errors
#[derive(Debug, Error)]
pub enum CriterionError {
    /// Kind identifier is not recognized
    #[error("Unrecognized criterion kind '{0}'")]
    UnknownKind(String),

    /// Encoded criterion could not be parsed
    #[error("Malformed criterion: {0}")]
    Malformed(String),

    /// Value does not fit the kind's value shape
    #[error("Invalid value for criterion '{kind}': {reason}")]
    InvalidValue { kind: String, reason: String },

    /// Modifier is not legal for the kind
    #[error("Modifier '{modifier}' is not allowed for criterion '{kind}'")]
    InvalidModifier { kind: String, modifier: String },
}

impl From<serde_json::Error> for CriterionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

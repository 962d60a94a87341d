//! Listfilter - typed list-filter state for media collections
//!
//! This library models the filter state of a list view (sort order, display
//! mode, search text, paging and structured criteria), persists it to and
//! from URL query parameters, and builds the structured filter payloads a
//! query API expects for scenes, performers and scene markers.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod criteria;
pub mod filters;
pub mod output;
pub mod query;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ListFilterError {
    /// Criterion error
    #[error("Criterion error: {0}")]
    CriterionError(#[from] criteria::CriterionError),
    /// Query codec error
    #[error("Query error: {0}")]
    QueryError(#[from] query::QueryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

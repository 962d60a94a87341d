//! URL query codec
//!
//! Persists filter state into a flat query-parameter map so that views can
//! be shared and bookmarked, and restores it again.
//!
//! Criteria travel as repeated `c` parameters holding one JSON object each.
//! The JSON is written raw; only characters that would break the query
//! string are escaped.
//!
//! # Examples
//!
//! ```
//! use listfilter::filters::{FilterMode, ListFilterModel};
//! use listfilter::query::QueryParams;
//!
//! let params = QueryParams::from_query_string(
//!     r#"sortby=rating&sortdir=desc&c={"type":"rating","value":4,"modifier":"GREATER_THAN"}"#,
//! )
//! .unwrap();
//!
//! let mut model = ListFilterModel::new(FilterMode::Scenes);
//! model.configure_from_query_parameters(&params).unwrap();
//!
//! assert_eq!(model.sort_by.as_deref(), Some("rating"));
//! assert_eq!(model.criteria.len(), 1);
//! assert_eq!(
//!     model.make_query_string().unwrap(),
//!     r#"c={"type":"rating","value":4,"modifier":"GREATER_THAN"}&disp=0&p=1&sortby=rating&sortdir=desc"#
//! );
//! ```

pub mod codec;
pub mod error;
pub mod params;

pub use codec::{
    CRITERIA_KEY, DISPLAY_MODE_KEY, DecodePolicy, PAGE_KEY, SEARCH_KEY, SORT_BY_KEY,
    SORT_DIRECTION_KEY,
};
pub use error::QueryError;
pub use params::{ParamValue, QueryParams};

//! Criterion type system and option registry
//!
//! A criterion is one structured filter condition: a kind, a kind-specific
//! value and a comparison modifier. This module provides:
//!
//! - **Kinds**: the closed set of criterion kinds with their labels, legal
//!   modifiers and value options (`CriterionKind`)
//! - **Values**: a variant per kind, so value and kind cannot disagree
//!   (`CriterionValue`, `Criterion`)
//! - **Registry**: the per-mode "add a condition" lists and the
//!   `create_criterion` factory
//! - **Codec**: the `{type, value, modifier}` JSON form used in URLs
//!
//! # Examples
//!
//! ```
//! use listfilter::criteria::{create_criterion, decode_criterion, encode_criterion, CriterionValue};
//!
//! let mut criterion = create_criterion("rating").unwrap();
//! criterion.set_value(CriterionValue::Rating(4)).unwrap();
//!
//! let json = encode_criterion(&criterion).unwrap();
//! assert_eq!(json, r#"{"type":"rating","value":4,"modifier":"EQUALS"}"#);
//! assert_eq!(decode_criterion(&json).unwrap(), criterion);
//! ```

pub mod codec;
pub mod error;
pub mod kind;
pub mod registry;
pub mod types;

pub use codec::{EncodedCriterion, decode_criterion, encode_criterion, value_from_json};
pub use error::CriterionError;
pub use kind::{CriterionKind, ValueShape};
pub use registry::{CriterionOption, create_criterion, criterion_kinds_for, criterion_options_for};
pub use types::{Criterion, CriterionModifier, CriterionValue, ReferenceItem};

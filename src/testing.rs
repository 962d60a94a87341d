//! Testing utilities for listfilter
//!
//! Small constructors for criteria and reference lists used across the
//! unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::criteria::{Criterion, CriterionValue, ReferenceItem};

/// Criterion holding `value` with its kind's default modifier
#[must_use]
pub fn criterion(value: CriterionValue) -> Criterion {
    Criterion::from_value(value)
}

/// Unnamed references for the given ids
#[must_use]
pub fn refs(ids: &[&str]) -> Vec<ReferenceItem> {
    ids.iter().map(|id| ReferenceItem::new(*id, "")).collect()
}

//! JSON transport form of a criterion
//!
//! A criterion travels as exactly `{"type": ..., "value": ..., "modifier": ...}`.
//! Decoding validates the value against the kind named by `type` instead of
//! trusting the payload, so a mismatched shape surfaces as a
//! `CriterionError` here rather than later in an output builder.

use super::error::CriterionError;
use super::kind::CriterionKind;
use super::types::{Criterion, CriterionModifier, CriterionValue, ReferenceItem};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Untyped `{type, value, modifier}` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedCriterion {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub value: Value,

    #[serde(default)]
    pub modifier: Option<CriterionModifier>,
}

impl From<&Criterion> for EncodedCriterion {
    fn from(criterion: &Criterion) -> Self {
        Self {
            kind: criterion.kind().as_str().to_string(),
            value: value_to_json(criterion.value()),
            modifier: criterion.modifier(),
        }
    }
}

impl TryFrom<EncodedCriterion> for Criterion {
    type Error = CriterionError;

    fn try_from(encoded: EncodedCriterion) -> Result<Self, Self::Error> {
        let kind: CriterionKind = encoded.kind.parse()?;
        let mut criterion = Self::new(kind);
        criterion.set_value(value_from_json(kind, encoded.value)?)?;
        // Absent modifier keeps the kind's default
        if let Some(modifier) = encoded.modifier {
            criterion.set_modifier(modifier)?;
        }
        Ok(criterion)
    }
}

fn value_to_json(value: &CriterionValue) -> Value {
    match value {
        CriterionValue::None(s)
        | CriterionValue::Resolution(s)
        | CriterionValue::IsMissing(s)
        | CriterionValue::Favorite(s) => json!(s),
        CriterionValue::Rating(n) => json!(n),
        CriterionValue::HasMarkers(b) => json!(b),
        CriterionValue::Tags(items)
        | CriterionValue::SceneTags(items)
        | CriterionValue::Performers(items)
        | CriterionValue::Studios(items) => json!(items),
    }
}

fn invalid(kind: CriterionKind, reason: impl Into<String>) -> CriterionError {
    CriterionError::InvalidValue {
        kind: kind.to_string(),
        reason: reason.into(),
    }
}

fn text(kind: CriterionKind, value: Value) -> Result<String, CriterionError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(invalid(kind, format!("expected a string, got {other}"))),
    }
}

fn references(kind: CriterionKind, value: Value) -> Result<Vec<ReferenceItem>, CriterionError> {
    serde_json::from_value(value)
        .map_err(|e| invalid(kind, format!("expected a list of {{id, name}} objects: {e}")))
}

/// Recover a typed value for `kind` from untyped JSON
///
/// `null` (or an absent `value`) yields the kind's blank value.
///
/// # Errors
///
/// Returns `CriterionError::InvalidValue` if `value` does not fit the kind.
pub fn value_from_json(kind: CriterionKind, value: Value) -> Result<CriterionValue, CriterionError> {
    if value.is_null() {
        return Ok(CriterionValue::empty(kind));
    }

    let decoded = match kind {
        CriterionKind::None => CriterionValue::None(text(kind, value)?),
        CriterionKind::Resolution => CriterionValue::Resolution(text(kind, value)?),
        CriterionKind::IsMissing => CriterionValue::IsMissing(text(kind, value)?),
        CriterionKind::Favorite => CriterionValue::Favorite(text(kind, value)?),
        CriterionKind::Rating => {
            let rating = value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| invalid(kind, format!("expected an integer, got {value}")))?;
            CriterionValue::Rating(rating)
        }
        CriterionKind::HasMarkers => match value {
            Value::Bool(b) => CriterionValue::HasMarkers(b),
            // Older links carry the flag as a string
            Value::String(ref s) if s == "true" => CriterionValue::HasMarkers(true),
            Value::String(ref s) if s == "false" => CriterionValue::HasMarkers(false),
            other => return Err(invalid(kind, format!("expected a boolean, got {other}"))),
        },
        CriterionKind::Tags => CriterionValue::Tags(references(kind, value)?),
        CriterionKind::SceneTags => CriterionValue::SceneTags(references(kind, value)?),
        CriterionKind::Performers => CriterionValue::Performers(references(kind, value)?),
        CriterionKind::Studios => CriterionValue::Studios(references(kind, value)?),
    };

    Ok(decoded)
}

/// Encode a criterion as a compact JSON string
///
/// # Errors
///
/// Returns `CriterionError::Malformed` if serialization fails.
pub fn encode_criterion(criterion: &Criterion) -> Result<String, CriterionError> {
    Ok(serde_json::to_string(&EncodedCriterion::from(criterion))?)
}

/// Decode a criterion from its JSON string form
///
/// # Errors
///
/// - `CriterionError::Malformed` if `json` is not an object with a string `type`
/// - `CriterionError::UnknownKind` if `type` names no kind
/// - `CriterionError::InvalidValue` / `InvalidModifier` if the payload does not
///   fit the kind
pub fn decode_criterion(json: &str) -> Result<Criterion, CriterionError> {
    let encoded: EncodedCriterion = serde_json::from_str(json)?;
    tracing::trace!(kind = %encoded.kind, "Decoding criterion");
    Criterion::try_from(encoded)
}

//! Criterion data structures
//!
//! - `CriterionModifier`: comparison operator applied to a criterion's value
//! - `ReferenceItem`: `{id, name}` pointer to a tag, performer or studio
//! - `CriterionValue`: kind-specific payload, one variant per kind
//! - `Criterion`: a value plus its modifier, kept internally consistent

use super::error::CriterionError;
use super::kind::CriterionKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriterionModifier {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    IsNull,
    NotNull,
    IncludesAll,
    Includes,
    Excludes,
}

impl CriterionModifier {
    /// Wire name, e.g. `GREATER_THAN`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "EQUALS",
            Self::NotEquals => "NOT_EQUALS",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThan => "LESS_THAN",
            Self::IsNull => "IS_NULL",
            Self::NotNull => "NOT_NULL",
            Self::IncludesAll => "INCLUDES_ALL",
            Self::Includes => "INCLUDES",
            Self::Excludes => "EXCLUDES",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equals => "Equals",
            Self::NotEquals => "Not Equals",
            Self::GreaterThan => "Greater Than",
            Self::LessThan => "Less Than",
            Self::IsNull => "Is NULL",
            Self::NotNull => "Not NULL",
            Self::IncludesAll => "Includes All",
            Self::Includes => "Includes",
            Self::Excludes => "Excludes",
        }
    }
}

impl fmt::Display for CriterionModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionModifier {
    type Err = CriterionError;

    /// Parse a wire name such as `INCLUDES_ALL`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [CriterionModifier; 9] = [
            CriterionModifier::Equals,
            CriterionModifier::NotEquals,
            CriterionModifier::GreaterThan,
            CriterionModifier::LessThan,
            CriterionModifier::IsNull,
            CriterionModifier::NotNull,
            CriterionModifier::IncludesAll,
            CriterionModifier::Includes,
            CriterionModifier::Excludes,
        ];
        ALL.into_iter()
            .find(|modifier| modifier.as_str() == s)
            .ok_or_else(|| CriterionError::Malformed(format!("unknown modifier '{s}'")))
    }
}

/// Reference to another entity, as carried by list-valued criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: String,

    /// Display name; only used to render the condition
    #[serde(default)]
    pub name: String,
}

impl ReferenceItem {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Kind-specific criterion payload
///
/// The variant identifies the kind, so a value can never disagree with the
/// criterion's `type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionValue {
    None(String),
    Rating(i32),
    Resolution(String),
    HasMarkers(bool),
    IsMissing(String),
    Tags(Vec<ReferenceItem>),
    SceneTags(Vec<ReferenceItem>),
    Performers(Vec<ReferenceItem>),
    Studios(Vec<ReferenceItem>),
    Favorite(String),
}

impl CriterionValue {
    /// Blank value for `kind`
    #[must_use]
    pub const fn empty(kind: CriterionKind) -> Self {
        match kind {
            CriterionKind::None => Self::None(String::new()),
            CriterionKind::Rating => Self::Rating(0),
            CriterionKind::Resolution => Self::Resolution(String::new()),
            CriterionKind::HasMarkers => Self::HasMarkers(false),
            CriterionKind::IsMissing => Self::IsMissing(String::new()),
            CriterionKind::Tags => Self::Tags(Vec::new()),
            CriterionKind::SceneTags => Self::SceneTags(Vec::new()),
            CriterionKind::Performers => Self::Performers(Vec::new()),
            CriterionKind::Studios => Self::Studios(Vec::new()),
            CriterionKind::Favorite => Self::Favorite(String::new()),
        }
    }

    /// Kind this value belongs to
    #[must_use]
    pub const fn kind(&self) -> CriterionKind {
        match self {
            Self::None(_) => CriterionKind::None,
            Self::Rating(_) => CriterionKind::Rating,
            Self::Resolution(_) => CriterionKind::Resolution,
            Self::HasMarkers(_) => CriterionKind::HasMarkers,
            Self::IsMissing(_) => CriterionKind::IsMissing,
            Self::Tags(_) => CriterionKind::Tags,
            Self::SceneTags(_) => CriterionKind::SceneTags,
            Self::Performers(_) => CriterionKind::Performers,
            Self::Studios(_) => CriterionKind::Studios,
            Self::Favorite(_) => CriterionKind::Favorite,
        }
    }

    /// References carried by list-valued kinds, `None` for scalar kinds
    #[must_use]
    pub fn references(&self) -> Option<&[ReferenceItem]> {
        match self {
            Self::Tags(items) | Self::SceneTags(items) | Self::Performers(items) | Self::Studios(items) => {
                Some(items)
            }
            Self::None(_)
            | Self::Rating(_)
            | Self::Resolution(_)
            | Self::HasMarkers(_)
            | Self::IsMissing(_)
            | Self::Favorite(_) => None,
        }
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None(s) | Self::Resolution(s) | Self::IsMissing(s) | Self::Favorite(s) => {
                f.write_str(s)
            }
            Self::Rating(n) => write!(f, "{n}"),
            Self::HasMarkers(b) => write!(f, "{b}"),
            Self::Tags(items) | Self::SceneTags(items) | Self::Performers(items) | Self::Studios(items) => {
                let names: Vec<&str> = items
                    .iter()
                    .map(|item| {
                        if item.name.is_empty() {
                            item.id.as_str()
                        } else {
                            item.name.as_str()
                        }
                    })
                    .collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

/// A single structured filter condition
///
/// Fields are private so that the value and modifier always agree with the
/// kind. Use [`Criterion::new`] (or the registry's `create_criterion`) for a
/// blank instance, then [`Criterion::set_value`] and
/// [`Criterion::set_modifier`] to populate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    value: CriterionValue,
    modifier: Option<CriterionModifier>,
}

impl Criterion {
    /// Blank criterion of `kind` with its default modifier
    #[must_use]
    pub fn new(kind: CriterionKind) -> Self {
        Self {
            value: CriterionValue::empty(kind),
            modifier: kind.default_modifier(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CriterionKind {
        self.value.kind()
    }

    #[must_use]
    pub const fn value(&self) -> &CriterionValue {
        &self.value
    }

    /// Current modifier, `None` for kinds without a modifier concept
    #[must_use]
    pub const fn modifier(&self) -> Option<CriterionModifier> {
        self.modifier
    }

    /// Replace the value
    ///
    /// # Errors
    ///
    /// Returns `CriterionError::InvalidValue` if `value` belongs to another kind.
    pub fn set_value(&mut self, value: CriterionValue) -> Result<(), CriterionError> {
        if value.kind() != self.kind() {
            return Err(CriterionError::InvalidValue {
                kind: self.kind().to_string(),
                reason: format!("expected a {} value, got {}", self.kind(), value.kind()),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Replace the modifier
    ///
    /// # Errors
    ///
    /// Returns `CriterionError::InvalidModifier` if the kind does not accept `modifier`.
    pub fn set_modifier(&mut self, modifier: CriterionModifier) -> Result<(), CriterionError> {
        if !self.kind().accepts_modifier(modifier) {
            return Err(CriterionError::InvalidModifier {
                kind: self.kind().to_string(),
                modifier: modifier.to_string(),
            });
        }
        self.modifier = Some(modifier);
        Ok(())
    }

    /// Builder-style [`Criterion::set_value`]
    ///
    /// # Errors
    ///
    /// See [`Criterion::set_value`].
    pub fn with_value(mut self, value: CriterionValue) -> Result<Self, CriterionError> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Builder-style [`Criterion::set_modifier`]
    ///
    /// # Errors
    ///
    /// See [`Criterion::set_modifier`].
    pub fn with_modifier(mut self, modifier: CriterionModifier) -> Result<Self, CriterionError> {
        self.set_modifier(modifier)?;
        Ok(self)
    }

    /// Build a criterion directly from a value, using the kind's default modifier
    #[must_use]
    pub fn from_value(value: CriterionValue) -> Self {
        let modifier = value.kind().default_modifier();
        Self { value, modifier }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind().label())?;
        if let Some(modifier) = self.modifier {
            write!(f, " {}", modifier.label())?;
        }
        write!(f, " {}", self.value)
    }
}

//! Criterion kinds and their static descriptions
//!
//! Every criterion kind declares three things:
//! - the wire name used in the `type` field of an encoded criterion
//! - a human-readable label for "add a condition" pickers
//! - the set of comparison modifiers it accepts (possibly empty)
//!
//! The tables here are immutable; nothing registers kinds at runtime.

use super::error::CriterionError;
use super::types::CriterionModifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the value a criterion kind carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Free-form or option-restricted string
    Text,
    /// Integer
    Number,
    /// Boolean
    Flag,
    /// Ordered list of `{id, name}` references
    References,
}

/// Identifier of a criterion kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKind {
    /// Sentinel for "no condition selected"
    None,
    Rating,
    Resolution,
    HasMarkers,
    IsMissing,
    Tags,
    SceneTags,
    Performers,
    Studios,
    Favorite,
}

const RATING_MODIFIERS: &[CriterionModifier] = &[
    CriterionModifier::Equals,
    CriterionModifier::NotEquals,
    CriterionModifier::GreaterThan,
    CriterionModifier::LessThan,
    CriterionModifier::IsNull,
    CriterionModifier::NotNull,
];

const EQUALS_ONLY: &[CriterionModifier] = &[CriterionModifier::Equals];

const TAG_MODIFIERS: &[CriterionModifier] = &[
    CriterionModifier::IncludesAll,
    CriterionModifier::Includes,
    CriterionModifier::Excludes,
];

const PERFORMER_MODIFIERS: &[CriterionModifier] =
    &[CriterionModifier::IncludesAll, CriterionModifier::Includes];

const STUDIO_MODIFIERS: &[CriterionModifier] = &[CriterionModifier::Includes];

impl CriterionKind {
    /// All kinds, in registry declaration order
    pub const ALL: [Self; 10] = [
        Self::None,
        Self::Rating,
        Self::Resolution,
        Self::HasMarkers,
        Self::IsMissing,
        Self::Tags,
        Self::SceneTags,
        Self::Performers,
        Self::Studios,
        Self::Favorite,
    ];

    /// Wire name used in the `type` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rating => "rating",
            Self::Resolution => "resolution",
            Self::HasMarkers => "hasMarkers",
            Self::IsMissing => "isMissing",
            Self::Tags => "tags",
            Self::SceneTags => "sceneTags",
            Self::Performers => "performers",
            Self::Studios => "studios",
            Self::Favorite => "favorite",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Rating => "Rating",
            Self::Resolution => "Resolution",
            Self::HasMarkers => "Has Markers",
            Self::IsMissing => "Is Missing",
            Self::Tags => "Tags",
            Self::SceneTags => "Scene Tags",
            Self::Performers => "Performers",
            Self::Studios => "Studios",
            Self::Favorite => "Favorite",
        }
    }

    #[must_use]
    pub const fn value_shape(self) -> ValueShape {
        match self {
            Self::None | Self::Resolution | Self::IsMissing | Self::Favorite => ValueShape::Text,
            Self::Rating => ValueShape::Number,
            Self::HasMarkers => ValueShape::Flag,
            Self::Tags | Self::SceneTags | Self::Performers | Self::Studios => {
                ValueShape::References
            }
        }
    }

    /// Modifiers this kind accepts; empty for kinds without a modifier concept
    #[must_use]
    pub const fn modifier_options(self) -> &'static [CriterionModifier] {
        match self {
            Self::None => &[],
            Self::Rating => RATING_MODIFIERS,
            Self::Resolution | Self::HasMarkers | Self::IsMissing | Self::Favorite => EQUALS_ONLY,
            Self::Tags | Self::SceneTags => TAG_MODIFIERS,
            Self::Performers => PERFORMER_MODIFIERS,
            Self::Studios => STUDIO_MODIFIERS,
        }
    }

    /// Default modifier, `None` when the kind has no modifier concept
    #[must_use]
    pub fn default_modifier(self) -> Option<CriterionModifier> {
        self.modifier_options().first().copied()
    }

    /// Check whether `modifier` is legal for this kind
    #[must_use]
    pub fn accepts_modifier(self, modifier: CriterionModifier) -> bool {
        self.modifier_options().contains(&modifier)
    }

    /// Fixed value choices offered by the picker, empty when the value is open
    #[must_use]
    pub const fn value_options(self) -> &'static [&'static str] {
        match self {
            Self::Rating => &["1", "2", "3", "4", "5"],
            Self::Resolution => &["240p", "480p", "720p", "1080p", "4k"],
            Self::HasMarkers | Self::Favorite => &["true", "false"],
            Self::IsMissing => &["title", "url", "date", "gallery", "studio", "performers"],
            Self::None | Self::Tags | Self::SceneTags | Self::Performers | Self::Studios => &[],
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionKind {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CriterionError::UnknownKind(s.to_string()))
    }
}

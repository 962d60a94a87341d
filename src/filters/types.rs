//! Enumerations shared by the filter model
//!
//! - `FilterMode`: which entity collection is being listed
//! - `DisplayMode`: how results are rendered, carried in URLs as an ordinal
//! - `SortDirection`: ascending or descending

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity collection being filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Scenes,
    Performers,
    Studios,
    Galleries,
    SceneMarkers,
}

impl FilterMode {
    pub const ALL: [Self; 5] = [
        Self::Scenes,
        Self::Performers,
        Self::Studios,
        Self::Galleries,
        Self::SceneMarkers,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scenes => "scenes",
            Self::Performers => "performers",
            Self::Studios => "studios",
            Self::Galleries => "galleries",
            Self::SceneMarkers => "scene_markers",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    /// Accepts `scene_markers`, `scene-markers` and `markers` for scene markers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scenes" => Ok(Self::Scenes),
            "performers" => Ok(Self::Performers),
            "studios" => Ok(Self::Studios),
            "galleries" => Ok(Self::Galleries),
            "scene_markers" | "scene-markers" | "markers" => Ok(Self::SceneMarkers),
            other => Err(format!("unrecognized filter mode '{other}'")),
        }
    }
}

/// Result layout
///
/// The discriminants are the ordinals used in the `disp` query parameter
/// and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Grid = 0,
    List = 1,
    Wall = 2,
}

impl DisplayMode {
    /// Ordinal used in URLs
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display mode for an ordinal, `None` if out of range
    #[must_use]
    pub const fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Grid),
            1 => Some(Self::List),
            2 => Some(Self::Wall),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
            Self::Wall => "Wall",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire name, `asc` or `desc`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse the exact literals `asc` and `desc`; anything else is `None`
    #[must_use]
    pub fn parse_literal(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

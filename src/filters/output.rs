//! Query-API payloads built from the filter model
//!
//! Each builder folds `criteria` in list order into a fresh payload, keyed
//! by criterion kind. When several criteria share a kind, the last one
//! overwrites the earlier ones. Scenes accept a single performer and a
//! single studio, so only the first reference of those criteria is used.

use super::model::ListFilterModel;
use super::types::{FilterMode, SortDirection};
use crate::criteria::{CriterionModifier, CriterionValue, ReferenceItem};
use serde::{Deserialize, Serialize};

/// Sort direction as the query API spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirectionEnum {
    Asc,
    Desc,
}

impl From<SortDirection> for SortDirectionEnum {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Asc,
            SortDirection::Desc => Self::Desc,
        }
    }
}

/// Resolution tiers understood by the scene filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionEnum {
    /// 240p
    Low,
    /// 480p
    Standard,
    /// 720p
    StandardHd,
    /// 1080p
    FullHd,
    /// 4k
    FourK,
}

impl ResolutionEnum {
    /// Tier for a resolution label, `None` for labels outside the fixed set
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "240p" => Some(Self::Low),
            "480p" => Some(Self::Standard),
            "720p" => Some(Self::StandardHd),
            "1080p" => Some(Self::FullHd),
            "4k" => Some(Self::FourK),
            _ => None,
        }
    }
}

/// Integer comparison input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntCriterionInput {
    pub value: i32,
    pub modifier: CriterionModifier,
}

/// Generic list query: search, paging and sorting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub direction: SortDirectionEnum,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<IntCriterionInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_markers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_missing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_favorites: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneMarkerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performers: Option<Vec<String>>,
}

/// Structured filter matching the model's mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityFilter {
    Scene(SceneFilter),
    Performer(PerformerFilter),
    SceneMarker(SceneMarkerFilter),
}

fn ids(items: &[ReferenceItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

fn first_id(items: &[ReferenceItem]) -> Option<String> {
    items.first().map(|item| item.id.clone())
}

impl ListFilterModel {
    /// Search, paging and sorting for the list query
    #[must_use]
    pub fn make_find_filter(&self) -> FindFilter {
        FindFilter {
            q: self.search_term.clone(),
            page: self.current_page,
            per_page: self.items_per_page,
            sort: self.sort_by.clone(),
            direction: self.sort_direction.into(),
        }
    }

    /// Fold the criteria into a scene filter
    ///
    /// `performers` and `studios` only contribute their first reference;
    /// an empty reference list clears the field. An unmapped resolution
    /// label leaves `resolution` as it was.
    #[must_use]
    pub fn make_scene_filter(&self) -> SceneFilter {
        let mut result = SceneFilter::default();
        for criterion in &self.criteria {
            match criterion.value() {
                CriterionValue::Rating(value) => {
                    let modifier = criterion.modifier().unwrap_or(CriterionModifier::Equals);
                    result.rating = Some(IntCriterionInput {
                        value: *value,
                        modifier,
                    });
                }
                CriterionValue::Resolution(label) => {
                    if let Some(resolution) = ResolutionEnum::from_label(label) {
                        result.resolution = Some(resolution);
                    }
                }
                CriterionValue::HasMarkers(flag) => result.has_markers = Some(*flag),
                CriterionValue::IsMissing(field) => result.is_missing = Some(field.clone()),
                CriterionValue::Tags(items) => result.tags = Some(ids(items)),
                CriterionValue::Performers(items) => result.performer_id = first_id(items),
                CriterionValue::Studios(items) => result.studio_id = first_id(items),
                CriterionValue::None(_)
                | CriterionValue::SceneTags(_)
                | CriterionValue::Favorite(_) => {}
            }
        }
        result
    }

    /// Fold the criteria into a performer filter
    ///
    /// Only the literal string `"true"` marks favorites; any other value
    /// yields `false`.
    #[must_use]
    pub fn make_performer_filter(&self) -> PerformerFilter {
        let mut result = PerformerFilter::default();
        for criterion in &self.criteria {
            match criterion.value() {
                CriterionValue::Favorite(value) => result.filter_favorites = Some(value == "true"),
                CriterionValue::None(_)
                | CriterionValue::Rating(_)
                | CriterionValue::Resolution(_)
                | CriterionValue::HasMarkers(_)
                | CriterionValue::IsMissing(_)
                | CriterionValue::Tags(_)
                | CriterionValue::SceneTags(_)
                | CriterionValue::Performers(_)
                | CriterionValue::Studios(_) => {}
            }
        }
        result
    }

    /// Fold the criteria into a scene-marker filter
    ///
    /// Unlike scenes, markers take every referenced performer.
    #[must_use]
    pub fn make_scene_marker_filter(&self) -> SceneMarkerFilter {
        let mut result = SceneMarkerFilter::default();
        for criterion in &self.criteria {
            match criterion.value() {
                CriterionValue::Tags(items) => result.tags = Some(ids(items)),
                CriterionValue::SceneTags(items) => result.scene_tags = Some(ids(items)),
                CriterionValue::Performers(items) => result.performers = Some(ids(items)),
                CriterionValue::None(_)
                | CriterionValue::Rating(_)
                | CriterionValue::Resolution(_)
                | CriterionValue::HasMarkers(_)
                | CriterionValue::IsMissing(_)
                | CriterionValue::Studios(_)
                | CriterionValue::Favorite(_) => {}
            }
        }
        result
    }

    /// Structured filter for the model's own mode
    ///
    /// Studios, galleries and unrecognized modes have no structured filter.
    #[must_use]
    pub fn make_entity_filter(&self) -> Option<EntityFilter> {
        match self.filter_mode? {
            FilterMode::Scenes => Some(EntityFilter::Scene(self.make_scene_filter())),
            FilterMode::Performers => Some(EntityFilter::Performer(self.make_performer_filter())),
            FilterMode::SceneMarkers => {
                Some(EntityFilter::SceneMarker(self.make_scene_marker_filter()))
            }
            FilterMode::Studios | FilterMode::Galleries => None,
        }
    }
}

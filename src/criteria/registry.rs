//! Per-mode criterion option lists and the blank-criterion factory

use super::error::CriterionError;
use super::kind::CriterionKind;
use super::types::Criterion;
use crate::filters::FilterMode;
use serde::Serialize;

/// Entry of an "add a condition" picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionOption {
    #[serde(rename = "type")]
    pub kind: CriterionKind,
    pub label: &'static str,
}

impl CriterionOption {
    #[must_use]
    pub const fn new(kind: CriterionKind) -> Self {
        Self {
            kind,
            label: kind.label(),
        }
    }
}

const SCENE_KINDS: &[CriterionKind] = &[
    CriterionKind::None,
    CriterionKind::Rating,
    CriterionKind::Resolution,
    CriterionKind::HasMarkers,
    CriterionKind::IsMissing,
    CriterionKind::Tags,
    CriterionKind::Performers,
    CriterionKind::Studios,
];

const PERFORMER_KINDS: &[CriterionKind] = &[CriterionKind::None, CriterionKind::Favorite];

const NONE_ONLY: &[CriterionKind] = &[CriterionKind::None];

const SCENE_MARKER_KINDS: &[CriterionKind] = &[
    CriterionKind::None,
    CriterionKind::Tags,
    CriterionKind::SceneTags,
    CriterionKind::Performers,
];

/// Criterion kinds offered for `mode`, always starting with the `none` sentinel
///
/// `None` stands for an unrecognized mode and yields only the sentinel.
#[must_use]
pub const fn criterion_kinds_for(mode: Option<FilterMode>) -> &'static [CriterionKind] {
    match mode {
        Some(FilterMode::Scenes) => SCENE_KINDS,
        Some(FilterMode::Performers) => PERFORMER_KINDS,
        Some(FilterMode::SceneMarkers) => SCENE_MARKER_KINDS,
        Some(FilterMode::Studios | FilterMode::Galleries) | None => NONE_ONLY,
    }
}

/// Picker entries for `mode`
#[must_use]
pub fn criterion_options_for(mode: Option<FilterMode>) -> Vec<CriterionOption> {
    criterion_kinds_for(mode)
        .iter()
        .copied()
        .map(CriterionOption::new)
        .collect()
}

/// Create a blank criterion from its kind identifier
///
/// # Errors
///
/// Returns `CriterionError::UnknownKind` if `name` is not a known kind.
pub fn create_criterion(name: &str) -> Result<Criterion, CriterionError> {
    let kind: CriterionKind = name.parse()?;
    Ok(Criterion::new(kind))
}

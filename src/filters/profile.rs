//! Static per-mode configuration tables
//!
//! A `ModeProfile` lists what a filter mode offers: the canonical default
//! sort field, the mode-specific sort fields and the allowed display modes.
//! The universal timestamp fields are appended by the model, not stored here.

use super::types::{DisplayMode, FilterMode};

/// Sort fields every mode offers after its own
pub const UNIVERSAL_SORT_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Options available to one filter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeProfile {
    /// Sort field used when none is set
    pub default_sort: Option<&'static str>,
    /// Mode-specific sort fields, before the universal suffix
    pub sort_fields: &'static [&'static str],
    /// Allowed display modes; the first is the default
    pub display_modes: &'static [DisplayMode],
}

const SCENES: ModeProfile = ModeProfile {
    default_sort: Some("date"),
    sort_fields: &[
        "title", "path", "rating", "date", "filesize", "duration", "framerate", "bitrate", "random",
    ],
    display_modes: &[DisplayMode::Grid, DisplayMode::List, DisplayMode::Wall],
};

const PERFORMERS: ModeProfile = ModeProfile {
    default_sort: Some("name"),
    sort_fields: &["name", "height", "birthdate", "scenes_count"],
    display_modes: &[DisplayMode::Grid, DisplayMode::List],
};

const STUDIOS: ModeProfile = ModeProfile {
    default_sort: Some("name"),
    sort_fields: &["name", "scenes_count"],
    display_modes: &[DisplayMode::Grid],
};

const GALLERIES: ModeProfile = ModeProfile {
    default_sort: Some("path"),
    sort_fields: &["path"],
    display_modes: &[DisplayMode::List],
};

const SCENE_MARKERS: ModeProfile = ModeProfile {
    default_sort: Some("title"),
    sort_fields: &["title", "seconds", "scene_id", "random", "scenes_updated_at"],
    display_modes: &[DisplayMode::Wall],
};

impl ModeProfile {
    /// Fallback for unrecognized modes: nothing to sort by, nothing to display
    pub const EMPTY: Self = Self {
        default_sort: None,
        sort_fields: &[],
        display_modes: &[],
    };

    /// Profile for `mode`; `None` selects [`ModeProfile::EMPTY`]
    #[must_use]
    pub const fn for_mode(mode: Option<FilterMode>) -> &'static Self {
        match mode {
            Some(FilterMode::Scenes) => &SCENES,
            Some(FilterMode::Performers) => &PERFORMERS,
            Some(FilterMode::Studios) => &STUDIOS,
            Some(FilterMode::Galleries) => &GALLERIES,
            Some(FilterMode::SceneMarkers) => &SCENE_MARKERS,
            None => &Self::EMPTY,
        }
    }

    /// Full sort option list, including the universal suffix
    #[must_use]
    pub fn sort_options(&self) -> Vec<String> {
        self.sort_fields
            .iter()
            .chain(UNIVERSAL_SORT_FIELDS.iter())
            .map(|field| (*field).to_string())
            .collect()
    }
}

//! List filter state for one active view
//!
//! `ListFilterModel` holds sort, display, search, page and criteria state.
//! Construction fills the mode-specific option lists; after that callers
//! assign fields directly. Sort and display choices are not validated
//! against the option lists on assignment.

use super::profile::ModeProfile;
use super::types::{DisplayMode, FilterMode, SortDirection};
use crate::config::ListFilterConfig;
use crate::criteria::{Criterion, CriterionError, CriterionOption, create_criterion, criterion_options_for};

/// Default page size
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 40;

/// Filter state of a list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilterModel {
    /// Collection being listed; `None` for an unrecognized mode
    pub filter_mode: Option<FilterMode>,
    pub search_term: Option<String>,
    /// 1-based
    pub current_page: u32,
    pub items_per_page: u32,
    pub sort_direction: SortDirection,
    pub sort_by: Option<String>,
    pub sort_by_options: Vec<String>,
    /// `None` only when the mode offers no display modes
    pub display_mode: Option<DisplayMode>,
    pub display_mode_options: Vec<DisplayMode>,
    pub criterion_options: Vec<CriterionOption>,
    /// Duplicates of a kind are allowed; output builders honor the last one
    pub criteria: Vec<Criterion>,
    /// Result count of the last query, set by the caller
    pub total_count: u64,
}

impl Default for ListFilterModel {
    fn default() -> Self {
        Self {
            filter_mode: None,
            search_term: None,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sort_direction: SortDirection::Asc,
            sort_by: None,
            sort_by_options: Vec::new(),
            display_mode: None,
            display_mode_options: Vec::new(),
            criterion_options: Vec::new(),
            criteria: Vec::new(),
            total_count: 0,
        }
    }
}

impl ListFilterModel {
    /// Create a model pre-populated with the defaults of `mode`
    #[must_use]
    pub fn new(mode: FilterMode) -> Self {
        Self::default().configured_for(Some(mode))
    }

    /// Create a model from a mode name
    ///
    /// An unrecognized name is not an error: the model gets the empty
    /// configuration (no sort fields besides the timestamps, no display
    /// modes, only the `none` criterion option).
    #[must_use]
    pub fn from_mode_name(name: &str) -> Self {
        let mode = name.parse::<FilterMode>().ok();
        if mode.is_none() {
            tracing::debug!(mode = name, "Unrecognized filter mode, using empty configuration");
        }
        Self::default().configured_for(mode)
    }

    /// Create a model for `mode` using page size and direction from `config`
    #[must_use]
    pub fn with_config(mode: FilterMode, config: &ListFilterConfig) -> Self {
        Self {
            items_per_page: config.items_per_page,
            sort_direction: config.sort_direction,
            ..Self::default()
        }
        .configured_for(Some(mode))
    }

    /// Apply the mode tables without clobbering an existing sort or display choice
    fn configured_for(mut self, mode: Option<FilterMode>) -> Self {
        let profile = ModeProfile::for_mode(mode);

        self.filter_mode = mode;
        if self.sort_by.is_none() {
            self.sort_by = profile.default_sort.map(str::to_string);
        }
        self.sort_by_options = profile.sort_options();
        self.display_mode_options = profile.display_modes.to_vec();
        if self.display_mode.is_none() {
            self.display_mode = self.display_mode_options.first().copied();
        }
        self.criterion_options = criterion_options_for(mode);
        self
    }

    /// Whether `sort_by` is one of the offered sort fields
    #[must_use]
    pub fn has_valid_sort(&self) -> bool {
        self.sort_by
            .as_ref()
            .is_some_and(|sort| self.sort_by_options.contains(sort))
    }

    /// Whether `display_mode` is one of the offered display modes
    #[must_use]
    pub fn has_valid_display_mode(&self) -> bool {
        self.display_mode
            .is_some_and(|mode| self.display_mode_options.contains(&mode))
    }

    /// Append a blank criterion of the named kind and return it for editing
    ///
    /// # Errors
    ///
    /// Returns `CriterionError::UnknownKind` if `kind` is not a known kind.
    pub fn add_criterion(&mut self, kind: &str) -> Result<&mut Criterion, CriterionError> {
        let criterion = create_criterion(kind)?;
        self.criteria.push(criterion);
        let last = self.criteria.len() - 1;
        Ok(&mut self.criteria[last])
    }

    /// Remove the criterion at `index`, if any
    pub fn remove_criterion(&mut self, index: usize) -> Option<Criterion> {
        (index < self.criteria.len()).then(|| self.criteria.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriterionKind, CriterionValue};

    #[test]
    fn test_scene_defaults() {
        let model = ListFilterModel::new(FilterMode::Scenes);
        assert_eq!(model.filter_mode, Some(FilterMode::Scenes));
        assert_eq!(model.sort_by.as_deref(), Some("date"));
        assert_eq!(model.display_mode, Some(DisplayMode::Grid));
        assert_eq!(model.current_page, 1);
        assert_eq!(model.items_per_page, 40);
        assert_eq!(model.sort_direction, SortDirection::Asc);
        assert_eq!(
            model.sort_by_options,
            vec![
                "title",
                "path",
                "rating",
                "date",
                "filesize",
                "duration",
                "framerate",
                "bitrate",
                "random",
                "created_at",
                "updated_at"
            ]
        );
        assert_eq!(model.criterion_options.len(), 8);
        assert!(model.criteria.is_empty());
    }

    #[test]
    fn test_mode_defaults() {
        let galleries = ListFilterModel::new(FilterMode::Galleries);
        assert_eq!(galleries.sort_by.as_deref(), Some("path"));
        assert_eq!(galleries.display_mode, Some(DisplayMode::List));
        assert_eq!(galleries.display_mode_options, vec![DisplayMode::List]);

        let markers = ListFilterModel::new(FilterMode::SceneMarkers);
        assert_eq!(markers.sort_by.as_deref(), Some("title"));
        assert_eq!(markers.display_mode, Some(DisplayMode::Wall));

        let performers = ListFilterModel::new(FilterMode::Performers);
        assert_eq!(performers.sort_by.as_deref(), Some("name"));
        assert_eq!(
            performers.display_mode_options,
            vec![DisplayMode::Grid, DisplayMode::List]
        );
    }

    #[test]
    fn test_unrecognized_mode_degrades_to_empty() {
        let model = ListFilterModel::from_mode_name("movies");
        assert_eq!(model.filter_mode, None);
        assert_eq!(model.sort_by, None);
        assert_eq!(model.sort_by_options, vec!["created_at", "updated_at"]);
        assert!(model.display_mode_options.is_empty());
        assert_eq!(model.display_mode, None);
        assert_eq!(model.criterion_options.len(), 1);
        assert_eq!(model.criterion_options[0].kind, CriterionKind::None);
    }

    #[test]
    fn test_existing_sort_is_not_clobbered() {
        let model = ListFilterModel {
            sort_by: Some("rating".to_string()),
            display_mode: Some(DisplayMode::Wall),
            ..ListFilterModel::default()
        }
        .configured_for(Some(FilterMode::Scenes));

        assert_eq!(model.sort_by.as_deref(), Some("rating"));
        assert_eq!(model.display_mode, Some(DisplayMode::Wall));
    }

    #[test]
    fn test_out_of_list_values_are_accepted() {
        let mut model = ListFilterModel::new(FilterMode::Studios);
        model.sort_by = Some("duration".to_string());
        model.display_mode = Some(DisplayMode::Wall);

        assert_eq!(model.sort_by.as_deref(), Some("duration"));
        assert!(!model.has_valid_sort());
        assert!(!model.has_valid_display_mode());
    }

    #[test]
    fn test_with_config() {
        let config = ListFilterConfig {
            items_per_page: 25,
            sort_direction: SortDirection::Desc,
            ..ListFilterConfig::default()
        };
        let model = ListFilterModel::with_config(FilterMode::Performers, &config);
        assert_eq!(model.items_per_page, 25);
        assert_eq!(model.sort_direction, SortDirection::Desc);
        assert_eq!(model.sort_by.as_deref(), Some("name"));
    }

    #[test]
    fn test_add_and_remove_criterion() {
        let mut model = ListFilterModel::new(FilterMode::Scenes);
        model
            .add_criterion("rating")
            .unwrap()
            .set_value(CriterionValue::Rating(5))
            .unwrap();
        model.add_criterion("tags").unwrap();

        assert_eq!(model.criteria.len(), 2);
        assert_eq!(model.criteria[0].value(), &CriterionValue::Rating(5));

        let removed = model.remove_criterion(0).unwrap();
        assert_eq!(removed.kind(), CriterionKind::Rating);
        assert_eq!(model.criteria.len(), 1);
        assert!(model.remove_criterion(5).is_none());
    }

    #[test]
    fn test_add_unknown_criterion() {
        let mut model = ListFilterModel::new(FilterMode::Scenes);
        assert!(model.add_criterion("bogus").is_err());
        assert!(model.criteria.is_empty());
    }
}

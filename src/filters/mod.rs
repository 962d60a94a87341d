//! List filter model
//!
//! This module holds the per-view filter state and everything that depends
//! on the filter mode.
//!
//! # Features
//!
//! - **Mode tables**: sort fields, display modes and criterion options per
//!   entity collection, with an empty fallback for unrecognized modes
//! - **Filter state**: search term, paging, sorting, display mode and criteria
//! - **Output builders**: the find filter plus scene, performer and
//!   scene-marker filters for the query API
//!
//! # Examples
//!
//! ```
//! use listfilter::filters::{FilterMode, ListFilterModel, ResolutionEnum};
//! use listfilter::criteria::CriterionValue;
//!
//! let mut model = ListFilterModel::new(FilterMode::Scenes);
//! model
//!     .add_criterion("resolution")
//!     .unwrap()
//!     .set_value(CriterionValue::Resolution("1080p".to_string()))
//!     .unwrap();
//!
//! assert_eq!(model.sort_by.as_deref(), Some("date"));
//! assert_eq!(model.make_scene_filter().resolution, Some(ResolutionEnum::FullHd));
//! ```

pub mod model;
pub mod output;
pub mod profile;
pub mod types;

pub use model::{DEFAULT_ITEMS_PER_PAGE, ListFilterModel};
pub use output::{
    EntityFilter, FindFilter, IntCriterionInput, PerformerFilter, ResolutionEnum, SceneFilter,
    SceneMarkerFilter, SortDirectionEnum,
};
pub use profile::{ModeProfile, UNIVERSAL_SORT_FIELDS};
pub use types::{DisplayMode, FilterMode, SortDirection};

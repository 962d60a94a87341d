//! Two-way mapping between filter state and URL query parameters
//!
//! | key      | field            | format                                   |
//! |----------|------------------|------------------------------------------|
//! | `sortby` | `sort_by`        | verbatim                                 |
//! | `sortdir`| `sort_direction` | `asc` or `desc`, anything else ignored   |
//! | `disp`   | `display_mode`   | integer ordinal                          |
//! | `q`      | `search_term`    | verbatim                                 |
//! | `p`      | `current_page`   | integer >= 1                             |
//! | `c`      | `criteria`       | repeated, one JSON criterion per value   |
//!
//! Decoding is all-or-nothing: every parameter is converted before the
//! model is touched, so a failed decode leaves the model unchanged.

use super::error::QueryError;
use super::params::{ParamValue, QueryParams};
use crate::criteria::{Criterion, decode_criterion, encode_criterion};
use crate::filters::{DisplayMode, ListFilterModel, SortDirection};
use serde::{Deserialize, Serialize};

pub const SORT_BY_KEY: &str = "sortby";
pub const SORT_DIRECTION_KEY: &str = "sortdir";
pub const DISPLAY_MODE_KEY: &str = "disp";
pub const SEARCH_KEY: &str = "q";
pub const PAGE_KEY: &str = "p";
pub const CRITERIA_KEY: &str = "c";

/// What to do with a `c` entry that fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Fail the whole decode on the first bad entry
    #[default]
    Strict,
    /// Drop bad entries and report them
    Skip,
}

fn parse_display_mode(raw: &str) -> Result<DisplayMode, QueryError> {
    let ordinal: i64 = raw
        .trim()
        .parse()
        .map_err(|_| QueryError::InvalidDisplayMode(raw.to_string()))?;
    DisplayMode::from_ordinal(ordinal).ok_or(QueryError::DisplayModeOutOfRange(ordinal))
}

fn parse_page(raw: &str) -> Result<u32, QueryError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| QueryError::InvalidPage(raw.to_string()))
}

fn decode_criteria(
    value: &ParamValue,
    policy: DecodePolicy,
    skipped: &mut Vec<QueryError>,
) -> Result<Vec<Criterion>, QueryError> {
    let mut criteria = Vec::new();

    for (index, json) in value.values().into_iter().enumerate() {
        match decode_criterion(json) {
            Ok(criterion) => criteria.push(criterion),
            Err(source) => {
                let error = QueryError::Criterion { index, source };
                match policy {
                    DecodePolicy::Strict => return Err(error),
                    DecodePolicy::Skip => {
                        tracing::warn!(index, error = %error, "Skipping undecodable criterion");
                        skipped.push(error);
                    }
                }
            }
        }
    }

    Ok(criteria)
}

impl ListFilterModel {
    /// Override the model's state from URL query parameters
    ///
    /// Absent parameters leave their field alone. A present `c` replaces the
    /// whole criteria list. Bad criterion entries abort the decode.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if `disp`, `p` or any `c` entry fails to convert;
    /// the model is left unchanged in that case.
    pub fn configure_from_query_parameters(&mut self, params: &QueryParams) -> Result<(), QueryError> {
        self.configure_from_query_parameters_with(params, DecodePolicy::Strict)
            .map(|_| ())
    }

    /// Like [`ListFilterModel::configure_from_query_parameters`], with a
    /// choice of how bad criterion entries are handled
    ///
    /// Returns the criterion errors that were skipped under
    /// [`DecodePolicy::Skip`]; always empty under [`DecodePolicy::Strict`].
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if `disp` or `p` fails to convert, or if a `c`
    /// entry fails under [`DecodePolicy::Strict`]. The model is left
    /// unchanged in that case.
    pub fn configure_from_query_parameters_with(
        &mut self,
        params: &QueryParams,
        policy: DecodePolicy,
    ) -> Result<Vec<QueryError>, QueryError> {
        let display_mode = params
            .get_str(DISPLAY_MODE_KEY)
            .map(parse_display_mode)
            .transpose()?;
        let current_page = params.get_str(PAGE_KEY).map(parse_page).transpose()?;

        let mut skipped = Vec::new();
        let criteria = params
            .get(CRITERIA_KEY)
            .map(|value| decode_criteria(value, policy, &mut skipped))
            .transpose()?;

        if let Some(sort_by) = params.get_str(SORT_BY_KEY) {
            self.sort_by = Some(sort_by.to_string());
        }
        if let Some(direction) = params
            .get_str(SORT_DIRECTION_KEY)
            .and_then(SortDirection::parse_literal)
        {
            self.sort_direction = direction;
        }
        if let Some(display_mode) = display_mode {
            self.display_mode = Some(display_mode);
        }
        if let Some(search_term) = params.get_str(SEARCH_KEY) {
            self.search_term = Some(search_term.to_string());
        }
        if let Some(current_page) = current_page {
            self.current_page = current_page;
        }
        if let Some(criteria) = criteria {
            self.criteria = criteria;
        }

        tracing::debug!(
            criteria = self.criteria.len(),
            skipped = skipped.len(),
            "Configured filter from query parameters"
        );
        Ok(skipped)
    }

    /// Encode the model's state as query parameters
    ///
    /// Unset optional fields are omitted, as is `c` when there are no
    /// criteria.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Criterion` if a criterion fails to serialize.
    pub fn make_query_parameters(&self) -> Result<QueryParams, QueryError> {
        let encoded = self
            .criteria
            .iter()
            .enumerate()
            .map(|(index, criterion)| {
                encode_criterion(criterion).map_err(|source| QueryError::Criterion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut params = QueryParams::new();
        if let Some(sort_by) = &self.sort_by {
            params.insert(SORT_BY_KEY, sort_by.as_str());
        }
        params.insert(SORT_DIRECTION_KEY, self.sort_direction.as_str());
        if let Some(display_mode) = self.display_mode {
            params.insert(DISPLAY_MODE_KEY, display_mode.ordinal().to_string());
        }
        if let Some(search_term) = &self.search_term {
            params.insert(SEARCH_KEY, search_term.as_str());
        }
        params.insert(PAGE_KEY, self.current_page.to_string());
        if !encoded.is_empty() {
            params.insert_list(CRITERIA_KEY, encoded);
        }

        Ok(params)
    }

    /// Encode the model's state as a query string (no leading `?`)
    ///
    /// Criterion JSON is written raw, not percent-encoded a second time.
    ///
    /// # Errors
    ///
    /// See [`ListFilterModel::make_query_parameters`].
    pub fn make_query_string(&self) -> Result<String, QueryError> {
        let query = self.make_query_parameters()?.to_query_string();
        tracing::trace!(query = %query, "Encoded filter as query string");
        Ok(query)
    }
}

//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for listfilter using the `clap`
//! crate. Every command starts from a filter model for `--mode`, hydrated
//! from `--query` when given.
//!
//! # Commands
//!
//! - **options**: sort fields, display modes and criterion kinds of the mode (default)
//! - **find**: the generic find filter as JSON
//! - **filter**: the mode-specific structured filter as JSON
//! - **query**: the re-encoded query string
//! - **add-criterion**: append a criterion and print the new query string
//!
//! # Examples
//!
//! ```bash
//! listfilter --mode scenes options
//! listfilter --mode scenes --query 'c={"type":"rating","value":4,"modifier":"EQUALS"}' filter
//! listfilter -m performers add-criterion favorite --value '"true"'
//! ```

use crate::ListFilterError;
use crate::config::ListFilterConfig;
use crate::criteria::{Criterion, CriterionModifier, ValueShape, value_from_json};
use crate::filters::ListFilterModel;
use crate::query::{DecodePolicy, QueryError, QueryParams};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "listfilter")]
#[command(about = "Inspect and rewrite list filters stored in URL query strings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter mode (scenes, performers, studios, galleries, scene_markers)
    #[arg(short = 'm', long = "mode", global = true, default_value = "scenes")]
    pub mode: String,

    /// Query string to hydrate the filter from
    #[arg(short = 'u', long = "query", value_name = "QUERY", global = true)]
    pub query: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Skip criteria that fail to decode instead of failing (overrides config)
    #[arg(long = "lenient", global = true)]
    pub lenient: bool,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the sort, display and criterion options of the mode (default)
    #[command(visible_alias = "o")]
    Options,

    /// Print the find filter (search, paging, sorting) as JSON
    Find,

    /// Print the mode-specific filter as JSON
    #[command(visible_alias = "f")]
    Filter,

    /// Print the filter re-encoded as a query string
    Query,

    /// Append a criterion and print the resulting query string
    #[command(name = "add-criterion", visible_alias = "add")]
    AddCriterion {
        /// Criterion kind, e.g. rating, tags, favorite
        kind: String,

        /// Value as JSON, e.g. 3 or [{"id":"1"}]; text kinds also take a bare word
        #[arg(long = "value", value_name = "JSON")]
        value: Option<String>,

        /// Modifier, e.g. EQUALS, GREATER_THAN, INCLUDES_ALL
        #[arg(long = "modifier", value_name = "MODIFIER")]
        modifier: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Options if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Options)
    }

    /// Load the configuration from `--config` or the default location
    ///
    /// # Errors
    ///
    /// Returns `ListFilterError` if the configuration cannot be read.
    pub fn load_config(&self) -> Result<ListFilterConfig, ListFilterError> {
        let config = match &self.config {
            Some(path) => ListFilterConfig::load_from(path)?,
            None => ListFilterConfig::load()?,
        };
        Ok(config)
    }

    /// Decode policy after applying `--lenient`
    #[must_use]
    pub const fn decode_policy(&self, config: &ListFilterConfig) -> DecodePolicy {
        if self.lenient {
            DecodePolicy::Skip
        } else {
            config.decode_policy
        }
    }

    /// Build the filter model for `--mode`, hydrated from `--query`
    ///
    /// Returns the model and the criterion errors skipped under a lenient
    /// decode policy.
    ///
    /// # Errors
    ///
    /// Returns `ListFilterError` if the query string fails to decode.
    pub fn build_model(
        &self,
        config: &ListFilterConfig,
    ) -> Result<(ListFilterModel, Vec<QueryError>), ListFilterError> {
        let mut model = match self.mode.parse() {
            Ok(mode) => ListFilterModel::with_config(mode, config),
            Err(_) => ListFilterModel {
                items_per_page: config.items_per_page,
                sort_direction: config.sort_direction,
                ..ListFilterModel::from_mode_name(&self.mode)
            },
        };

        let skipped = match &self.query {
            Some(query) => {
                let params = QueryParams::from_query_string(query)?;
                model.configure_from_query_parameters_with(&params, self.decode_policy(config))?
            }
            None => Vec::new(),
        };

        Ok((model, skipped))
    }
}

/// Build a criterion from command-line strings
///
/// # Errors
///
/// Returns `ListFilterError` if the kind is unknown, `value` is not JSON of
/// the right shape, or `modifier` is not legal for the kind.
pub fn parse_criterion(
    kind: &str,
    value: Option<&str>,
    modifier: Option<&str>,
) -> Result<Criterion, ListFilterError> {
    let mut criterion = crate::criteria::create_criterion(kind)?;

    if let Some(raw) = value {
        // Text kinds also take a bare word, e.g. `--value 1080p`
        let json = match serde_json::from_str(raw) {
            Ok(json) => json,
            Err(_) if criterion.kind().value_shape() == ValueShape::Text => {
                serde_json::Value::String(raw.to_string())
            }
            Err(e) => return Err(e.into()),
        };
        criterion.set_value(value_from_json(criterion.kind(), json)?)?;
    }
    if let Some(raw) = modifier {
        let modifier: CriterionModifier = raw.parse()?;
        criterion.set_modifier(modifier)?;
    }

    Ok(criterion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriterionKind, CriterionValue};
    use crate::filters::{FilterMode, SortDirection};

    #[test]
    fn test_default_command() {
        let cli = Cli::try_parse_from(["listfilter"]).unwrap();
        assert_eq!(cli.get_command(), Commands::Options);
        assert_eq!(cli.mode, "scenes");
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::try_parse_from(["listfilter", "filter", "-m", "performers", "--lenient"])
            .unwrap();
        assert_eq!(cli.get_command(), Commands::Filter);
        assert_eq!(cli.mode, "performers");
        assert!(cli.lenient);
    }

    #[test]
    fn test_add_criterion_args() {
        let cli = Cli::try_parse_from([
            "listfilter",
            "add",
            "rating",
            "--value",
            "4",
            "--modifier",
            "LESS_THAN",
        ])
        .unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::AddCriterion {
                kind: "rating".to_string(),
                value: Some("4".to_string()),
                modifier: Some("LESS_THAN".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_policy_override() {
        let config = ListFilterConfig::default();
        let strict = Cli::try_parse_from(["listfilter"]).unwrap();
        let lenient = Cli::try_parse_from(["listfilter", "--lenient"]).unwrap();
        assert_eq!(strict.decode_policy(&config), DecodePolicy::Strict);
        assert_eq!(lenient.decode_policy(&config), DecodePolicy::Skip);
    }

    #[test]
    fn test_build_model_from_query() {
        let cli = Cli::try_parse_from([
            "listfilter",
            "--mode",
            "scene_markers",
            "--query",
            r#"sortdir=desc&c={"type":"sceneTags","value":[{"id":"3"}]}"#,
        ])
        .unwrap();
        let (model, skipped) = cli.build_model(&ListFilterConfig::default()).unwrap();

        assert!(skipped.is_empty());
        assert_eq!(model.filter_mode, Some(FilterMode::SceneMarkers));
        assert_eq!(model.sort_direction, SortDirection::Desc);
        assert_eq!(model.criteria[0].kind(), CriterionKind::SceneTags);
    }

    #[test]
    fn test_build_model_lenient_reports_skipped() {
        let cli = Cli::try_parse_from(["listfilter", "--lenient", "--query", "c=nope"]).unwrap();
        let (model, skipped) = cli.build_model(&ListFilterConfig::default()).unwrap();
        assert!(model.criteria.is_empty());
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_build_model_unknown_mode() {
        let config = ListFilterConfig {
            items_per_page: 10,
            ..ListFilterConfig::default()
        };
        let cli = Cli::try_parse_from(["listfilter", "--mode", "movies"]).unwrap();
        let (model, _) = cli.build_model(&config).unwrap();
        assert_eq!(model.filter_mode, None);
        assert_eq!(model.items_per_page, 10);
    }

    #[test]
    fn test_parse_criterion() {
        let criterion = parse_criterion("resolution", Some("\"720p\""), None).unwrap();
        assert_eq!(criterion.value(), &CriterionValue::Resolution("720p".into()));

        let criterion = parse_criterion("isMissing", Some("studio"), None).unwrap();
        assert_eq!(criterion.value(), &CriterionValue::IsMissing("studio".into()));

        assert!(parse_criterion("rating", Some("4"), Some("INCLUDES")).is_err());
        assert!(parse_criterion("rating", Some("not json"), None).is_err());
        assert!(parse_criterion("weight", None, None).is_err());
    }
}

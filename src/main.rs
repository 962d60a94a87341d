//! Listfilter CLI application entry point
//!
//! Builds a list filter for a mode, optionally hydrated from a URL query
//! string, and prints its options, its query-API payloads or its
//! re-encoded query string.
//!
//! # Usage
//!
//! ```bash
//! # Show sort, display and criterion options for scenes (default command)
//! listfilter
//! listfilter --mode performers options
//!
//! # Translate a bookmarked query into query-API payloads
//! listfilter --query 'sortby=rating&c={"type":"tags","value":[{"id":"1"}]}' find
//! listfilter --query 'sortby=rating&c={"type":"tags","value":[{"id":"1"}]}' filter
//!
//! # Add a condition and get the new query string
//! listfilter --query 'p=2' add-criterion resolution --value '"1080p"'
//! ```
//!
//! # Logging
//!
//! Set `LISTFILTER_LOG` (or `RUST_LOG`) to e.g. `debug` to trace decoding.
//!
//! # Configuration
//!
//! Defaults are read from `~/.config/listfilter/config.toml` on Linux, or
//! from the file passed with `--config`.

use colored::Colorize;
use listfilter::{
    ListFilterError,
    cli::{Cli, Commands, parse_criterion},
    filters::ListFilterModel,
    output,
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, ListFilterError>;

const ENV_LOG: &str = "LISTFILTER_LOG";

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_filter_command(model: &ListFilterModel, quiet: bool) -> Result<()> {
    match model.make_entity_filter() {
        Some(filter) => print_json(&filter),
        None => {
            if !quiet {
                eprintln!(
                    "{}",
                    "No structured filter for this mode; printing an empty object".dimmed()
                );
            }
            println!("{{}}");
            Ok(())
        }
    }
}

fn handle_add_criterion(
    model: &mut ListFilterModel,
    kind: &str,
    value: Option<&str>,
    modifier: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let criterion = parse_criterion(kind, value, modifier)?;
    let offered = model
        .criterion_options
        .iter()
        .any(|option| option.kind == criterion.kind());
    if !offered && !quiet {
        eprintln!(
            "{} '{}' is not offered for this mode and will be ignored by its filter",
            "⚠️".yellow(),
            criterion.kind()
        );
    }

    model.criteria.push(criterion);
    println!("{}", model.make_query_string()?);
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    let (mut model, skipped) = cli.build_model(&config)?;

    if !cli.quiet {
        for error in &skipped {
            eprintln!("{} {}", "⚠️".yellow(), error);
        }
    }

    match cli.get_command() {
        Commands::Options => {
            for line in output::model_summary(&model, cli.quiet) {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Find => print_json(&model.make_find_filter()),
        Commands::Filter => handle_filter_command(&model, cli.quiet),
        Commands::Query => {
            println!("{}", model.make_query_string()?);
            Ok(())
        }
        Commands::AddCriterion {
            kind,
            value,
            modifier,
        } => handle_add_criterion(
            &mut model,
            &kind,
            value.as_deref(),
            modifier.as_deref(),
            cli.quiet,
        ),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e);
            ExitCode::FAILURE
        }
    }
}

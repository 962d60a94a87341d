//! Output formatting for CLI display
//!
//! Plain-text rendering of a filter model's options and criteria. Markers
//! show which option is currently selected; `quiet` drops headings and
//! markers so the output can be piped.

use crate::criteria::Criterion;
use crate::filters::ListFilterModel;
use colored::Colorize;

/// Format a heading line
#[must_use]
pub fn heading(title: &str, quiet: bool) -> Option<String> {
    (!quiet).then(|| title.bold().to_string())
}

/// Format one option, marking it if it is the current selection
#[must_use]
pub fn option_line(name: &str, selected: bool, quiet: bool) -> String {
    if quiet {
        name.to_string()
    } else if selected {
        format!("  {} {}", "*".green(), name.green())
    } else {
        format!("    {name}")
    }
}

/// Format a criterion with its position in the criteria list
#[must_use]
pub fn criterion_line(index: usize, criterion: &Criterion, quiet: bool) -> String {
    if quiet {
        criterion.to_string()
    } else {
        format!("  [{index}] {criterion}")
    }
}

/// All lines describing the options and criteria of `model`
#[must_use]
pub fn model_summary(model: &ListFilterModel, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let mode = model
        .filter_mode
        .map_or_else(|| "(unrecognized)".to_string(), |mode| mode.to_string());
    lines.extend(heading(&format!("Mode: {mode}"), quiet));

    lines.extend(heading("Sort by:", quiet));
    for option in &model.sort_by_options {
        let selected = model.sort_by.as_deref() == Some(option.as_str());
        lines.push(option_line(option, selected, quiet));
    }

    lines.extend(heading("Display modes:", quiet));
    for mode in &model.display_mode_options {
        lines.push(option_line(mode.label(), model.display_mode == Some(*mode), quiet));
    }

    lines.extend(heading("Criteria:", quiet));
    for option in &model.criterion_options {
        let choices = option.kind.value_options();
        if quiet || choices.is_empty() {
            lines.push(option_line(option.kind.as_str(), false, quiet));
        } else {
            let name = format!("{} {}", option.kind, format!("[{}]", choices.join("|")).dimmed());
            lines.push(option_line(&name, false, quiet));
        }
    }

    if !model.criteria.is_empty() {
        lines.extend(heading("Active criteria:", quiet));
        for (index, criterion) in model.criteria.iter().enumerate() {
            lines.push(criterion_line(index, criterion, quiet));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriterionValue;
    use crate::filters::FilterMode;
    use crate::testing::criterion;

    #[test]
    fn test_quiet_summary_has_no_headings() {
        let model = ListFilterModel::new(FilterMode::Studios);
        let lines = model_summary(&model, true);
        assert_eq!(
            lines,
            vec!["name", "scenes_count", "created_at", "updated_at", "Grid", "none"]
        );
    }

    #[test]
    fn test_summary_lists_active_criteria() {
        let mut model = ListFilterModel::new(FilterMode::Scenes);
        model.criteria.push(criterion(CriterionValue::Rating(5)));

        let lines = model_summary(&model, true);
        assert_eq!(lines.last().map(String::as_str), Some("Rating Equals 5"));
    }

    #[test]
    fn test_criterion_line() {
        let line = criterion_line(2, &criterion(CriterionValue::HasMarkers(true)), false);
        assert_eq!(line, "  [2] Has Markers Equals true");
    }

    #[test]
    fn test_summary_shows_value_choices() {
        colored::control::set_override(false);
        let model = ListFilterModel::new(FilterMode::Performers);
        let lines = model_summary(&model, false);
        assert!(lines.contains(&"    favorite [true|false]".to_string()));
        assert!(lines.contains(&"    none".to_string()));
    }

    #[test]
    fn test_option_line_plain() {
        assert_eq!(option_line("path", false, false), "    path");
        assert_eq!(option_line("path", true, true), "path");
    }
}

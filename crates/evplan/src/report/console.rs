//! Plain-text console report

use std::fmt::Write;

use evplan_core::analysis::selected_activities;
use evplan_core::model::{CombinationResult, ComparisonRow};
use evplan_core::{Scenario, ScenarioAnalysis};

use crate::util::format::{fit, format_currency};

const NAME_WIDTH: usize = 36;
const VALUE_WIDTH: usize = 18;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n=== {title} ===");
}

fn combination_line(out: &mut String, scenario: &Scenario, rank: usize, row: &CombinationResult) {
    let selected = selected_activities(scenario, row.pattern);
    let names = if selected.is_empty() {
        "(nothing)".to_string()
    } else {
        selected.join(", ")
    };
    let _ = writeln!(
        out,
        "{rank:>5}  {:>VALUE_WIDTH$}  {names}",
        format_currency(row.total_expected_value)
    );
}

/// Render the report for one analyzed scenario
pub fn render_analysis(scenario: &Scenario, analysis: &ScenarioAnalysis, view_size: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "##### {} ({} decisions, {} combinations) #####",
        analysis.scenario_name,
        analysis.decision_keys.len(),
        analysis.combination_count()
    );

    heading(&mut out, "Expected value per activity (keep)");
    for row in &analysis.expected_values {
        let _ = writeln!(
            out,
            "- {:<NAME_WIDTH$} EV = {:>VALUE_WIDTH$} (horizon {} years)",
            fit(&row.activity, NAME_WIDTH),
            format_currency(row.expected_value),
            row.horizon_years
        );
    }

    heading(&mut out, &format!("Top {view_size} combinations"));
    for (i, row) in analysis.ranked.top(view_size).iter().enumerate() {
        combination_line(&mut out, scenario, i + 1, row);
    }

    heading(&mut out, &format!("Worst {view_size} combinations"));
    let count = analysis.combination_count();
    for (i, row) in analysis.ranked.bottom(view_size).enumerate() {
        combination_line(&mut out, scenario, count - i, row);
    }

    heading(&mut out, "Tornado (marginal impact)");
    for row in &analysis.tornado {
        let _ = writeln!(
            out,
            "  {:<NAME_WIDTH$} {:>VALUE_WIDTH$}",
            fit(&row.activity, NAME_WIDTH),
            format_currency(row.impact)
        );
    }

    heading(&mut out, "Strategy summary");
    for row in &analysis.summary {
        let _ = writeln!(
            out,
            "  {:<20} {:>VALUE_WIDTH$}  {} activities: {}",
            row.strategy,
            format_currency(row.total_expected_value),
            row.selected_count,
            row.selected_activities.join(", ")
        );
    }

    out
}

/// Render a self-managed vs concession comparison table
pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    heading(&mut out, "Self-managed vs concession");
    if rows.is_empty() {
        out.push_str("  (no activities to compare)\n");
        return out;
    }

    let _ = writeln!(
        out,
        "  {:<NAME_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}  better",
        "activity", "self-managed", "concession", "difference"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "  {:<NAME_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}  {}",
            fit(&row.activity, NAME_WIDTH),
            format_currency(row.ev_self_managed),
            format_currency(row.ev_concession),
            format_currency(row.difference),
            row.better_option.label()
        );
    }

    let (own, con): (f64, f64) = rows.iter().fold((0.0, 0.0), |(own, con), row| {
        (own + row.advantage_self_managed, con + row.advantage_concession)
    });
    let _ = writeln!(
        out,
        "  total advantage: self-managed {}, concession {}",
        format_currency(own),
        format_currency(con)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use evplan_core::analysis::{MatchRule, compare_values};
    use evplan_core::{ActivityBuilder, ScenarioBuilder, analyze};

    #[test]
    fn test_render_analysis_sections() {
        let scenario = ScenarioBuilder::new("ab")
            .activity(ActivityBuilder::new("A", "a").horizon_years(2).outcome("x", 1.0, 10_000.0))
            .activity(ActivityBuilder::new("B", "b").outcome("x", 1.0, -5_000.0))
            .build()
            .unwrap();
        let analysis = analyze(&scenario).unwrap();
        let report = render_analysis(&scenario, &analysis, 2);

        assert!(report.starts_with("##### ab (2 decisions, 4 combinations) #####"));
        assert!(report.contains("=== Top 2 combinations ==="));
        assert!(report.contains("(horizon 2 years)"));
        assert!(report.contains("$10,000  A\n"));
        assert!(report.contains("-$5,000  B\n"));
        assert!(report.contains("$0  (nothing)"));
        assert!(report.contains("best overall"));
    }

    #[test]
    fn test_render_comparison() {
        let rows = compare_values(
            &[("Trekking".to_string(), 100.0)],
            &[("Trekking".to_string(), 70.0)],
            &MatchRule::ExactName,
        );
        let table = render_comparison(&rows);
        assert!(table.contains("self-managed"));
        assert!(table.contains("total advantage: self-managed $30, concession $0"));
        assert!(render_comparison(&[]).contains("no activities to compare"));
    }
}

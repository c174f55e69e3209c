//! CSV tables
//!
//! Floats use Rust's shortest round-trip formatting, so the same analysis
//! always produces byte-identical files.

use std::fmt::Write;

use evplan_core::ScenarioAnalysis;
use evplan_core::model::{ComparisonRow, StrategySummary, TornadoRow};

/// Separator for activity lists inside a single field
pub const LIST_SEPARATOR: &str = "; ";

/// Quote a field when it contains a delimiter, quote or line break
pub fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Ranked combinations: one 0/1 column per decision key plus the total
pub fn combinations_csv(analysis: &ScenarioAnalysis) -> String {
    let width = analysis.decision_keys.len();
    let mut out = String::with_capacity((analysis.combination_count() + 1) * (2 * width + 24));

    for key in &analysis.decision_keys {
        out.push_str(&escape(key.as_str()));
        out.push(',');
    }
    out.push_str("total_expected_value\n");

    for row in analysis.ranked.rows() {
        for bit in row.pattern.bits(width) {
            out.push(if bit == 1 { '1' } else { '0' });
            out.push(',');
        }
        let _ = writeln!(out, "{}", row.total_expected_value);
    }
    out
}

pub fn tornado_csv(rows: &[TornadoRow]) -> String {
    let mut out = String::from("activity,decision_key,impact\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{},{},{}",
            escape(&row.activity),
            escape(row.decision_key.as_str()),
            row.impact
        );
    }
    out
}

pub fn summary_csv(rows: &[StrategySummary]) -> String {
    let mut out = String::from("strategy,total_expected_value,selected_count,selected_activities\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            escape(&row.strategy),
            row.total_expected_value,
            row.selected_count,
            escape(&row.selected_activities.join(LIST_SEPARATOR))
        );
    }
    out
}

pub fn comparison_csv(rows: &[ComparisonRow]) -> String {
    let mut out = String::from(
        "activity,ev_self_managed,ev_concession,difference,better_option,advantage_self_managed,advantage_concession\n",
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            escape(&row.activity),
            row.ev_self_managed,
            row.ev_concession,
            row.difference,
            row.better_option.label(),
            row.advantage_self_managed,
            row.advantage_concession
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use evplan_core::analysis::{MatchRule, compare_values};
    use evplan_core::{ActivityBuilder, ScenarioBuilder, analyze};

    fn analysis() -> ScenarioAnalysis {
        let scenario = ScenarioBuilder::new("ab")
            .activity(ActivityBuilder::new("A", "a").outcome("x", 1.0, 10.0))
            .activity(ActivityBuilder::new("B, the second", "b").outcome("x", 1.0, -5.0))
            .build()
            .unwrap();
        analyze(&scenario).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Kayak"), "Kayak");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_combinations_csv() {
        let csv = combinations_csv(&analysis());
        assert_eq!(
            csv,
            "a,b,total_expected_value\n1,0,10\n1,1,5\n0,0,0\n0,1,-5\n"
        );
    }

    #[test]
    fn test_combinations_csv_master_key_all_off_row() {
        let scenario = ScenarioBuilder::new("master")
            .master_key("all")
            .activity(ActivityBuilder::new("A", "a").outcome("x", 1.0, -1.0))
            .build()
            .unwrap();
        let csv = combinations_csv(&analyze(&scenario).unwrap());
        assert_eq!(csv, "all,a,total_expected_value\n0,0,0\n1,0,0\n0,1,-1\n1,1,-1\n");
    }

    #[test]
    fn test_tornado_and_summary_csv() {
        let analysis = analysis();
        assert_eq!(
            tornado_csv(&analysis.tornado),
            "activity,decision_key,impact\nA,a,10\n\"B, the second\",b,-5\n"
        );
        assert_eq!(
            summary_csv(&analysis.summary),
            "strategy,total_expected_value,selected_count,selected_activities\nbest overall,10,1,A\n"
        );
    }

    #[test]
    fn test_comparison_csv() {
        let rows = compare_values(
            &[("Trekking".to_string(), 100.0)],
            &[("Trekking".to_string(), 70.0)],
            &MatchRule::ExactName,
        );
        assert_eq!(
            comparison_csv(&rows),
            "activity,ev_self_managed,ev_concession,difference,better_option,advantage_self_managed,advantage_concession\n\
             Trekking,100,70,30,self-managed,30,0\n"
        );
    }

    #[test]
    fn test_tables_are_deterministic() {
        let first = analysis();
        let second = analysis();
        assert_eq!(combinations_csv(&first), combinations_csv(&second));
        assert_eq!(tornado_csv(&first.tornado), tornado_csv(&second.tornado));
        assert_eq!(summary_csv(&first.summary), summary_csv(&second.summary));
    }
}

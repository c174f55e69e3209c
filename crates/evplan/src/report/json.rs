//! JSON export of a whole analysis
//!
//! The ranked table is exported as its top and bottom views; the full table
//! lives in the combinations CSV.

use evplan_core::analysis::{DecisionTree, selected_activities};
use evplan_core::config::ScenarioConfig;
use evplan_core::model::{CombinationResult, StrategySummary, TornadoRow};
use evplan_core::pipeline::ActivityValue;
use evplan_core::{Scenario, ScenarioAnalysis, ScenarioWarning};
use jiff::Timestamp;
use serde::Serialize;

/// One ranked combination with its switched-on activities spelled out
#[derive(Debug, Clone, Serialize)]
pub struct RankedRow {
    pub rank: usize,
    pub pattern: u64,
    pub total_expected_value: f64,
    pub selected_activities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisExport<'a> {
    pub generated_at: Timestamp,
    pub scenario: ScenarioConfig,
    pub combination_count: usize,
    pub expected_values: &'a [ActivityValue],
    pub top: Vec<RankedRow>,
    /// Worst first
    pub bottom: Vec<RankedRow>,
    pub tornado: &'a [TornadoRow],
    pub summary: &'a [StrategySummary],
    pub warnings: &'a [ScenarioWarning],
    pub decision_tree: &'a DecisionTree,
}

fn ranked_row(scenario: &Scenario, rank: usize, row: &CombinationResult) -> RankedRow {
    RankedRow {
        rank,
        pattern: row.pattern.0,
        total_expected_value: row.total_expected_value,
        selected_activities: selected_activities(scenario, row.pattern),
    }
}

impl<'a> AnalysisExport<'a> {
    pub fn new(
        scenario: &Scenario,
        analysis: &'a ScenarioAnalysis,
        view_size: usize,
        generated_at: Timestamp,
    ) -> Self {
        let count = analysis.combination_count();
        let top = analysis
            .ranked
            .top(view_size)
            .iter()
            .enumerate()
            .map(|(i, row)| ranked_row(scenario, i + 1, row))
            .collect();
        let bottom = analysis
            .ranked
            .bottom(view_size)
            .enumerate()
            .map(|(i, row)| ranked_row(scenario, count - i, row))
            .collect();

        Self {
            generated_at,
            scenario: ScenarioConfig::from(scenario),
            combination_count: count,
            expected_values: &analysis.expected_values,
            top,
            bottom,
            tornado: &analysis.tornado,
            summary: &analysis.summary,
            warnings: &analysis.warnings,
            decision_tree: &analysis.tree,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

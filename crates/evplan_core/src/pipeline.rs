//! End-to-end analysis of a scenario
//!
//! Computes expected values, enumerates and ranks the decision space, then
//! derives the tornado table, headline strategies and decision tree. Every
//! step reads the scenario immutably, so the same scenario always yields the
//! same analysis.

use serde::Serialize;

use crate::analysis::{DecisionTree, MatchRule, RankedCombinations, compare_scenarios, summarize, tornado};
use crate::enumerate::evaluate_combinations;
use crate::error::{Result, ScenarioWarning};
use crate::evaluate::scenario_warnings;
use crate::model::{ComparisonRow, DecisionKey, Scenario, StrategySummary, TornadoRow};

/// Expected value of one activity, in scenario order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityValue {
    pub activity: String,
    pub decision_key: DecisionKey,
    pub horizon_years: u32,
    pub probability_sum: f64,
    pub expected_value: f64,
}

/// Everything derived from one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioAnalysis {
    pub scenario_name: String,
    /// Bit order of every pattern in `ranked` and `summary`
    pub decision_keys: Vec<DecisionKey>,
    pub expected_values: Vec<ActivityValue>,
    pub ranked: RankedCombinations,
    pub tornado: Vec<TornadoRow>,
    pub summary: Vec<StrategySummary>,
    pub warnings: Vec<ScenarioWarning>,
    pub tree: DecisionTree,
}

impl ScenarioAnalysis {
    /// Number of enumerated combinations
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.ranked.len()
    }
}

/// Run the full analysis for a scenario
pub fn analyze(scenario: &Scenario) -> Result<ScenarioAnalysis> {
    let warnings = scenario_warnings(scenario);

    let expected_values = scenario
        .expected_values()
        .into_iter()
        .map(|(activity, expected_value)| ActivityValue {
            activity: activity.name.clone(),
            decision_key: activity.decision_key.clone(),
            horizon_years: activity.horizon_years,
            probability_sum: activity.probability_sum(),
            expected_value,
        })
        .collect();

    let ranked = RankedCombinations::new(evaluate_combinations(scenario)?);
    let summary = summarize(scenario, &ranked);

    Ok(ScenarioAnalysis {
        scenario_name: scenario.name().to_string(),
        decision_keys: scenario.decision_keys().cloned().collect(),
        expected_values,
        ranked,
        tornado: tornado(scenario),
        summary,
        warnings,
        tree: DecisionTree::build(scenario),
    })
}

/// Compare a self-managed scenario with a concession scenario
#[must_use]
pub fn compare(self_managed: &Scenario, concession: &Scenario, rule: &MatchRule) -> Vec<ComparisonRow> {
    compare_scenarios(self_managed, concession, rule)
}

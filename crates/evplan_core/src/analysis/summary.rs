//! Headline strategies drawn from the ranked decision space

use super::RankedCombinations;
use crate::enumerate::BitPattern;
use crate::model::{CombinationResult, DecisionSlot, Regime, Scenario, StrategySummary};

pub const OUTSOURCED_STRATEGY: &str = "fully outsourced";
pub const SELF_MANAGED_STRATEGY: &str = "fully self-managed";
pub const BEST_OVERALL_STRATEGY: &str = "best overall";

/// Extract the headline strategies of a scenario.
///
/// With a master key at position 0 this yields the best combination of the
/// master=1 subspace (concession for everything) and of the master=0 subspace.
/// Regime-tagged activities only count as eligible in the subspace of their
/// own regime. Without a master key a single best-overall row is returned.
#[must_use]
pub fn summarize(scenario: &Scenario, ranked: &RankedCombinations) -> Vec<StrategySummary> {
    if scenario.master_key().is_none() {
        return ranked
            .best()
            .map(|row| strategy_row(scenario, BEST_OVERALL_STRATEGY, None, row))
            .into_iter()
            .collect();
    }

    [
        (OUTSOURCED_STRATEGY, true, Regime::Concession),
        (SELF_MANAGED_STRATEGY, false, Regime::SelfManaged),
    ]
    .into_iter()
    .filter_map(|(label, master, regime)| {
        ranked
            .best_where(|row| row.pattern.bit(0) == master && consistent(scenario, row.pattern, regime))
            .map(|row| strategy_row(scenario, label, Some(master), row))
    })
    .collect()
}

/// Whether every activity switched on in `pattern` may run under `regime`
fn consistent(scenario: &Scenario, pattern: BitPattern, regime: Regime) -> bool {
    let order = scenario.decision_order();
    pattern.ones(order.len()).all(|i| {
        scenario
            .slot_activity(&order[i])
            .is_none_or(|a| a.eligible_under(regime))
    })
}

/// Names of the activities switched on in `pattern`, in decision order
#[must_use]
pub fn selected_activities(scenario: &Scenario, pattern: BitPattern) -> Vec<String> {
    let order = scenario.decision_order();
    pattern
        .ones(order.len())
        .filter_map(|i| match &order[i] {
            DecisionSlot::Master(_) => None,
            slot => scenario.slot_activity(slot).map(|a| a.name.clone()),
        })
        .collect()
}

fn strategy_row(
    scenario: &Scenario,
    label: &str,
    master: Option<bool>,
    row: &CombinationResult,
) -> StrategySummary {
    let selected = selected_activities(scenario, row.pattern);
    StrategySummary {
        strategy: label.to_string(),
        master,
        pattern: row.pattern,
        total_expected_value: row.total_expected_value,
        selected_count: selected.len(),
        selected_activities: selected,
    }
}

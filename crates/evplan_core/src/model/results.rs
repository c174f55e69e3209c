//! Output rows produced by the analysis pipeline

use serde::{Deserialize, Serialize};

use super::DecisionKey;
use crate::enumerate::BitPattern;

/// One scored point of the decision space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    /// Bit `i` is the decision for `decision_order[i]`
    pub pattern: BitPattern,
    pub total_expected_value: f64,
}

impl CombinationResult {
    #[must_use]
    pub fn is_on(&self, position: usize) -> bool {
        self.pattern.bit(position)
    }
}

/// Marginal impact of keeping one activity versus never doing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoRow {
    pub activity: String,
    pub decision_key: DecisionKey,
    /// `expected_value(activity) - 0`
    pub impact: f64,
}

/// Which regime wins for a compared activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BetterOption {
    SelfManaged,
    Concession,
    Tie,
    /// Activity exists only in the self-managed scenario
    OnlySelf,
    /// Activity exists only in the concession scenario
    OnlyConcession,
}

impl BetterOption {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BetterOption::SelfManaged => "self-managed",
            BetterOption::Concession => "concession",
            BetterOption::Tie => "tie",
            BetterOption::OnlySelf => "only-self",
            BetterOption::OnlyConcession => "only-concession",
        }
    }
}

/// Per-activity pairing of expected values across two scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub activity: String,
    pub ev_self_managed: f64,
    pub ev_concession: f64,
    /// `ev_self_managed - ev_concession`
    pub difference: f64,
    pub better_option: BetterOption,
    pub advantage_self_managed: f64,
    pub advantage_concession: f64,
}

/// A headline strategy extracted from the ranked decision space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: String,
    /// Master decision value this strategy was drawn from, if any
    pub master: Option<bool>,
    pub pattern: BitPattern,
    pub total_expected_value: f64,
    pub selected_count: usize,
    pub selected_activities: Vec<String>,
}

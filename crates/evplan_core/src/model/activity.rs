use serde::{Deserialize, Serialize};

use super::DecisionKey;

/// One possible result of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub label: String,
    /// Probability in [0, 1]
    pub probability: f64,
    /// Currency amount; present or future value depending on the scenario's
    /// `ValueConvention`
    pub value: f64,
}

impl Outcome {
    pub fn new(label: impl Into<String>, probability: f64, value: f64) -> Self {
        Self {
            label: label.into(),
            probability,
            value,
        }
    }
}

/// Operating regime an activity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Run by a third party under a concession contract
    Concession,
    /// Run directly by the owner
    SelfManaged,
}

impl Regime {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Concession => "concession",
            Regime::SelfManaged => "self-managed",
        }
    }
}

/// A business activity with a discrete distribution of financial outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub decision_key: DecisionKey,
    pub horizon_years: u32,
    pub outcomes: Vec<Outcome>,
    /// `None` means the activity is eligible under either regime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regime: Option<Regime>,
}

impl Activity {
    /// Sum of outcome probabilities
    #[must_use]
    pub fn probability_sum(&self) -> f64 {
        self.outcomes.iter().map(|o| o.probability).sum()
    }

    /// Undiscounted probability-weighted value
    #[must_use]
    pub fn weighted_value(&self) -> f64 {
        self.outcomes.iter().map(|o| o.probability * o.value).sum()
    }

    /// Whether the activity may be kept when the master decision selects `regime`
    #[must_use]
    pub fn eligible_under(&self, regime: Regime) -> bool {
        self.regime.is_none_or(|r| r == regime)
    }
}

use serde::{Deserialize, Serialize};

use crate::model::DecisionKey;

/// Errors raised while building or enumerating a scenario.
///
/// Every structural inconsistency between the activity set and the decision
/// order is rejected here, before any combination is scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario {name:?} has no activities")]
    EmptyScenario { name: String },

    #[error("activity {key} has no outcomes")]
    EmptyOutcomes { key: DecisionKey },

    #[error("decision key {key} is used by more than one activity")]
    DuplicateDecisionKey { key: DecisionKey },

    #[error("decision order names {key}, which is neither an activity nor the master key")]
    UnknownDecisionKey { key: DecisionKey },

    #[error("activity {key} does not appear in the decision order")]
    MissingDecisionKey { key: DecisionKey },

    #[error("decision order has {decisions} activity slots but the scenario has {activities} activities")]
    DecisionOrderMismatch { activities: usize, decisions: usize },

    #[error("master key {key} must be the first entry of the decision order")]
    MisplacedMasterKey { key: DecisionKey },

    #[error("discount rate {rate} is outside [0, 1)")]
    InvalidDiscountRate { rate: f64 },

    #[error("outcome {label:?} of activity {key} has probability {probability} outside [0, 1]")]
    InvalidProbability {
        key: DecisionKey,
        label: String,
        probability: f64,
    },

    #[error("{count} decisions exceed the enumeration limit of {max}")]
    TooManyDecisions { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Non-fatal findings reported alongside an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScenarioWarning {
    /// Outcome probabilities of an activity do not sum to 1
    ProbabilitySum { key: DecisionKey, sum: f64 },
    /// The decision space is large enough that materializing it is costly
    LargeDecisionSpace { decisions: usize, combinations: u64 },
}

impl std::fmt::Display for ScenarioWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioWarning::ProbabilitySum { key, sum } => {
                write!(f, "outcome probabilities of {key} sum to {sum:.4}, expected 1.0")
            }
            ScenarioWarning::LargeDecisionSpace {
                decisions,
                combinations,
            } => write!(
                f,
                "{decisions} decisions produce {combinations} combinations; all are held in memory"
            ),
        }
    }
}

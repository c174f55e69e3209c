//! Expected-value engine
//!
//! The single financial-value function of the crate. Everything that needs
//! the worth of an activity goes through [`expected_value`].

use crate::enumerate::LARGE_DECISION_SPACE;
use crate::error::ScenarioWarning;
use crate::model::{Activity, Scenario, ValueConvention};

/// Tolerance for the outcome probability sum of an activity
pub const PROBABILITY_TOLERANCE: f64 = 1e-3;

/// Discount factor applied to a value received `horizon_years` from now.
///
/// Exactly 1 for present values and for a zero horizon.
#[must_use]
pub fn discount_factor(discount_rate: f64, horizon_years: u32, convention: ValueConvention) -> f64 {
    match convention {
        ValueConvention::PresentValue => 1.0,
        ValueConvention::FutureFlow if horizon_years == 0 => 1.0,
        ValueConvention::FutureFlow => {
            let exponent = i32::try_from(horizon_years).unwrap_or(i32::MAX);
            1.0 / (1.0 + discount_rate).powi(exponent)
        }
    }
}

/// Probability-weighted (and, for future flows, discounted) value of an activity.
///
/// Probabilities are not required to sum to 1 here; see [`validate_probabilities`].
#[must_use]
pub fn expected_value(activity: &Activity, discount_rate: f64, convention: ValueConvention) -> f64 {
    let factor = discount_factor(discount_rate, activity.horizon_years, convention);
    activity
        .outcomes
        .iter()
        .map(|o| o.probability * o.value * factor)
        .sum()
}

/// Report every activity whose outcome probabilities do not sum to 1.
#[must_use]
pub fn validate_probabilities(scenario: &Scenario) -> Vec<ScenarioWarning> {
    scenario
        .activities()
        .iter()
        .filter_map(|activity| {
            let sum = activity.probability_sum();
            ((sum - 1.0).abs() > PROBABILITY_TOLERANCE).then(|| ScenarioWarning::ProbabilitySum {
                key: activity.decision_key.clone(),
                sum,
            })
        })
        .collect()
}

/// All non-fatal findings for a scenario
#[must_use]
pub fn scenario_warnings(scenario: &Scenario) -> Vec<ScenarioWarning> {
    let mut warnings = validate_probabilities(scenario);
    let decisions = scenario.decision_order().len();
    if decisions > LARGE_DECISION_SPACE {
        warnings.push(ScenarioWarning::LargeDecisionSpace {
            decisions,
            combinations: 1u64 << decisions.min(63),
        });
    }
    warnings
}

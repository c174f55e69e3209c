//! Scenario Builder
//!
//! Fluent construction of scenarios. Decision keys are bound to activities by
//! name, and the decision order defaults to the master key (if any) followed by
//! the activities in the order they were added.

use super::ScenarioConfig;
use crate::error::Result;
use crate::model::{
    Activity, DEFAULT_DISCOUNT_RATE, DecisionKey, Outcome, Regime, Scenario, ValueConvention,
};

/// Builder for a single activity
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Start an activity with a display name and a decision key
    #[must_use]
    pub fn new(name: impl Into<String>, decision_key: impl Into<String>) -> Self {
        Self {
            activity: Activity {
                name: name.into(),
                decision_key: DecisionKey::new(decision_key),
                horizon_years: 0,
                outcomes: Vec::new(),
                regime: None,
            },
        }
    }

    #[must_use]
    pub fn horizon_years(mut self, years: u32) -> Self {
        self.activity.horizon_years = years;
        self
    }

    /// Append an outcome (label, probability, value)
    #[must_use]
    pub fn outcome(mut self, label: impl Into<String>, probability: f64, value: f64) -> Self {
        self.activity
            .outcomes
            .push(Outcome::new(label, probability, value));
        self
    }

    #[must_use]
    pub fn regime(mut self, regime: Regime) -> Self {
        self.activity.regime = Some(regime);
        self
    }

    #[must_use]
    pub fn concession(self) -> Self {
        self.regime(Regime::Concession)
    }

    #[must_use]
    pub fn self_managed(self) -> Self {
        self.regime(Regime::SelfManaged)
    }

    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}

/// Builder for a scenario
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    config: ScenarioConfig,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: ScenarioConfig {
                name: name.into(),
                discount_rate: DEFAULT_DISCOUNT_RATE,
                value_convention: ValueConvention::PresentValue,
                master_key: None,
                activities: Vec::new(),
                decision_order: None,
            },
        }
    }

    #[must_use]
    pub fn discount_rate(mut self, rate: f64) -> Self {
        self.config.discount_rate = rate;
        self
    }

    #[must_use]
    pub fn value_convention(mut self, convention: ValueConvention) -> Self {
        self.config.value_convention = convention;
        self
    }

    /// Outcome values are flows at the end of each activity's horizon
    #[must_use]
    pub fn future_flows(self) -> Self {
        self.value_convention(ValueConvention::FutureFlow)
    }

    /// Outcome values are already present values
    #[must_use]
    pub fn present_values(self) -> Self {
        self.value_convention(ValueConvention::PresentValue)
    }

    /// Prefix the decision order with a synthetic master decision
    #[must_use]
    pub fn master_key(mut self, key: impl Into<String>) -> Self {
        self.config.master_key = Some(DecisionKey::new(key));
        self
    }

    #[must_use]
    pub fn activity(mut self, activity: ActivityBuilder) -> Self {
        self.config.activities.push(activity.build());
        self
    }

    /// Override the bit order
    #[must_use]
    pub fn decision_order<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.config.decision_order = Some(keys.into_iter().map(DecisionKey::new).collect());
        self
    }

    /// Validate and build the scenario
    pub fn build(self) -> Result<Scenario> {
        self.config.into_scenario()
    }
}

//! Scenario configuration
//!
//! `ScenarioConfig` is the serializable shape of a scenario: activities,
//! discount rate, value convention and an optional decision order. It is
//! validated into a [`Scenario`] with [`ScenarioConfig::into_scenario`].
//!
//! # Builder DSL
//!
//! ```ignore
//! use evplan_core::config::{ActivityBuilder, ScenarioBuilder};
//!
//! let scenario = ScenarioBuilder::new("Park (combined)")
//!     .master_key("concession_for_everything")
//!     .activity(
//!         ActivityBuilder::new("Kayak - Propio", "kayak_own")
//!             .self_managed()
//!             .horizon_years(2)
//!             .outcome("Success", 0.25, 18_000.0)
//!             .outcome("Failure", 0.75, -9_000.0),
//!     )
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Activity, DEFAULT_DISCOUNT_RATE, DecisionKey, Scenario, ValueConvention};

pub mod builder;
pub mod presets;

pub use builder::{ActivityBuilder, ScenarioBuilder};

fn default_discount_rate() -> f64 {
    DEFAULT_DISCOUNT_RATE
}

/// Serializable scenario definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,

    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,

    #[serde(default)]
    pub value_convention: ValueConvention,

    /// Synthetic decision placed at bit 0 (e.g. "concession for everything")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_key: Option<DecisionKey>,

    pub activities: Vec<Activity>,

    /// Explicit bit order; defaults to the master key followed by the
    /// activities in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_order: Option<Vec<DecisionKey>>,
}

impl ScenarioConfig {
    /// The bit order that will be used for this configuration
    #[must_use]
    pub fn resolved_decision_order(&self) -> Vec<DecisionKey> {
        match &self.decision_order {
            Some(order) => order.clone(),
            None => self
                .master_key
                .iter()
                .cloned()
                .chain(self.activities.iter().map(|a| a.decision_key.clone()))
                .collect(),
        }
    }

    /// Validate into an immutable [`Scenario`]
    pub fn into_scenario(self) -> Result<Scenario> {
        let order = self.resolved_decision_order();
        Scenario::new(
            self.name,
            self.discount_rate,
            self.value_convention,
            self.activities,
            order,
            self.master_key,
        )
    }
}

impl From<&Scenario> for ScenarioConfig {
    fn from(scenario: &Scenario) -> Self {
        Self {
            name: scenario.name().to_string(),
            discount_rate: scenario.discount_rate(),
            value_convention: scenario.value_convention(),
            master_key: scenario.master_key().cloned(),
            activities: scenario.activities().to_vec(),
            decision_order: Some(scenario.decision_keys().cloned().collect()),
        }
    }
}

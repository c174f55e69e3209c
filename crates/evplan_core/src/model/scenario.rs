use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::{Activity, DecisionKey};
use crate::error::{Result, ScenarioError};
use crate::evaluate::expected_value;

pub const DEFAULT_DISCOUNT_RATE: f64 = 0.12;

/// How the `value` field of every outcome in a scenario is to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueConvention {
    /// Values are already present values; no discounting is applied
    #[default]
    PresentValue,
    /// Values are flows at the end of the activity horizon and are discounted
    /// by `(1 + rate)^horizon_years`
    FutureFlow,
}

/// One bit position of the decision space
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DecisionSlot {
    /// Synthetic decision with no activity behind it (contributes zero value)
    Master(DecisionKey),
    Activity(DecisionKey),
}

impl DecisionSlot {
    #[must_use]
    pub fn key(&self) -> &DecisionKey {
        match self {
            DecisionSlot::Master(key) | DecisionSlot::Activity(key) => key,
        }
    }

    #[must_use]
    pub fn is_master(&self) -> bool {
        matches!(self, DecisionSlot::Master(_))
    }
}

/// A named, validated set of activities evaluated under one operating regime.
///
/// Activities are held as an ordered mapping from decision key to activity.
/// The decision order is resolved against that mapping once, here, so every
/// bit position is bound to its activity by key rather than by list position.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    name: String,
    discount_rate: f64,
    value_convention: ValueConvention,
    activities: Vec<Activity>,
    decision_order: Vec<DecisionSlot>,
    #[serde(skip)]
    index: FxHashMap<DecisionKey, usize>,
}

impl Scenario {
    /// Validate and assemble a scenario.
    ///
    /// `decision_order` may start with `master_key`; every other entry must be
    /// an activity key, and every activity must appear exactly once.
    pub fn new(
        name: impl Into<String>,
        discount_rate: f64,
        value_convention: ValueConvention,
        activities: Vec<Activity>,
        decision_order: Vec<DecisionKey>,
        master_key: Option<DecisionKey>,
    ) -> Result<Self> {
        let name = name.into();
        if activities.is_empty() {
            return Err(ScenarioError::EmptyScenario { name });
        }
        if !discount_rate.is_finite() || !(0.0..1.0).contains(&discount_rate) {
            return Err(ScenarioError::InvalidDiscountRate {
                rate: discount_rate,
            });
        }

        let mut index = FxHashMap::default();
        for (i, activity) in activities.iter().enumerate() {
            validate_outcomes(activity)?;
            if index.insert(activity.decision_key.clone(), i).is_some() {
                return Err(ScenarioError::DuplicateDecisionKey {
                    key: activity.decision_key.clone(),
                });
            }
        }

        let slots = resolve_order(&index, decision_order, master_key.as_ref())?;

        let decisions = slots.iter().filter(|slot| !slot.is_master()).count();
        if decisions != activities.len() {
            let placed: FxHashSet<&DecisionKey> = slots.iter().map(DecisionSlot::key).collect();
            if let Some(missing) = activities
                .iter()
                .find(|a| !placed.contains(&a.decision_key))
            {
                return Err(ScenarioError::MissingDecisionKey {
                    key: missing.decision_key.clone(),
                });
            }
            return Err(ScenarioError::DecisionOrderMismatch {
                activities: activities.len(),
                decisions,
            });
        }

        Ok(Self {
            name,
            discount_rate,
            value_convention,
            activities,
            decision_order: slots,
            index,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    #[must_use]
    pub fn value_convention(&self) -> ValueConvention {
        self.value_convention
    }

    /// Activities in declaration order
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    #[must_use]
    pub fn decision_order(&self) -> &[DecisionSlot] {
        &self.decision_order
    }

    /// Decision keys in bit order
    pub fn decision_keys(&self) -> impl Iterator<Item = &DecisionKey> {
        self.decision_order.iter().map(DecisionSlot::key)
    }

    #[must_use]
    pub fn master_key(&self) -> Option<&DecisionKey> {
        self.decision_order
            .first()
            .filter(|slot| slot.is_master())
            .map(DecisionSlot::key)
    }

    #[must_use]
    pub fn activity(&self, key: &str) -> Option<&Activity> {
        self.index.get(key).map(|&i| &self.activities[i])
    }

    /// Activity bound to a decision slot (`None` for the master slot)
    #[must_use]
    pub fn slot_activity(&self, slot: &DecisionSlot) -> Option<&Activity> {
        match slot {
            DecisionSlot::Master(_) => None,
            DecisionSlot::Activity(key) => self.activity(key.as_str()),
        }
    }

    /// Expected value of one activity under this scenario's convention
    #[must_use]
    pub fn expected_value(&self, key: &str) -> Option<f64> {
        self.activity(key).map(|a| self.expected_value_of(a))
    }

    #[must_use]
    pub fn expected_value_of(&self, activity: &Activity) -> f64 {
        expected_value(activity, self.discount_rate, self.value_convention)
    }

    /// `(activity, expected value)` pairs in declaration order
    #[must_use]
    pub fn expected_values(&self) -> Vec<(&Activity, f64)> {
        self.activities
            .iter()
            .map(|a| (a, self.expected_value_of(a)))
            .collect()
    }

    /// Expected value per bit position; master slots are worth exactly zero
    #[must_use]
    pub fn slot_values(&self) -> Vec<f64> {
        self.decision_order
            .iter()
            .map(|slot| {
                self.slot_activity(slot)
                    .map_or(0.0, |a| self.expected_value_of(a))
            })
            .collect()
    }
}

fn validate_outcomes(activity: &Activity) -> Result<()> {
    if activity.outcomes.is_empty() {
        return Err(ScenarioError::EmptyOutcomes {
            key: activity.decision_key.clone(),
        });
    }
    for outcome in &activity.outcomes {
        if !(0.0..=1.0).contains(&outcome.probability) {
            return Err(ScenarioError::InvalidProbability {
                key: activity.decision_key.clone(),
                label: outcome.label.clone(),
                probability: outcome.probability,
            });
        }
    }
    Ok(())
}

fn resolve_order(
    index: &FxHashMap<DecisionKey, usize>,
    decision_order: Vec<DecisionKey>,
    master_key: Option<&DecisionKey>,
) -> Result<Vec<DecisionSlot>> {
    if let Some(master) = master_key {
        if index.contains_key(master) {
            return Err(ScenarioError::DuplicateDecisionKey {
                key: master.clone(),
            });
        }
        if decision_order.first() != Some(master) {
            return Err(ScenarioError::MisplacedMasterKey {
                key: master.clone(),
            });
        }
    }

    let mut seen = FxHashSet::default();
    let mut slots = Vec::with_capacity(decision_order.len());
    for (position, key) in decision_order.into_iter().enumerate() {
        if !seen.insert(key.clone()) {
            return Err(ScenarioError::DuplicateDecisionKey { key });
        }
        if master_key == Some(&key) {
            // Only position 0 can reach here; any later repeat is a duplicate
            debug_assert_eq!(position, 0);
            slots.push(DecisionSlot::Master(key));
        } else if index.contains_key(&key) {
            slots.push(DecisionSlot::Activity(key));
        } else {
            return Err(ScenarioError::UnknownDecisionKey { key });
        }
    }
    Ok(slots)
}

//! Combination enumerator
//!
//! Walks the full binary decision space `{0,1}^n` in binary counting order,
//! starting from all-zero. Bit `i` of a pattern is the decision for
//! `decision_order[i]`, so for the order `["a", "b"]` the sequence is
//! `{a:0,b:0}`, `{a:1,b:0}`, `{a:0,b:1}`, `{a:1,b:1}`.
//!
//! Scoring is O(n) per pattern and the full table is O(2^n) in memory, which
//! is why the decision count is capped at [`MAX_DECISIONS`].

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};
use crate::model::{CombinationResult, DecisionKey, Scenario};

/// Hard limit on the number of binary decisions
pub const MAX_DECISIONS: usize = 24;

/// Decision counts above this are enumerated but reported as a scaling warning
pub const LARGE_DECISION_SPACE: usize = 14;

/// A point of the decision space; bit `i` belongs to `decision_order[i]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitPattern(pub u64);

impl BitPattern {
    #[must_use]
    pub fn bit(&self, position: usize) -> bool {
        position < 64 && (self.0 >> position) & 1 == 1
    }

    /// Number of decisions switched on
    #[must_use]
    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Decisions as 0/1 values for `width` positions
    #[must_use]
    pub fn bits(&self, width: usize) -> Vec<u8> {
        (0..width).map(|i| u8::from(self.bit(i))).collect()
    }

    /// Positions that are switched on, ascending
    pub fn ones(&self, width: usize) -> impl Iterator<Item = usize> + '_ {
        (0..width).filter(move |&i| self.bit(i))
    }
}

/// One enumerated assignment, viewed as a `decision key -> bit` mapping
#[derive(Debug, Clone, Copy)]
pub struct Combination<'a> {
    pub pattern: BitPattern,
    keys: &'a [DecisionKey],
}

impl<'a> Combination<'a> {
    /// Decision for `key`, or `None` if the key is not part of the order
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        self.keys
            .iter()
            .position(|k| k.as_str() == key)
            .map(|i| self.pattern.bit(i))
    }

    /// `(key, decision)` pairs in decision order
    pub fn iter(&self) -> impl Iterator<Item = (&'a DecisionKey, bool)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key, self.pattern.bit(i)))
    }
}

/// Lazy sequence over every assignment of a decision order
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    keys: &'a [DecisionKey],
    next: u64,
    end: u64,
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let pattern = BitPattern(self.next);
        self.next += 1;
        Some(Combination {
            pattern,
            keys: self.keys,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

/// Number of combinations for `decisions` binary decisions
pub fn combination_count(decisions: usize) -> Result<u64> {
    if decisions > MAX_DECISIONS {
        return Err(ScenarioError::TooManyDecisions {
            count: decisions,
            max: MAX_DECISIONS,
        });
    }
    Ok(1u64 << decisions)
}

/// Enumerate all `2^n` assignments of `decision_order`.
pub fn enumerate(decision_order: &[DecisionKey]) -> Result<Combinations<'_>> {
    let end = combination_count(decision_order.len())?;
    Ok(Combinations {
        keys: decision_order,
        next: 0,
        end,
    })
}

/// Sum of the slot values whose bit is on.
///
/// `slot_values[i]` must be the value of `decision_order[i]`. An empty
/// selection scores positive zero.
#[must_use]
pub fn score(pattern: BitPattern, slot_values: &[f64]) -> f64 {
    slot_values
        .iter()
        .enumerate()
        .filter(|&(i, _)| pattern.bit(i))
        .fold(0.0, |total, (_, value)| total + value)
}

/// Score every combination of an explicit order/value pairing.
///
/// The two slices must have the same length; this is the one place a caller
/// can hand in positionally aligned data, so the lengths are checked.
pub fn evaluate_aligned(
    decision_order: &[DecisionKey],
    slot_values: &[f64],
) -> Result<Vec<CombinationResult>> {
    if decision_order.len() != slot_values.len() {
        return Err(ScenarioError::DecisionOrderMismatch {
            activities: slot_values.len(),
            decisions: decision_order.len(),
        });
    }
    let total = combination_count(decision_order.len())?;
    Ok(score_all(total, slot_values))
}

/// Score every combination of a scenario's decision space, in enumeration order.
pub fn evaluate_combinations(scenario: &Scenario) -> Result<Vec<CombinationResult>> {
    let total = combination_count(scenario.decision_order().len())?;
    Ok(score_all(total, &scenario.slot_values()))
}

fn score_one(index: usize, slot_values: &[f64]) -> CombinationResult {
    let pattern = BitPattern(index as u64);
    CombinationResult {
        pattern,
        total_expected_value: score(pattern, slot_values),
    }
}

fn score_all(total: u64, slot_values: &[f64]) -> Vec<CombinationResult> {
    // Bounded by 2^MAX_DECISIONS
    let total = total as usize;

    // Each pattern is scored from immutable inputs; output order is the index order
    #[cfg(feature = "parallel")]
    let results = (0..total)
        .into_par_iter()
        .map(|index| score_one(index, slot_values))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = (0..total)
        .map(|index| score_one(index, slot_values))
        .collect();

    results
}

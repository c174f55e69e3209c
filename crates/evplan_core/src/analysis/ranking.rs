//! Ranking of scored combinations

use serde::{Deserialize, Serialize};

use crate::model::CombinationResult;

/// Default size of the best/worst views
pub const DEFAULT_VIEW_SIZE: usize = 10;

/// Sort key with signed zeros folded together, so `-0.0` ties with `0.0`
fn rank_key(row: &CombinationResult) -> f64 {
    row.total_expected_value + 0.0
}

/// All combinations sorted by total expected value, best first.
///
/// Ties keep their enumeration order. Top and bottom views are slices of this
/// one sorted table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankedCombinations {
    rows: Vec<CombinationResult>,
}

impl RankedCombinations {
    /// Rank results given in enumeration order
    #[must_use]
    pub fn new(mut results: Vec<CombinationResult>) -> Self {
        // `sort_by` is stable, which keeps enumeration order among equal totals
        results.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));
        Self { rows: results }
    }

    #[must_use]
    pub fn rows(&self) -> &[CombinationResult] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn best(&self) -> Option<&CombinationResult> {
        self.rows.first()
    }

    #[must_use]
    pub fn worst(&self) -> Option<&CombinationResult> {
        self.rows.last()
    }

    /// The `k` best combinations, best first
    #[must_use]
    pub fn top(&self, k: usize) -> &[CombinationResult] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// The `k` worst combinations, worst first
    pub fn bottom(&self, k: usize) -> impl Iterator<Item = &CombinationResult> {
        let start = self.rows.len().saturating_sub(k);
        self.rows[start..].iter().rev()
    }

    /// Best row satisfying `predicate`
    pub fn best_where<F>(&self, predicate: F) -> Option<&CombinationResult>
    where
        F: Fn(&CombinationResult) -> bool,
    {
        self.rows.iter().find(|row| predicate(row))
    }
}

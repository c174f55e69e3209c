//! Ranking and sensitivity analysis over an enumerated decision space.
//!
//! Everything here is derived from a scored combination table or from a
//! scenario's per-activity expected values:
//!
//! ```ignore
//! use evplan_core::analysis::{RankedCombinations, tornado, compare_scenarios, MatchRule};
//!
//! let results = evaluate_combinations(&scenario)?;
//! let ranked = RankedCombinations::new(results);
//! let best_ten = ranked.top(10);
//!
//! let swings = tornado(&scenario);
//! let rows = compare_scenarios(&self_managed, &concession, &MatchRule::default());
//! ```
//!
//! The decision tree is a layered graph (one layer per activity) intended for
//! diagram emitters; it is not used for scoring.

mod comparison;
mod ranking;
mod summary;
mod tornado;
mod tree;

pub use comparison::*;
pub use ranking::*;
pub use summary::*;
pub use tornado::*;
pub use tree::*;

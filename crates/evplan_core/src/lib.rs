//! Expected-value decision analysis library
//!
//! This crate evaluates binary keep/drop decisions over a set of business
//! activities, each modelled as a discrete distribution of NPV outcomes.
//! It supports:
//! - Present-value and future-flow outcome conventions with discounting
//! - Exhaustive enumeration of the 2^n decision space
//! - Ranking, top/bottom views and tornado (marginal impact) tables
//! - Cross-scenario comparison (self-managed vs concession)
//! - Headline strategy summaries over a synthetic master decision
//! - A layered decision-tree graph for diagram emitters
//!
//! # Builder DSL
//!
//! ```ignore
//! use evplan_core::config::{ActivityBuilder, ScenarioBuilder};
//!
//! let scenario = ScenarioBuilder::new("Concession")
//!     .discount_rate(0.06)
//!     .future_flows()
//!     .activity(
//!         ActivityBuilder::new("Kayak", "kayak")
//!             .horizon_years(2)
//!             .outcome("Success", 0.25, 1_125_000.0)
//!             .outcome("Neutral", 0.4375, 562_500.0)
//!             .outcome("Failure", 0.3125, 187_500.0),
//!     )
//!     .build()?;
//!
//! let analysis = evplan_core::pipeline::analyze(&scenario)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod enumerate;
pub mod error;
pub mod evaluate;
pub mod pipeline;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ActivityBuilder, ScenarioBuilder};
pub use error::{ScenarioError, ScenarioWarning};
pub use model::{Activity, DecisionKey, Outcome, Regime, Scenario, ValueConvention};
pub use pipeline::{ScenarioAnalysis, analyze, compare};

//! Command-line front end for the evplan decision analysis engine
//!
//! Loads scenarios from YAML files or built-in presets, runs the analysis
//! pipeline from `evplan_core`, prints a console report and exports CSV,
//! JSON and Graphviz files into an output directory.

// ============================================================================
// Run orchestration
// ============================================================================

pub mod app;
pub mod logging;

// ============================================================================
// Inputs and outputs
// ============================================================================

pub mod output;
pub mod report;
pub mod scenario_file;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::{RunConfig, RunOutcome, run};
pub use logging::init_logging;
pub use output::OutputDir;
pub use scenario_file::{ScenarioFile, ScenarioFileError, ScenarioSource};

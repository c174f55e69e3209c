//! Report emitters
//!
//! Every emitter renders to a `String`; [`export_analysis`] and
//! [`export_comparison`] write them into the output directory atomically.

pub mod console;
pub mod csv;
pub mod dot;
pub mod json;

use std::io;
use std::path::PathBuf;

use evplan_core::model::ComparisonRow;
use evplan_core::{Scenario, ScenarioAnalysis};
use jiff::Timestamp;

use crate::output::OutputDir;
use crate::util::io::atomic_write;

/// Write every per-scenario export, returning the paths written
pub fn export_analysis(
    dir: &OutputDir,
    scenario: &Scenario,
    analysis: &ScenarioAnalysis,
    view_size: usize,
) -> io::Result<Vec<PathBuf>> {
    dir.ensure()?;
    let name = scenario.name();

    let json = json::AnalysisExport::new(scenario, analysis, view_size, Timestamp::now()).to_json()?;
    let files = [
        (dir.combinations_path(name), csv::combinations_csv(analysis)),
        (dir.tornado_path(name), csv::tornado_csv(&analysis.tornado)),
        (dir.summary_path(name), csv::summary_csv(&analysis.summary)),
        (
            dir.decision_tree_path(name),
            dot::decision_tree_dot(&analysis.tree, name),
        ),
        (dir.analysis_path(name), json),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        atomic_write(&path, &content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Export written");
        written.push(path);
    }
    Ok(written)
}

/// Write the comparison table
pub fn export_comparison(dir: &OutputDir, rows: &[ComparisonRow]) -> io::Result<PathBuf> {
    dir.ensure()?;
    let path = dir.comparison_path();
    atomic_write(&path, &csv::comparison_csv(rows))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Comparison written");
    Ok(path)
}

//! One command-line run: load scenarios, analyze, compare, report, export.

use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use evplan_core::analysis::{DEFAULT_VIEW_SIZE, MatchRule, compare_regimes};
use evplan_core::model::{ComparisonRow, Regime};
use evplan_core::{Scenario, ScenarioAnalysis, analyze, compare};

use crate::output::{DEFAULT_OUTPUT_DIR, OutputDir};
use crate::report::{self, console};
use crate::scenario_file::ScenarioSource;

/// Preset analyzed when no scenario is named
pub const DEFAULT_PRESET: &str = evplan_core::config::presets::PARK_COMBINED;

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sources: Vec<ScenarioSource>,
    pub compare: bool,
    pub match_rule: MatchRule,
    pub view_size: usize,
    pub output: OutputDir,
    pub export: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sources: vec![ScenarioSource::Preset(DEFAULT_PRESET.to_string())],
            compare: false,
            match_rule: MatchRule::default(),
            view_size: DEFAULT_VIEW_SIZE,
            output: OutputDir::new(DEFAULT_OUTPUT_DIR),
            export: true,
        }
    }
}

/// Result of a run
#[derive(Debug)]
pub struct RunOutcome {
    pub analyses: Vec<(Scenario, ScenarioAnalysis)>,
    pub comparison: Option<Vec<ComparisonRow>>,
    /// Console report text
    pub report: String,
    pub written: Vec<PathBuf>,
}

fn has_both_regimes(scenario: &Scenario) -> bool {
    let tagged = |regime| scenario.activities().iter().any(|a| a.regime == Some(regime));
    tagged(Regime::SelfManaged) && tagged(Regime::Concession)
}

/// Comparison requested with `--compare`.
///
/// Two or more scenarios compare the first (self-managed) against the second
/// (concession); a single scenario compares its regime-tagged halves.
fn requested_comparison(analyses: &[(Scenario, ScenarioAnalysis)], rule: &MatchRule) -> Option<Vec<ComparisonRow>> {
    match analyses {
        [(own, _), (con, _), rest @ ..] => {
            if !rest.is_empty() {
                tracing::warn!(
                    ignored = rest.len(),
                    "Only the first two scenarios are compared"
                );
            }
            tracing::info!(self_managed = own.name(), concession = con.name(), "Comparing scenarios");
            Some(compare(own, con, rule))
        }
        [(scenario, _)] if has_both_regimes(scenario) => {
            tracing::info!(scenario = scenario.name(), "Comparing regime-tagged activities");
            Some(compare_regimes(scenario, rule))
        }
        _ => {
            tracing::warn!("Nothing to compare: pass two scenarios or one with both regimes tagged");
            None
        }
    }
}

/// Execute a run
pub fn run(config: &RunConfig) -> color_eyre::Result<RunOutcome> {
    let mut analyses = Vec::with_capacity(config.sources.len());
    let mut text = String::new();
    let mut written = Vec::new();

    for source in &config.sources {
        let origin = source.describe();
        let scenario = source
            .load()
            .wrap_err_with(|| format!("Failed to load scenario from {origin}"))?;
        tracing::info!(
            scenario = scenario.name(),
            origin = %origin,
            activities = scenario.activities().len(),
            decisions = scenario.decision_order().len(),
            "Scenario loaded"
        );

        let analysis = analyze(&scenario)
            .wrap_err_with(|| format!("Failed to analyze scenario {:?}", scenario.name()))?;
        for warning in &analysis.warnings {
            tracing::warn!(scenario = scenario.name(), "{warning}");
        }
        if let Some(best) = analysis.ranked.best() {
            tracing::info!(
                scenario = scenario.name(),
                combinations = analysis.combination_count(),
                best_total = best.total_expected_value,
                "Scenario analyzed"
            );
        }

        text.push_str(&console::render_analysis(&scenario, &analysis, config.view_size));
        text.push('\n');

        if config.export {
            let paths = report::export_analysis(&config.output, &scenario, &analysis, config.view_size)
                .wrap_err_with(|| format!("Failed to export results for {:?}", scenario.name()))?;
            written.extend(paths);
        }
        analyses.push((scenario, analysis));
    }

    let comparison = if config.compare {
        requested_comparison(&analyses, &config.match_rule)
    } else {
        None
    };
    if let Some(rows) = &comparison {
        text.push_str(&console::render_comparison(rows));
        if config.export {
            let path = report::export_comparison(&config.output, rows)
                .wrap_err("Failed to export comparison")?;
            written.push(path);
        }
    }

    Ok(RunOutcome {
        analyses,
        comparison,
        report: text,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use evplan_core::model::BetterOption;
    use tempfile::TempDir;

    use crate::scenario_file::ScenarioFile;

    fn preset(name: &str) -> ScenarioSource {
        ScenarioSource::Preset(name.to_string())
    }

    #[test]
    fn test_compare_regime_presets() {
        let temp_dir = TempDir::new().unwrap();
        let config = RunConfig {
            sources: vec![preset("self-managed"), preset("concession")],
            compare: true,
            match_rule: MatchRule::ExactName,
            output: OutputDir::new(temp_dir.path()),
            ..RunConfig::default()
        };

        let outcome = run(&config).unwrap();
        assert_eq!(outcome.analyses.len(), 2);
        let rows = outcome.comparison.unwrap();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().any(|r| r.better_option == BetterOption::Concession));

        // 5 exports per scenario plus the comparison table
        assert_eq!(outcome.written.len(), 11);
        assert!(temp_dir.path().join("comparison.csv").is_file());
        assert!(outcome.report.contains("Self-managed vs concession"));
    }

    #[test]
    fn test_no_export_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = RunConfig {
            sources: vec![preset("self-managed")],
            compare: true,
            export: false,
            output: OutputDir::new(temp_dir.path().join("never")),
            ..RunConfig::default()
        };

        let outcome = run(&config).unwrap();
        assert!(outcome.written.is_empty());
        assert!(outcome.comparison.is_none());
        assert!(!temp_dir.path().join("never").exists());
    }

    #[test]
    fn test_scenario_file_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("own.yaml");
        let scenario = evplan_core::config::presets::self_managed().unwrap();
        ScenarioFile::from(&scenario).save(&path).unwrap();

        let config = RunConfig {
            sources: vec![ScenarioSource::File(path)],
            export: false,
            ..RunConfig::default()
        };
        let outcome = run(&config).unwrap();
        let (loaded, analysis) = &outcome.analyses[0];
        assert_eq!(loaded.name(), "Self-managed");
        assert_eq!(analysis.combination_count(), 512);
    }

    #[test]
    fn test_unknown_preset_fails_with_context() {
        let config = RunConfig {
            sources: vec![preset("missing")],
            export: false,
            ..RunConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("preset missing"));
    }
}

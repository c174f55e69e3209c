//! Output directory layout
//!
//! ```text
//! results/
//!   evplan.log
//!   comparison.csv
//!   park_combined_combinations.csv
//!   park_combined_tornado.csv
//!   park_combined_summary.csv
//!   park_combined_decision_tree.dot
//!   park_combined_analysis.json
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "results";

pub const COMPARISON_FILE: &str = "comparison.csv";

/// Manages the directory all exports are written into
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory if it does not exist yet
    pub fn ensure(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    fn scenario_file(&self, scenario: &str, suffix: &str) -> PathBuf {
        self.root.join(format!("{}_{suffix}", file_stem(scenario)))
    }

    pub fn combinations_path(&self, scenario: &str) -> PathBuf {
        self.scenario_file(scenario, "combinations.csv")
    }

    pub fn tornado_path(&self, scenario: &str) -> PathBuf {
        self.scenario_file(scenario, "tornado.csv")
    }

    pub fn summary_path(&self, scenario: &str) -> PathBuf {
        self.scenario_file(scenario, "summary.csv")
    }

    pub fn decision_tree_path(&self, scenario: &str) -> PathBuf {
        self.scenario_file(scenario, "decision_tree.dot")
    }

    pub fn analysis_path(&self, scenario: &str) -> PathBuf {
        self.scenario_file(scenario, "analysis.json")
    }

    pub fn comparison_path(&self) -> PathBuf {
        self.root.join(COMPARISON_FILE)
    }
}

/// File-name-safe, lowercase form of a scenario name
pub fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.trim().chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || c == '-' {
            stem.push(c);
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "scenario".to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Park (combined)"), "park_combined");
        assert_eq!(file_stem("Self-managed"), "self-managed");
        assert_eq!(file_stem("Concesión 2025"), "concesión_2025");
        assert_eq!(file_stem("  ///  "), "scenario");
    }

    #[test]
    fn test_paths() {
        let dir = OutputDir::new("results");
        assert_eq!(
            dir.tornado_path("Park (combined)"),
            PathBuf::from("results/park_combined_tornado.csv")
        );
        assert_eq!(dir.comparison_path(), PathBuf::from("results/comparison.csv"));
    }

    #[test]
    fn test_ensure_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = OutputDir::new(temp_dir.path().join("a").join("b"));
        dir.ensure().unwrap();
        assert!(dir.root().is_dir());
        dir.ensure().unwrap();
    }
}

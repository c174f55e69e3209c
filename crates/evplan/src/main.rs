use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use evplan::output::DEFAULT_OUTPUT_DIR;
use evplan::util::io::expand_home;
use evplan::{OutputDir, RunConfig, ScenarioSource, init_logging, run};
use evplan_core::analysis::{DEFAULT_VIEW_SIZE, MatchRule};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MatchRuleArg {
    /// Activity names must be identical
    Exact,
    /// Strip regime suffixes such as " - Propio" / " - Concesión" first
    StripSuffix,
}

impl From<MatchRuleArg> for MatchRule {
    fn from(arg: MatchRuleArg) -> Self {
        match arg {
            MatchRuleArg::Exact => MatchRule::ExactName,
            MatchRuleArg::StripSuffix => MatchRule::default(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "evplan")]
#[command(about = "Expected-value analysis of keep/drop decisions across park activities")]
struct Args {
    /// Scenario YAML file (repeatable)
    #[arg(short, long = "scenario", value_name = "FILE")]
    scenarios: Vec<PathBuf>,

    /// Built-in preset: self-managed, concession, park-combined (repeatable)
    #[arg(short, long = "preset", value_name = "NAME")]
    presets: Vec<String>,

    /// Compare the first two scenarios (or the regime halves of a single one)
    #[arg(short, long)]
    compare: bool,

    /// How activity names are matched when comparing
    #[arg(long, value_enum, default_value = "strip-suffix")]
    match_rule: MatchRuleArg,

    /// Number of best and worst combinations to show
    #[arg(short, long, default_value_t = DEFAULT_VIEW_SIZE)]
    top: usize,

    /// Directory for exports and the log file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the report without writing export files
    #[arg(long)]
    no_export: bool,
}

impl Args {
    fn sources(&self) -> Vec<ScenarioSource> {
        let files = self
            .scenarios
            .iter()
            .map(|path| ScenarioSource::File(expand_home(path)));
        let presets = self.presets.iter().cloned().map(ScenarioSource::Preset);
        files.chain(presets).collect()
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let output = OutputDir::new(expand_home(&args.output_dir));

    // No log file under --no-export
    let log_dir = (!args.no_export).then(|| output.root());
    let _log_guard = init_logging(log_dir, &args.log_level)
        .wrap_err_with(|| format!("Failed to initialize logging in {}", output.root().display()))?;

    let mut config = RunConfig {
        compare: args.compare,
        match_rule: args.match_rule.into(),
        view_size: args.top,
        output,
        export: !args.no_export,
        ..RunConfig::default()
    };
    let sources = args.sources();
    if !sources.is_empty() {
        config.sources = sources;
    }

    tracing::info!(
        scenarios = config.sources.len(),
        compare = config.compare,
        output_dir = %config.output.root().display(),
        "evplan starting"
    );

    let outcome = run(&config)?;
    print!("{}", outcome.report);

    if !outcome.written.is_empty() {
        println!("\nFiles written to {}:", config.output.root().display());
        for path in &outcome.written {
            println!(" - {}", path.display());
        }
    }

    tracing::info!(files = outcome.written.len(), "evplan finished");
    Ok(())
}

//! bescore Evaluation Tool
//!
//! Scores peer (machine) summaries, and optionally the reference summaries
//! themselves, from a JSON dataset of pre-extracted basic elements.
//!
//! # Usage
//!
//! ```bash
//! # Score peers with the default binary tally and jackknife combiner
//! cargo run -p bescore-eval --release -- data/topics.json
//!
//! # Weight BEs by how many references share them
//! cargo run -p bescore-eval --release -- data/topics.json --tally log
//!
//! # Include the references, each scored against the others
//! cargo run -p bescore-eval --release -- data/topics.json --include-models
//!
//! # Output JSON for analysis
//! cargo run -p bescore-eval --release -- data/topics.json --json
//! ```

mod datasets;
mod report;
mod scoring;

use anyhow::Result;
use bescore_core::config::{DEFAULT_COMBINER, DEFAULT_TALLY};
use bescore_core::evaluation::{Combiner, EvalConfig, Evaluator, TallyFunction};
use clap::{Parser, ValueEnum};
use datasets::load_dataset;
use report::EvalReport;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TallyArg {
    Binary,
    Log,
    #[value(alias = "sqrt")]
    Root,
    Total,
    #[value(name = "be_length", alias = "length")]
    BeLength,
}

impl From<TallyArg> for TallyFunction {
    fn from(arg: TallyArg) -> Self {
        match arg {
            TallyArg::Binary => Self::Binary,
            TallyArg::Log => Self::Log,
            TallyArg::Root => Self::Root,
            TallyArg::Total => Self::Total,
            TallyArg::BeLength => Self::BeLength,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CombinerArg {
    Jackknife,
    #[value(alias = "mean")]
    Average,
}

impl From<CombinerArg> for Combiner {
    fn from(arg: CombinerArg) -> Self {
        match arg {
            CombinerArg::Jackknife => Self::Jackknife,
            CombinerArg::Average => Self::Average,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bescore-eval", version)]
#[command(about = "Score summaries by basic-element overlap with reference summaries")]
struct Args {
    /// Dataset JSON file
    dataset: PathBuf,

    /// Tally function
    #[arg(long, value_enum, default_value = DEFAULT_TALLY)]
    tally: TallyArg,

    /// Combiner for per-reference scores
    #[arg(long, value_enum, default_value = DEFAULT_COMBINER)]
    combiner: CombinerArg,

    /// Also score each reference summary against the others
    #[arg(long)]
    include_models: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = EvalConfig::new(args.tally.into(), args.combiner.into());
    let dataset = load_dataset(&args.dataset)?;
    info!(
        topics = dataset.num_topics(),
        references = dataset.num_references(),
        peers = dataset.num_peers(),
        "Loaded dataset"
    );

    let evaluator = Evaluator::new(config);
    let rows = scoring::score_dataset(&evaluator, &dataset, args.include_models)?;
    let report = EvalReport::new(config, &dataset, rows);

    let output = if args.json {
        report::format_json(&report)
    } else {
        report::format_human(&report)
    };
    println!("{}", output);

    Ok(())
}

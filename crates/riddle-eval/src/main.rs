//! Runs a labeled dataset through the judge and reports accuracy per
//! strategy, optionally dumping v10 feature rows for offline training.

mod logging;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use riddle_core::config::JudgeStrategy;
use riddle_core::RiddleConfig;
use riddle_judge::evaluation::{feature_records, EvaluationReport};
use riddle_judge::{evaluate, Dataset, JudgeEngine};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Heuristic,
    Learned,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> Vec<JudgeStrategy> {
        match self {
            StrategyArg::Heuristic => vec![JudgeStrategy::Heuristic],
            StrategyArg::Learned => vec![JudgeStrategy::Learned],
            StrategyArg::Both => vec![JudgeStrategy::Heuristic, JudgeStrategy::Learned],
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "riddle-eval", about = "Evaluate question judgment on a labeled dataset")]
struct Args {
    /// Labeled dataset (JSON).
    #[arg(long)]
    dataset: PathBuf,

    /// Engine configuration (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// Write v10 feature rows as JSON lines.
    #[arg(long)]
    features_out: Option<PathBuf>,

    /// List every misjudged question.
    #[arg(long)]
    show_misses: bool,

    /// Log as JSON.
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.json_logs);

    let config = match &args.config {
        Some(path) => RiddleConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RiddleConfig::default(),
    };
    let dataset = Dataset::load(&args.dataset)
        .with_context(|| format!("loading dataset {}", args.dataset.display()))?;
    info!(
        puzzles = dataset.puzzles.len(),
        cases = dataset.case_count(),
        "dataset loaded"
    );

    let engine = JudgeEngine::new(config).context("building judge engine")?;

    for strategy in args.strategy.strategies() {
        let report = evaluate(&engine, &dataset, strategy);
        print_report(&report, args.show_misses);
    }

    if let Some(path) = &args.features_out {
        let rows = write_features(&engine, &dataset, path)?;
        println!("wrote {rows} feature rows to {}", path.display());
    }
    Ok(())
}

fn print_report(report: &EvaluationReport, show_misses: bool) {
    println!("{report}");
    if show_misses {
        for miss in &report.misses {
            println!(
                "  [{}] {:?}: expected {}, got {}",
                miss.puzzle_id, miss.question, miss.expected, miss.actual
            );
        }
        println!();
    }
}

fn write_features(engine: &JudgeEngine, dataset: &Dataset, path: &Path) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let records = feature_records(engine, dataset);
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(records.len())
}

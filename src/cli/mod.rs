//! # CLI Module
//!
//! Command-line interface for the plate similarity scorer.
//!
//! ## Usage
//! ```bash
//! # Full analysis of one pair
//! plate-match compare MH12AB1234 MH12AB1235
//!
//! # Many pairs from a file (or stdin when --input is omitted)
//! plate-match batch --input pairs.txt --threshold 0.8
//!
//! # Random plate simulation
//! plate-match simulate --count 1000 --seed 42
//!
//! # Custom weights, JSON output
//! plate-match --sequence-weight 0.5 --edit-weight 0.5 compare abc abd --output json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use plate_similarity::core::comparator::{
    compare_pairs_with_events, read_pairs, BatchSummary, MatchResult, ThresholdStrategy,
};
use plate_similarity::core::plate::{Simulation, SimulationConfig, SimulationReport, SuiteStats};
use plate_similarity::core::reporter::{DetailedReporter, DiffVisualizer, PairReport};
use plate_similarity::core::scorer::{ScorerConfig, SimilarityScorer};
use plate_similarity::error::{BatchError, ReportError, Result};
use plate_similarity::events::{
    BatchEvent, Event, EventChannel, EventReceiver, SimulationEvent,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;

/// Plate Similarity - score how alike two plates (or any short strings) are
#[derive(Parser, Debug)]
#[command(name = "plate-match")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ScoringArgs {
    /// JSON scorer configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Weight of the sequence ratio in the composite score
    #[arg(long, global = true)]
    sequence_weight: Option<f64>,

    /// Weight of the edit similarity in the composite score
    #[arg(long, global = true)]
    edit_weight: Option<f64>,

    /// Minimum composite score counted as a match (0.0-1.0)
    #[arg(short, long, global = true)]
    threshold: Option<f64>,

    /// Verbose output, including debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one pair in detail
    Compare {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Score many pairs, one pair per line
    Batch {
        /// File with pairs (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Score random plates against noisy copies and against noise
    Simulate {
        /// Pairs per suite
        #[arg(short, long, default_value = "1000")]
        count: usize,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (scores only)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    plate_similarity::init_tracing(cli.scoring.verbose);

    let config = scorer_config(&cli.scoring)?;
    let verbose = cli.scoring.verbose;
    let scorer = config.build()?;

    match cli.command {
        Commands::Compare { a, b, output } => run_compare(&scorer, &a, &b, output, verbose),
        Commands::Batch { input, output } => run_batch(&scorer, input, output, verbose),
        Commands::Simulate {
            count,
            seed,
            output,
        } => run_simulate(scorer, count, seed, output),
    }
}

/// Config file first, then flags on top
fn scorer_config(args: &ScoringArgs) -> Result<ScorerConfig> {
    let mut config = match &args.config {
        Some(path) => ScorerConfig::from_json_file(path)?,
        None => ScorerConfig::new(),
    };

    if let Some(weight) = args.sequence_weight {
        config = config.sequence_weight(weight);
    }
    if let Some(weight) = args.edit_weight {
        config = config.edit_weight(weight);
    }
    if let Some(threshold) = args.threshold {
        config = config.match_threshold(threshold);
    }

    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(ReportError::from)?;
    println!("{}", json);
    Ok(())
}

fn progress_bar(length: u64) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(bar_style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(bar_style.progress_chars("█▓░"));
    }
    pb
}

fn run_compare(
    scorer: &SimilarityScorer,
    a: &str,
    b: &str,
    output: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let report = PairReport::new(scorer.analyze(a, b), &DetailedReporter::new(scorer.weights()));

    match output {
        OutputFormat::Pretty => {
            let term = Term::stdout();
            term.write_line(&format!(
                "{} {}",
                style("Plate Similarity").bold().cyan(),
                style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim()
            ))
            .ok();
            term.write_line("").ok();
            term.write_line(&report.render_text(&DiffVisualizer::default()))
                .ok();

            let explanation = &report.explanation;
            let verdict = if scorer.match_threshold() <= report.analysis.scores.composite {
                style(format!("✓ MATCH ({})", explanation.verdict)).green().bold()
            } else {
                style(format!("✗ NO MATCH ({})", explanation.verdict)).red().bold()
            };
            term.write_line(&verdict.to_string()).ok();

            if verbose {
                term.write_line("").ok();
                term.write_line(&style(&explanation.human_readable).dim().to_string())
                    .ok();
            }
        }
        OutputFormat::Json => {
            println!("{}", report.to_json()?);
        }
        OutputFormat::Minimal => {
            println!("{:.4}", report.analysis.scores.composite);
        }
    }

    Ok(())
}

fn run_batch(
    scorer: &SimilarityScorer,
    input: Option<PathBuf>,
    output: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let pairs = match &input {
        Some(path) => {
            let source_name = path.display().to_string();
            let file = File::open(path).map_err(|source| BatchError::ReadInput {
                source_name: source_name.clone(),
                source,
            })?;
            read_pairs(BufReader::new(file), &source_name)?
        }
        None => read_pairs(std::io::stdin().lock(), "stdin")?,
    };

    if pairs.is_empty() {
        return Err(BatchError::NoPairs.into());
    }

    let strategy = ThresholdStrategy::new(scorer.match_threshold());
    let (sender, receiver) = EventChannel::new();

    let progress = matches!(output, OutputFormat::Pretty).then(|| progress_bar(pairs.len() as u64));
    let event_thread = spawn_batch_listener(receiver, progress);

    let results = compare_pairs_with_events(&pairs, scorer, &strategy, &sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    let summary = BatchSummary::from_results(&results);
    match output {
        OutputFormat::Pretty => print_pretty_batch(&results, &summary, &strategy, verbose),
        OutputFormat::Json => print_json(&serde_json::json!({
            "summary": summary,
            "threshold": scorer.match_threshold(),
            "results": results,
        }))?,
        OutputFormat::Minimal => {
            for result in &results {
                println!("{:.4}", result.score);
            }
        }
    }

    Ok(())
}

fn spawn_batch_listener(
    receiver: EventReceiver,
    progress: Option<ProgressBar>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for event in receiver.iter() {
            let Some(pb) = progress.as_ref() else {
                continue;
            };
            match event {
                Event::Batch(BatchEvent::Progress(p)) => {
                    pb.set_position(p.completed as u64);
                    pb.set_message(format!("{} matches", p.matches));
                }
                Event::Batch(BatchEvent::Completed { .. }) => pb.finish_and_clear(),
                _ => {}
            }
        }
    })
}

fn print_pretty_batch(
    results: &[MatchResult],
    summary: &BatchSummary,
    strategy: &ThresholdStrategy,
    verbose: bool,
) {
    use plate_similarity::core::comparator::ComparisonStrategy;

    let term = Term::stdout();
    let visualizer = DiffVisualizer::default();

    term.write_line(&format!("{}", style("Batch Comparison").bold().underlined()))
        .ok();
    term.write_line("").ok();

    for (i, result) in results.iter().enumerate() {
        let marker = if result.is_match {
            style("✓").green().to_string()
        } else {
            style("✗").red().to_string()
        };
        term.write_line(&format!(
            "  {} Pair {}: '{}' vs '{}' {} {}",
            marker,
            i + 1,
            result.a,
            result.b,
            visualizer.similarity_bar(result.similarity_percent()),
            if result.match_type.is_likely_same() {
                style(result.match_type).green()
            } else {
                style(result.match_type).dim()
            }
        ))
        .ok();
    }

    term.write_line("").ok();
    term.write_line(&format!(
        "  {} of {} pairs matched",
        style(summary.matches).cyan(),
        style(summary.total_pairs).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  Similarity - Avg: {:.2}%, Max: {:.2}%, Min: {:.2}%",
        summary.average_score * 100.0,
        summary.max_score * 100.0,
        summary.min_score * 100.0
    ))
    .ok();

    if verbose {
        term.write_line(&style(strategy.description()).dim().to_string())
            .ok();
    }
}

fn run_simulate(
    scorer: SimilarityScorer,
    count: usize,
    seed: Option<u64>,
    output: OutputFormat,
) -> Result<()> {
    let config = SimulationConfig {
        count,
        seed,
        ..SimulationConfig::default()
    };
    let simulation = Simulation::new(config, scorer);

    let (sender, receiver) = EventChannel::new();
    let progress = matches!(output, OutputFormat::Pretty).then(|| progress_bar(count as u64 * 2));

    let event_thread = thread::spawn(move || {
        let mut finished_suites = 0u64;
        for event in receiver.iter() {
            let Some(pb) = progress.as_ref() else {
                continue;
            };
            match event {
                Event::Simulation(SimulationEvent::SuiteStarted { suite, .. }) => {
                    pb.set_message(suite.to_string());
                }
                Event::Simulation(SimulationEvent::Progress { completed, total, .. }) => {
                    pb.set_position(finished_suites * total as u64 + completed as u64);
                }
                Event::Simulation(SimulationEvent::SuiteCompleted { .. }) => {
                    finished_suites += 1;
                    pb.set_position(finished_suites * count as u64);
                }
                _ => {}
            }
        }
        if let Some(pb) = progress {
            pb.finish_and_clear();
        }
    });

    let report = simulation.run_with_events(&sender);
    drop(sender);
    event_thread.join().ok();

    match output {
        OutputFormat::Pretty => print_pretty_simulation(&report, simulation.config()),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Minimal => {
            println!("{:.2}", report.success_rate());
        }
    }

    Ok(())
}

fn print_pretty_simulation(report: &SimulationReport, config: &SimulationConfig) {
    let term = Term::stdout();

    term.write_line(&format!(
        "{}",
        style("License Plate Matching Simulation").bold().underlined()
    ))
    .ok();
    term.write_line("").ok();
    term.write_line(&format!(
        "  Total: {}  Passed: {}  Failed: {}  Success rate: {:.2}%  ({} ms)",
        report.total(),
        style(report.passed()).green(),
        style(report.total() - report.passed()).red(),
        report.success_rate(),
        report.duration_ms
    ))
    .ok();

    print_suite(
        &term,
        &report.valid,
        &format!("pass when score >= {:.2}", config.valid_pass_threshold),
    );
    print_suite(
        &term,
        &report.invalid,
        &format!("pass when score < {:.2}", config.invalid_pass_threshold),
    );
}

fn print_suite(term: &Term, stats: &SuiteStats, rule: &str) {
    term.write_line("").ok();
    term.write_line(&format!(
        "{} {}",
        style(stats.suite).bold(),
        style(format!("({})", rule)).dim()
    ))
    .ok();
    term.write_line(&format!(
        "  Tests: {}  Passed: {}  Failed: {}  Success rate: {:.2}%",
        stats.total,
        stats.passed,
        stats.failed,
        stats.success_rate()
    ))
    .ok();
    term.write_line(&format!(
        "  Similarity - Avg: {:.2}%, Max: {:.2}%, Min: {:.2}%",
        stats.average_similarity * 100.0,
        stats.max_similarity * 100.0,
        stats.min_similarity * 100.0
    ))
    .ok();

    for (i, case) in stats.samples.iter().enumerate() {
        let status = if case.passed {
            style("PASS").green()
        } else {
            style("FAIL").red()
        };
        term.write_line(&format!(
            "  {}. {} vs {} - {:.2}% - {}",
            i + 1,
            case.plate_a,
            case.plate_b,
            case.similarity * 100.0,
            status
        ))
        .ok();
    }

    if !stats.failures.is_empty() {
        term.write_line(&format!("  {}", style("Failed cases:").yellow()))
            .ok();
        for case in &stats.failures {
            term.write_line(&format!(
                "    {} vs {} - {:.2}%",
                case.plate_a,
                case.plate_b,
                case.similarity * 100.0
            ))
            .ok();
        }
    }
}

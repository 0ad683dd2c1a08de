//! Plate matching simulation.
//!
//! Two suites:
//! - **Valid plates**: a plate against a copy with the last character
//!   re-rolled. Passes when the score reaches `valid_pass_threshold`.
//! - **Invalid plates**: a plate against random noise. Passes when the
//!   score stays below `invalid_pass_threshold`.

use super::PlateGenerator;
use crate::core::scorer::SimilarityScorer;
use crate::events::{null_sender, Event, EventSender, SimulationEvent, SimulationSuite};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

const PROGRESS_INTERVAL: usize = 200;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Pairs generated per suite
    pub count: usize,
    /// Minimum score for a valid/noisy pair to pass
    pub valid_pass_threshold: f64,
    /// A valid/invalid pair passes when it scores below this
    pub invalid_pass_threshold: f64,
    /// RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Cases kept as samples per suite
    pub sample_size: usize,
    /// Failed cases kept per suite
    pub max_failures: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            valid_pass_threshold: 0.7,
            invalid_pass_threshold: 0.5,
            seed: None,
            sample_size: 3,
            max_failures: 5,
        }
    }
}

/// One scored pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDetail {
    pub plate_a: String,
    pub plate_b: String,
    pub similarity: f64,
    pub passed: bool,
}

/// Results of one suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteStats {
    pub suite: SimulationSuite,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub average_similarity: f64,
    pub min_similarity: f64,
    pub max_similarity: f64,
    /// First few cases, passed or not
    pub samples: Vec<CaseDetail>,
    /// First few failed cases
    pub failures: Vec<CaseDetail>,
}

impl SuiteStats {
    fn from_cases(suite: SimulationSuite, cases: &[CaseDetail], config: &SimulationConfig) -> Self {
        let total = cases.len();
        let passed = cases.iter().filter(|c| c.passed).count();
        let (average, min, max) = if total == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let sum: f64 = cases.iter().map(|c| c.similarity).sum();
            (
                sum / total as f64,
                cases.iter().map(|c| c.similarity).fold(f64::INFINITY, f64::min),
                cases.iter().map(|c| c.similarity).fold(f64::NEG_INFINITY, f64::max),
            )
        };

        Self {
            suite,
            total,
            passed,
            failed: total - passed,
            average_similarity: average,
            min_similarity: min,
            max_similarity: max,
            samples: cases.iter().take(config.sample_size).cloned().collect(),
            failures: cases
                .iter()
                .filter(|c| !c.passed)
                .take(config.max_failures)
                .cloned()
                .collect(),
        }
    }

    /// Passed cases as a percentage, `0.0` for an empty suite
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Results of both suites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub valid: SuiteStats,
    pub invalid: SuiteStats,
    pub duration_ms: u64,
}

impl SimulationReport {
    pub fn total(&self) -> usize {
        self.valid.total + self.invalid.total
    }

    pub fn passed(&self) -> usize {
        self.valid.passed + self.invalid.passed
    }

    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.passed() as f64 / self.total() as f64 * 100.0
        }
    }
}

/// Runs the plate simulation against a scorer
pub struct Simulation {
    config: SimulationConfig,
    scorer: SimilarityScorer,
}

impl Simulation {
    pub fn new(config: SimulationConfig, scorer: SimilarityScorer) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run both suites without events
    pub fn run(&self) -> SimulationReport {
        self.run_with_events(&null_sender())
    }

    /// Run both suites, reporting progress through `events`
    pub fn run_with_events(&self, events: &EventSender) -> SimulationReport {
        let start_time = Instant::now();
        let mut generator = match self.config.seed {
            Some(seed) => PlateGenerator::with_seed(seed),
            None => PlateGenerator::new(),
        };

        // Pairs are generated up front so a seed always yields the same cases
        let valid_pairs: Vec<(String, String)> = (0..self.config.count)
            .map(|_| {
                let plate = generator.valid_plate();
                let noisy = generator.with_noisy_tail(&plate);
                (plate, noisy)
            })
            .collect();
        let invalid_pairs: Vec<(String, String)> = (0..self.config.count)
            .map(|_| (generator.valid_plate(), generator.invalid_plate()))
            .collect();

        let valid_threshold = self.config.valid_pass_threshold;
        let invalid_threshold = self.config.invalid_pass_threshold;

        let valid = self.run_suite(SimulationSuite::ValidPlates, &valid_pairs, events, |score| {
            score >= valid_threshold
        });
        let invalid =
            self.run_suite(SimulationSuite::InvalidPlates, &invalid_pairs, events, |score| {
                score < invalid_threshold
            });

        let report = SimulationReport {
            valid,
            invalid,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        tracing::info!(
            total = report.total(),
            passed = report.passed(),
            duration_ms = report.duration_ms,
            "Plate simulation complete"
        );

        report
    }

    fn run_suite(
        &self,
        suite: SimulationSuite,
        pairs: &[(String, String)],
        events: &EventSender,
        passes: impl Fn(f64) -> bool + Sync,
    ) -> SuiteStats {
        let total = pairs.len();
        events.send(Event::Simulation(SimulationEvent::SuiteStarted { suite, total }));

        let completed = AtomicUsize::new(0);
        let cases: Vec<CaseDetail> = pairs
            .par_iter()
            .map(|(a, b)| {
                let similarity = self.scorer.composite(a, b);

                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                if done % PROGRESS_INTERVAL == 0 {
                    events.send(Event::Simulation(SimulationEvent::Progress {
                        suite,
                        completed: done,
                        total,
                    }));
                }

                CaseDetail {
                    plate_a: a.clone(),
                    plate_b: b.clone(),
                    similarity,
                    passed: passes(similarity),
                }
            })
            .collect();

        let stats = SuiteStats::from_cases(suite, &cases, &self.config);
        events.send(Event::Simulation(SimulationEvent::SuiteCompleted {
            suite,
            passed: stats.passed,
            failed: stats.failed,
        }));

        tracing::debug!(%suite, passed = stats.passed, failed = stats.failed, "Suite complete");
        stats
    }
}

//! # Comparator Module
//!
//! Scores many string pairs at once.
//!
//! ## How It Works
//! 1. Score every pair in parallel (rayon) with a [`SimilarityScorer`]
//! 2. Apply a comparison strategy to decide which pairs match
//! 3. Summarize the batch
//!
//! ## Match Types
//! | Score | Classification |
//! |-------|---------------|
//! | 1.0 | Identical |
//! | > 0.8 | Very similar |
//! | > 0.6 | Moderately similar |
//! | > 0.4 | Somewhat similar |
//! | <= 0.4 | Not similar |

mod pairs;
mod traits;

pub use pairs::{parse_pairs, read_pairs};
pub use traits::{ComparisonStrategy, ThresholdStrategy};

use crate::core::scorer::SimilarityScorer;
use crate::events::{BatchEvent, BatchProgress, Event, EventSender};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Result of scoring one pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub a: String,
    pub b: String,
    /// Composite similarity (0.0-1.0)
    pub score: f64,
    pub match_type: MatchType,
    /// Whether the strategy accepted the pair
    pub is_match: bool,
}

impl MatchResult {
    pub fn similarity_percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Classification of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    Identical,
    VerySimilar,
    ModeratelySimilar,
    SomewhatSimilar,
    NotSimilar,
}

impl MatchType {
    /// Classify a score in `[0, 1]`
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            MatchType::Identical
        } else if score > 0.8 {
            MatchType::VerySimilar
        } else if score > 0.6 {
            MatchType::ModeratelySimilar
        } else if score > 0.4 {
            MatchType::SomewhatSimilar
        } else {
            MatchType::NotSimilar
        }
    }

    /// Whether this match type is likely the same identifier
    pub fn is_likely_same(&self) -> bool {
        matches!(self, MatchType::Identical | MatchType::VerySimilar)
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Identical => write!(f, "Identical"),
            MatchType::VerySimilar => write!(f, "Very Similar"),
            MatchType::ModeratelySimilar => write!(f, "Moderately Similar"),
            MatchType::SomewhatSimilar => write!(f, "Somewhat Similar"),
            MatchType::NotSimilar => write!(f, "Not Very Similar"),
        }
    }
}

/// Aggregate statistics of a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_pairs: usize,
    pub matches: usize,
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
}

impl BatchSummary {
    /// Summarize results. An empty batch has all statistics at zero.
    pub fn from_results(results: &[MatchResult]) -> Self {
        if results.is_empty() {
            return Self {
                total_pairs: 0,
                matches: 0,
                average_score: 0.0,
                min_score: 0.0,
                max_score: 0.0,
            };
        }

        let total: f64 = results.iter().map(|r| r.score).sum();
        Self {
            total_pairs: results.len(),
            matches: results.iter().filter(|r| r.is_match).count(),
            average_score: total / results.len() as f64,
            min_score: results.iter().map(|r| r.score).fold(f64::INFINITY, f64::min),
            max_score: results.iter().map(|r| r.score).fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

fn score_pair(
    a: &str,
    b: &str,
    scorer: &SimilarityScorer,
    strategy: &dyn ComparisonStrategy,
) -> MatchResult {
    let score = scorer.composite(a, b);
    MatchResult {
        a: a.to_string(),
        b: b.to_string(),
        score,
        match_type: strategy.classify(score),
        is_match: strategy.is_match(score),
    }
}

/// Score every pair in parallel. Results keep the input order.
pub fn compare_pairs(
    pairs: &[(String, String)],
    scorer: &SimilarityScorer,
    strategy: &dyn ComparisonStrategy,
) -> Vec<MatchResult> {
    pairs
        .par_iter()
        .map(|(a, b)| score_pair(a, b, scorer, strategy))
        .collect()
}

/// Score every pair in parallel with progress events
///
/// Emits a progress event every ~2% of the batch (at most every 1000 pairs).
pub fn compare_pairs_with_events(
    pairs: &[(String, String)],
    scorer: &SimilarityScorer,
    strategy: &dyn ComparisonStrategy,
    events: &EventSender,
) -> Vec<MatchResult> {
    let total = pairs.len();
    events.send(Event::Batch(BatchEvent::Started { total_pairs: total }));

    let update_interval = std::cmp::min(1000, std::cmp::max(1, total / 50));
    let completed = AtomicUsize::new(0);
    let matches = AtomicUsize::new(0);

    let results: Vec<MatchResult> = pairs
        .par_iter()
        .map(|(a, b)| {
            let result = score_pair(a, b, scorer, strategy);
            let matches_so_far = if result.is_match {
                matches.fetch_add(1, Ordering::SeqCst) + 1
            } else {
                matches.load(Ordering::SeqCst)
            };

            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if done % update_interval == 0 || done == total {
                events.send(Event::Batch(BatchEvent::Progress(BatchProgress {
                    completed: done,
                    total,
                    matches: matches_so_far,
                })));
            }

            result
        })
        .collect();

    let total_matches = matches.load(Ordering::SeqCst);
    events.send(Event::Batch(BatchEvent::Completed {
        total_pairs: total,
        matches: total_matches,
    }));

    tracing::info!(
        total_pairs = total,
        matches = total_matches,
        threshold = strategy.threshold(),
        "Batch comparison complete"
    );

    results
}

//! # Scorer Module
//!
//! Pure similarity measures for short strings.
//!
//! ## Measures
//! | Measure | What it captures |
//! |---------|------------------|
//! | Edit similarity | Fewest insert/delete/substitute edits |
//! | Set similarity | Overlap of the character sets (Jaccard) |
//! | Sequence ratio | Shared contiguous blocks, tolerant of shifts |
//! | Composite | Weighted mean of sequence ratio and edit similarity |
//!
//! Every measure uppercases both inputs first, so case never affects a score.
//! All functions are total: empty inputs get fallback scores, never errors.

mod config;
mod jaccard;
mod levenshtein;
mod sequence;

pub use config::{ScoreWeights, ScorerConfig};
pub use jaccard::set_similarity;
pub use levenshtein::{edit_distance, edit_similarity};
pub use sequence::{matching_blocks, sequence_ratio, MatchingBlock};

use crate::core::comparator::MatchType;
use crate::core::diff::{
    aligned_comparison_chars, positional_diff_chars, AlignedComparison, DiffRecord,
};
use serde::{Deserialize, Serialize};

/// Plate lengths the heuristics are tuned for
pub const RECOMMENDED_LENGTH: std::ops::RangeInclusive<usize> = 6..=10;

/// Case-fold a string for comparison
pub fn normalize(s: &str) -> String {
    s.to_uppercase()
}

pub(crate) fn normalized_chars(s: &str) -> Vec<char> {
    normalize(s).chars().collect()
}

/// Composite similarity with the default weights (0.6 sequence, 0.4 edit).
///
/// Two empty strings score `1.0`; exactly one empty string scores `0.0`.
pub fn composite_similarity(a: &str, b: &str) -> f64 {
    SimilarityScorer::new().composite(a, b)
}

/// Every score computed for one pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    pub edit_distance: usize,
    pub edit_similarity: f64,
    pub set_similarity: f64,
    pub sequence_ratio: f64,
    /// Exact positional matches over the longer length
    pub positional_similarity: f64,
    pub composite: f64,
}

/// Full analysis of one pair, ready for a reporter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// First input, normalized
    pub a: String,
    /// Second input, normalized
    pub b: String,
    pub scores: SimilarityScores,
    /// Position-by-position comparison
    pub diff: DiffRecord,
    /// Shift alignment, only present when the lengths differ
    pub alignment: Option<AlignedComparison>,
    /// Mean of positional, edit and set similarity
    pub average: f64,
    /// Classification of `average`
    pub verdict: MatchType,
}

/// Scores string pairs with a fixed weighting and match threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScorer {
    weights: ScoreWeights,
    match_threshold: f64,
}

impl SimilarityScorer {
    /// Scorer with the default weights and threshold
    pub fn new() -> Self {
        Self::from_parts(ScoreWeights::default(), ScorerConfig::DEFAULT_MATCH_THRESHOLD)
    }

    /// Start a configuration builder
    pub fn builder() -> ScorerConfig {
        ScorerConfig::new()
    }

    pub(crate) fn from_parts(weights: ScoreWeights, match_threshold: f64) -> Self {
        Self {
            weights,
            match_threshold,
        }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn match_threshold(&self) -> f64 {
        self.match_threshold
    }

    /// Weighted composite of sequence ratio and edit similarity
    pub fn composite(&self, a: &str, b: &str) -> f64 {
        let a = normalized_chars(a);
        let b = normalized_chars(b);
        self.composite_chars(&a, &b)
    }

    fn composite_chars(&self, a: &[char], b: &[char]) -> f64 {
        if a == b {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        self.weights.combine(
            sequence::sequence_ratio_chars(a, b),
            levenshtein::edit_similarity_chars(a, b),
        )
    }

    /// Whether the composite score meets the match threshold
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.composite(a, b) >= self.match_threshold
    }

    /// Compute every score for a pair
    pub fn scores(&self, a: &str, b: &str) -> SimilarityScores {
        let a = normalized_chars(a);
        let b = normalized_chars(b);
        self.scores_chars(&a, &b)
    }

    fn scores_chars(&self, a: &[char], b: &[char]) -> SimilarityScores {
        let max_len = a.len().max(b.len());
        let exact = a.iter().zip(b).filter(|(x, y)| x == y).count();
        let positional_similarity = if max_len == 0 {
            1.0
        } else {
            exact as f64 / max_len as f64
        };

        SimilarityScores {
            edit_distance: levenshtein::edit_distance_chars(a, b),
            edit_similarity: levenshtein::edit_similarity_chars(a, b),
            set_similarity: jaccard::set_similarity_chars(a, b),
            sequence_ratio: sequence::sequence_ratio_chars(a, b),
            positional_similarity,
            composite: self.composite_chars(a, b),
        }
    }

    /// Full analysis: every score, the positional diff and, for unequal
    /// lengths, the shift alignment.
    pub fn analyze(&self, a: &str, b: &str) -> SimilarityReport {
        let a_chars = normalized_chars(a);
        let b_chars = normalized_chars(b);

        if !RECOMMENDED_LENGTH.contains(&a_chars.len())
            || !RECOMMENDED_LENGTH.contains(&b_chars.len())
        {
            tracing::warn!(
                a_len = a_chars.len(),
                b_len = b_chars.len(),
                "Inputs outside the recommended {}-{} character range, scores may be less meaningful",
                RECOMMENDED_LENGTH.start(),
                RECOMMENDED_LENGTH.end()
            );
        }

        let scores = self.scores_chars(&a_chars, &b_chars);
        let diff = positional_diff_chars(&a_chars, &b_chars);
        let alignment = (a_chars.len() != b_chars.len())
            .then(|| aligned_comparison_chars(&a_chars, &b_chars));

        // Equal inputs are identical even when empty, where the set score is 0
        let average = if a_chars == b_chars {
            1.0
        } else {
            (scores.positional_similarity + scores.edit_similarity + scores.set_similarity) / 3.0
        };
        let verdict = MatchType::from_score(average);

        tracing::debug!(
            a = %a,
            b = %b,
            composite = scores.composite,
            average,
            %verdict,
            "Analyzed pair"
        );

        SimilarityReport {
            a: a_chars.into_iter().collect(),
            b: b_chars.into_iter().collect(),
            scores,
            diff,
            alignment,
            average,
            verdict,
        }
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

//! Human-readable explanations of a similarity analysis.

use crate::core::comparator::MatchType;
use crate::core::scorer::{ScoreWeights, SimilarityReport};
use serde::{Deserialize, Serialize};

/// Why two strings are (or are not) considered similar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchExplanation {
    /// One-line summary (e.g., "These strings are very similar (92% match)")
    pub summary: String,
    /// Verdict from the averaged measures
    pub verdict: MatchType,
    /// Composite score as a percentage (0-100)
    pub composite_percent: f64,
    /// Technical details for advanced users
    pub technical: TechnicalDetails,
    /// Plain-language explanation
    pub human_readable: String,
}

/// Raw measures behind an explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalDetails {
    pub edit_distance: usize,
    pub edit_similarity: f64,
    pub set_similarity: f64,
    pub sequence_ratio: f64,
    pub positional_similarity: f64,
    pub weights: ScoreWeights,
}

impl MatchExplanation {
    fn generate_summary(verdict: MatchType, percent: f64) -> String {
        match verdict {
            MatchType::Identical => "These strings are identical".to_string(),
            MatchType::VerySimilar => {
                format!("These strings are very similar ({:.0}% match)", percent)
            }
            MatchType::ModeratelySimilar => {
                format!("These strings are moderately similar ({:.0}% match)", percent)
            }
            MatchType::SomewhatSimilar => {
                format!(
                    "These strings are somewhat similar ({:.0}% match) - please review carefully",
                    percent
                )
            }
            MatchType::NotSimilar => {
                format!("These strings are not very similar ({:.0}% match)", percent)
            }
        }
    }

    fn generate_human_readable(report: &SimilarityReport) -> String {
        let counts = report.diff.counts();
        let longest = report.a.chars().count().max(report.b.chars().count());

        match report.verdict {
            MatchType::Identical => {
                "Both strings contain the same characters in the same order \
                 once upper and lower case are treated alike."
                    .to_string()
            }
            _ if counts.extra + counts.missing > 0 => {
                let shifted = report
                    .alignment
                    .as_ref()
                    .map(|a| a.similarity)
                    .unwrap_or(0.0);
                format!(
                    "The strings differ in length by {} character(s). \
                     {} of {} positions line up directly, and {:.0}% of the \
                     overlapping characters agree after shifting the shorter one. \
                     It takes {} edit(s) to turn one into the other.",
                    counts.extra + counts.missing,
                    counts.matches,
                    longest,
                    shifted * 100.0,
                    report.scores.edit_distance
                )
            }
            _ => format!(
                "{} of {} characters match in place and {} differ. \
                 It takes {} edit(s) to turn one into the other.",
                counts.matches, longest, counts.mismatches, report.scores.edit_distance
            ),
        }
    }
}

/// Turns analyses into explanations
pub struct DetailedReporter {
    weights: ScoreWeights,
}

impl DetailedReporter {
    /// Create a reporter that quotes the given composite weights
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Explain one analysis
    pub fn explain(&self, report: &SimilarityReport) -> MatchExplanation {
        let composite_percent = report.scores.composite * 100.0;

        MatchExplanation {
            summary: MatchExplanation::generate_summary(report.verdict, composite_percent),
            verdict: report.verdict,
            composite_percent,
            technical: TechnicalDetails {
                edit_distance: report.scores.edit_distance,
                edit_similarity: report.scores.edit_similarity,
                set_similarity: report.scores.set_similarity,
                sequence_ratio: report.scores.sequence_ratio,
                positional_similarity: report.scores.positional_similarity,
                weights: self.weights,
            },
            human_readable: MatchExplanation::generate_human_readable(report),
        }
    }
}

impl Default for DetailedReporter {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

//! # Reporter Module
//!
//! Explains WHY two strings are considered similar.
//!
//! Scoring lives in `scorer` and `diff`; this module only turns their
//! results into something a person can read.
//!
//! ## Explanation Levels
//! 1. **Simple**: "These strings are very similar (90% match)"
//! 2. **Comparative**: Character-by-character table and alignment
//! 3. **Technical**: Edit distance, set overlap, sequence ratio, weights

mod explanation;
mod visualization;

pub use explanation::{DetailedReporter, MatchExplanation, TechnicalDetails};
pub use visualization::DiffVisualizer;

use crate::core::scorer::SimilarityReport;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};

/// An analysis together with its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairReport {
    pub analysis: SimilarityReport,
    pub explanation: MatchExplanation,
}

impl PairReport {
    pub fn new(analysis: SimilarityReport, reporter: &DetailedReporter) -> Self {
        let explanation = reporter.explain(&analysis);
        Self {
            analysis,
            explanation,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Full plain-text report
    pub fn render_text(&self, visualizer: &DiffVisualizer) -> String {
        let analysis = &self.analysis;
        let scores = &analysis.scores;
        let mut output = String::new();

        output.push_str(&format!(
            "First:  '{}' (length {})\nSecond: '{}' (length {})\n\n",
            analysis.a,
            analysis.a.chars().count(),
            analysis.b,
            analysis.b.chars().count()
        ));
        output.push_str(&visualizer.diff_table(&analysis.diff.entries));
        output.push('\n');
        output.push_str(&visualizer.summarize_counts(&analysis.diff.counts()));

        if let Some(alignment) = &analysis.alignment {
            output.push('\n');
            output.push_str(&visualizer.alignment(&alignment.aligned));
            output.push_str(&format!(
                "Aligned similarity: {:.2}% ({} of {} comparable positions)\n",
                alignment.similarity * 100.0,
                alignment.matches,
                alignment.comparable
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "Positional similarity: {:.2}%\n\
             Edit similarity:       {:.2}% ({} edits)\n\
             Set similarity:        {:.2}%\n\
             Sequence ratio:        {:.2}%\n\
             Composite:             {}\n",
            scores.positional_similarity * 100.0,
            scores.edit_similarity * 100.0,
            scores.edit_distance,
            scores.set_similarity * 100.0,
            scores.sequence_ratio * 100.0,
            visualizer.similarity_bar(scores.composite * 100.0)
        ));
        output.push('\n');
        output.push_str(&self.explanation.summary);
        output.push('\n');

        output
    }
}

//! Text visualization of diffs and scores.

use crate::core::diff::{AlignedPair, DiffCounts, DiffEntry, DiffStatus, GAP_MARKER};

/// Renders diffs as fixed-width tables
pub struct DiffVisualizer {
    /// Width of each character column
    column_width: usize,
}

impl DiffVisualizer {
    pub fn new(column_width: usize) -> Self {
        Self { column_width }
    }

    /// Character-by-character table with 1-based positions
    ///
    /// ```text
    /// Position | First   | Second  | Status
    /// -----------------------------------------
    ///        1 | A       | A       | MATCH
    /// ```
    pub fn diff_table(&self, entries: &[DiffEntry]) -> String {
        let width = self.column_width;
        let mut output = format!(
            "Position | {:width$} | {:width$} | Status\n",
            "First", "Second"
        );
        output.push_str(&"-".repeat(width * 2 + 25));
        output.push('\n');

        for entry in entries {
            output.push_str(&format!(
                "{:8} | {:width$} | {:width$} | {}\n",
                entry.position + 1,
                entry.char_a.unwrap_or(GAP_MARKER),
                entry.char_b.unwrap_or(GAP_MARKER),
                status_label(entry.status),
            ));
        }

        output
    }

    /// The two aligned rows, one per line
    pub fn alignment(&self, aligned: &AlignedPair) -> String {
        let (a, b) = aligned.to_strings();
        format!("Aligned first:  {}\nAligned second: {}\n", a, b)
    }

    /// Per-status totals; extra and missing lines only appear when non-zero
    pub fn summarize_counts(&self, counts: &DiffCounts) -> String {
        let mut output = format!(
            "Matches: {}\nMismatches: {}\n",
            counts.matches, counts.mismatches
        );
        if counts.extra > 0 {
            output.push_str(&format!("Extra characters: {}\n", counts.extra));
        }
        if counts.missing > 0 {
            output.push_str(&format!("Missing characters: {}\n", counts.missing));
        }
        output
    }

    /// Compact similarity bar: `[████████░░] 80%`
    pub fn similarity_bar(&self, similarity_percent: f64) -> String {
        let clamped = similarity_percent.clamp(0.0, 100.0);
        let filled = (clamped / 10.0).round() as usize;
        let empty = 10 - filled;

        format!(
            "[{}{}] {:.0}%",
            "█".repeat(filled),
            "░".repeat(empty),
            clamped
        )
    }
}

impl Default for DiffVisualizer {
    fn default() -> Self {
        Self::new(7)
    }
}

fn status_label(status: DiffStatus) -> &'static str {
    match status {
        DiffStatus::Match => "MATCH",
        DiffStatus::Mismatch => "MISMATCH",
        DiffStatus::Extra => "EXTRA CHARACTER",
        DiffStatus::Missing => "MISSING CHARACTER",
    }
}

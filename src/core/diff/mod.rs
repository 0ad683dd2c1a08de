//! # Diff Module
//!
//! Character-level diagnostics for a string pair.
//!
//! ## Statuses
//! | Status | Meaning |
//! |--------|---------|
//! | Match | Same character at this position |
//! | Mismatch | Different characters at this position |
//! | Extra | Position only exists in the first string |
//! | Missing | Position only exists in the second string |
//!
//! Diffs feed reports only; they never influence a score.

mod alignment;

pub use alignment::{align, aligned_comparison, AlignedComparison, AlignedPair, GAP_MARKER};
pub(crate) use alignment::aligned_comparison_chars;

use crate::core::scorer::normalized_chars;
use serde::{Deserialize, Serialize};

/// Classification of one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffStatus {
    Match,
    Mismatch,
    /// Only the first string has a character here
    Extra,
    /// Only the second string has a character here
    Missing,
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffStatus::Match => write!(f, "MATCH"),
            DiffStatus::Mismatch => write!(f, "MISMATCH"),
            DiffStatus::Extra => write!(f, "EXTRA"),
            DiffStatus::Missing => write!(f, "MISSING"),
        }
    }
}

/// One row of a diff. `None` marks a side with no character at this position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub status: DiffStatus,
    /// Zero-based position
    pub position: usize,
    pub char_a: Option<char>,
    pub char_b: Option<char>,
}

/// Ordered diff of a pair plus its exact match count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub entries: Vec<DiffEntry>,
    pub exact_matches: usize,
}

/// Per-status totals of a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffCounts {
    pub matches: usize,
    pub mismatches: usize,
    pub extra: usize,
    pub missing: usize,
}

impl DiffCounts {
    fn tally<'a>(entries: impl IntoIterator<Item = &'a DiffEntry>) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |mut counts, entry| {
                match entry.status {
                    DiffStatus::Match => counts.matches += 1,
                    DiffStatus::Mismatch => counts.mismatches += 1,
                    DiffStatus::Extra => counts.extra += 1,
                    DiffStatus::Missing => counts.missing += 1,
                }
                counts
            })
    }
}

impl DiffRecord {
    pub fn counts(&self) -> DiffCounts {
        DiffCounts::tally(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with the given status
    pub fn with_status(&self, status: DiffStatus) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(move |e| e.status == status)
    }
}

/// Compare `a` and `b` position by position. Case-insensitive.
pub fn positional_diff(a: &str, b: &str) -> DiffRecord {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    positional_diff_chars(&a, &b)
}

pub(crate) fn positional_diff_chars(a: &[char], b: &[char]) -> DiffRecord {
    let common = a.len().min(b.len());
    let mut entries = Vec::with_capacity(a.len().max(b.len()));
    let mut exact_matches = 0;

    for (position, (&ca, &cb)) in a.iter().zip(b).enumerate() {
        let status = if ca == cb {
            exact_matches += 1;
            DiffStatus::Match
        } else {
            DiffStatus::Mismatch
        };
        entries.push(DiffEntry {
            status,
            position,
            char_a: Some(ca),
            char_b: Some(cb),
        });
    }

    entries.extend(a.iter().enumerate().skip(common).map(|(position, &ca)| DiffEntry {
        status: DiffStatus::Extra,
        position,
        char_a: Some(ca),
        char_b: None,
    }));
    entries.extend(b.iter().enumerate().skip(common).map(|(position, &cb)| DiffEntry {
        status: DiffStatus::Missing,
        position,
        char_a: None,
        char_b: Some(cb),
    }));

    DiffRecord {
        entries,
        exact_matches,
    }
}

//! Shift alignment of unequal-length strings.
//!
//! The shorter string is slid across the longer one and padded with gaps on
//! both sides; the shift with the most equal characters wins, ties going to
//! the smallest shift. This is a greedy heuristic for short identifiers: it
//! never opens gaps inside a string, so `AB1234` vs `AB91234` aligns worse
//! than a Needleman-Wunsch alignment would.

use super::{DiffEntry, DiffStatus};
use crate::core::scorer::normalized_chars;
use serde::{Deserialize, Serialize};

/// Character used to render a gap
pub const GAP_MARKER: char = '-';

/// Two equal-length rows where `None` is a gap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub a: Vec<Option<char>>,
    pub b: Vec<Option<char>>,
    /// Leading gaps placed before the shorter string
    pub shift: usize,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Positions where both rows hold the same character
    pub fn matches(&self) -> usize {
        count_matches(&self.a, &self.b)
    }

    /// Both rows rendered with [`GAP_MARKER`] for gaps
    pub fn to_strings(&self) -> (String, String) {
        (render(&self.a), render(&self.b))
    }
}

impl std::fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.to_strings();
        write!(f, "{}\n{}", a, b)
    }
}

/// Result of comparing an aligned pair position by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedComparison {
    pub aligned: AlignedPair,
    pub entries: Vec<DiffEntry>,
    pub matches: usize,
    /// Positions where neither row has a gap
    pub comparable: usize,
    /// `matches / comparable`, `0.0` when nothing is comparable
    pub similarity: f64,
}

/// Align `a` and `b` by shifting the shorter one. Case-insensitive.
pub fn align(a: &str, b: &str) -> AlignedPair {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    align_chars(&a, &b)
}

/// Align `a` and `b`, then classify every aligned position.
pub fn aligned_comparison(a: &str, b: &str) -> AlignedComparison {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    aligned_comparison_chars(&a, &b)
}

pub(crate) fn align_chars(a: &[char], b: &[char]) -> AlignedPair {
    let a_is_shorter = a.len() < b.len();
    let (shorter, longer) = if a_is_shorter { (a, b) } else { (b, a) };
    let longer_row: Vec<Option<char>> = longer.iter().copied().map(Some).collect();
    let slack = longer.len() - shorter.len();

    let mut best_shift = 0;
    let mut best_row = pad(shorter, 0, slack);
    let mut best_matches = count_matches(&best_row, &longer_row);

    for shift in 1..=slack {
        let row = pad(shorter, shift, slack - shift);
        let matches = count_matches(&row, &longer_row);
        if matches > best_matches {
            best_shift = shift;
            best_row = row;
            best_matches = matches;
        }
    }

    let (a_row, b_row) = if a_is_shorter {
        (best_row, longer_row)
    } else {
        (longer_row, best_row)
    };

    AlignedPair {
        a: a_row,
        b: b_row,
        shift: best_shift,
    }
}

pub(crate) fn aligned_comparison_chars(a: &[char], b: &[char]) -> AlignedComparison {
    let aligned = align_chars(a, b);
    let mut entries = Vec::with_capacity(aligned.len());
    let mut matches = 0;
    let mut comparable = 0;

    for (position, (&char_a, &char_b)) in aligned.a.iter().zip(&aligned.b).enumerate() {
        let status = match (char_a, char_b) {
            (Some(x), Some(y)) => {
                comparable += 1;
                if x == y {
                    matches += 1;
                    DiffStatus::Match
                } else {
                    DiffStatus::Mismatch
                }
            }
            (None, _) => DiffStatus::Missing,
            (Some(_), None) => DiffStatus::Extra,
        };
        entries.push(DiffEntry {
            status,
            position,
            char_a,
            char_b,
        });
    }

    let similarity = if comparable == 0 {
        0.0
    } else {
        matches as f64 / comparable as f64
    };

    AlignedComparison {
        aligned,
        entries,
        matches,
        comparable,
        similarity,
    }
}

fn pad(chars: &[char], leading: usize, trailing: usize) -> Vec<Option<char>> {
    std::iter::repeat(None)
        .take(leading)
        .chain(chars.iter().copied().map(Some))
        .chain(std::iter::repeat(None).take(trailing))
        .collect()
}

fn count_matches(a: &[Option<char>], b: &[Option<char>]) -> usize {
    a.iter()
        .zip(b)
        .filter(|(x, y)| x.is_some() && x == y)
        .count()
}

fn render(row: &[Option<char>]) -> String {
    row.iter().map(|c| c.unwrap_or(GAP_MARKER)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_are_unchanged() {
        let aligned = align("abc", "abd");
        assert_eq!(aligned.to_strings(), ("ABC".to_string(), "ABD".to_string()));
        assert_eq!(aligned.shift, 0);
    }

    #[test]
    fn leading_character_is_skipped() {
        let aligned = align("XAB1234", "AB1234");
        assert_eq!(aligned.shift, 1);
        assert_eq!(aligned.to_strings().1, "-AB1234");
        assert_eq!(aligned.matches(), 6);
    }

    #[test]
    fn shorter_first_argument() {
        let aligned = align("worl", "world");
        assert_eq!(aligned.to_strings(), ("WORL-".to_string(), "WORLD".to_string()));
    }

    #[test]
    fn ties_take_smallest_shift() {
        // Every shift matches nothing
        let aligned = align("XY", "ABCD");
        assert_eq!(aligned.shift, 0);
        assert_eq!(aligned.to_strings().0, "XY--");
        assert_eq!(aligned.len(), 4);
    }

    #[test]
    fn nonzero_ties_take_smallest_shift() {
        // Shifts 0 and 1 both line up one character
        let aligned = align("A", "AA");
        assert_eq!(aligned.shift, 0);
        assert_eq!(aligned.to_strings(), ("A-".to_string(), "AA".to_string()));
    }

    #[test]
    fn one_empty_side() {
        let aligned = align("", "AB");
        assert_eq!(aligned.to_strings(), ("--".to_string(), "AB".to_string()));
    }

    #[test]
    fn comparison_classifies_gaps() {
        let comparison = aligned_comparison("hello", "helloo");
        // "HELLO-" lines up all five characters
        assert_eq!(comparison.aligned.shift, 0);
        assert_eq!(comparison.matches, 5);
        assert_eq!(comparison.comparable, 5);
        assert_eq!(comparison.similarity, 1.0);
        assert_eq!(comparison.entries[5].status, DiffStatus::Missing);
    }

    #[test]
    fn comparison_marks_extra_when_first_is_longer() {
        let comparison = aligned_comparison("world", "worl");
        assert_eq!(comparison.entries[4].status, DiffStatus::Extra);
        assert_eq!(comparison.entries[4].char_b, None);
    }

    #[test]
    fn nothing_comparable_scores_zero() {
        let comparison = aligned_comparison("", "AB");
        assert_eq!(comparison.comparable, 0);
        assert_eq!(comparison.similarity, 0.0);
    }

    #[test]
    fn display_renders_two_lines() {
        let aligned = align("AB", "ABC");
        assert_eq!(aligned.to_string(), "AB-\nABC");
    }
}

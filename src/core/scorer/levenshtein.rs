//! Levenshtein edit distance.
//!
//! Keeps a single DP row sized by the shorter input, so memory is
//! O(min(len(a), len(b))).

use super::normalized_chars;

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`. Case-insensitive.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    edit_distance_chars(&a, &b)
}

/// Edit distance over already-normalized characters.
pub(crate) fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    // The row is indexed by the shorter input
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    // row[j] = distance from long[..i] to short[..j]
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, &lc) in long.iter().enumerate() {
        // row[j - 1] from the previous iteration of i
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = diagonal + usize::from(lc != sc);

            diagonal = row[j + 1];
            row[j + 1] = deletion.min(insertion).min(substitution);
        }
    }

    row[short.len()]
}

/// `1 - distance / max_len`, clamped to `[0, 1]`. Two empty strings are identical.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    edit_similarity_chars(&a, &b)
}

pub(crate) fn edit_similarity_chars(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance_chars(a, b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(edit_distance("MH12AB1234", "MH12AB1234"), 0);
        assert_eq!(edit_similarity("MH12AB1234", "MH12AB1234"), 1.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "ABC"), 3);
        assert_eq!(edit_distance("ABC", ""), 3);
        assert_eq!(edit_similarity("", ""), 1.0);
        assert_eq!(edit_similarity("", "ABC"), 0.0);
    }

    #[test]
    fn single_edits() {
        assert_eq!(edit_distance("kitten", "sitten"), 1);
        assert_eq!(edit_distance("cat", "cats"), 1);
        assert_eq!(edit_distance("cats", "cat"), 1);
    }

    #[test]
    fn classic_kitten_sitting() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("sitting", "kitten"), 3);
    }

    #[test]
    fn trailing_digit_change_is_one_edit() {
        assert_eq!(edit_distance("MH12AB1234", "MH12AB1235"), 1);
        assert!((edit_similarity("MH12AB1234", "MH12AB1235") - 0.9).abs() < 1e-12);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(edit_distance("mh12ab", "MH12AB"), 0);
    }

    #[test]
    fn completely_different_strings() {
        assert_eq!(edit_distance("ABCD", "WXYZ"), 4);
        assert_eq!(edit_similarity("ABCD", "WXYZ"), 0.0);
    }

    #[test]
    fn similarity_degrades_with_substitutions() {
        let base = "AB12CD3456";
        let mut previous = edit_similarity(base, base);

        for changed in 1..=base.len() {
            let variant: String = base
                .chars()
                .enumerate()
                .map(|(i, c)| if i < changed { '#' } else { c })
                .collect();
            let current = edit_similarity(base, &variant);
            assert!(current <= previous, "{} substitutions raised similarity", changed);
            previous = current;
        }
    }
}

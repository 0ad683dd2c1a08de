//! Character-set (Jaccard) similarity.

use super::normalized_chars;
use std::collections::BTreeSet;

/// `|A ∩ B| / |A ∪ B|` over the unique characters of each string.
///
/// Returns `0.0` when both sets are empty.
pub fn set_similarity(a: &str, b: &str) -> f64 {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    set_similarity_chars(&a, &b)
}

pub(crate) fn set_similarity_chars(a: &[char], b: &[char]) -> f64 {
    let set_a: BTreeSet<char> = a.iter().copied().collect();
    let set_b: BTreeSet<char> = b.iter().copied().collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

//! Property-based tests for the similarity measures.

use plate_similarity::core::diff::{align, positional_diff, DiffStatus};
use plate_similarity::core::scorer::{
    composite_similarity, edit_distance, edit_similarity, normalize, sequence_ratio,
    set_similarity, ScorerConfig,
};
use proptest::prelude::*;

/// Short plate-like strings, mixed case
fn short_string() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,12}"
}

fn plate() -> impl Strategy<Value = String> {
    "[A-Z]{2}[0-9]{2}[A-Z]{2}[0-9]{4}"
}

proptest! {
    #[test]
    fn prop_identity(a in short_string()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
        prop_assert_eq!(edit_similarity(&a, &a), 1.0);
        prop_assert_eq!(composite_similarity(&a, &a), 1.0);
    }

    #[test]
    fn prop_symmetry(a in short_string(), b in short_string()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        prop_assert_eq!(set_similarity(&a, &b), set_similarity(&b, &a));
    }

    #[test]
    fn prop_scores_are_bounded(a in short_string(), b in short_string()) {
        for score in [
            edit_similarity(&a, &b),
            set_similarity(&a, &b),
            sequence_ratio(&a, &b),
            composite_similarity(&a, &b),
        ] {
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn prop_distance_bounded_by_longer_length(a in short_string(), b in short_string()) {
        let longer = a.chars().count().max(b.chars().count());
        let length_gap = a.chars().count().abs_diff(b.chars().count());
        let distance = edit_distance(&a, &b);
        prop_assert!(distance <= longer);
        prop_assert!(distance >= length_gap);
    }

    #[test]
    fn prop_case_insensitive(a in short_string(), b in short_string()) {
        let upper = composite_similarity(&a.to_uppercase(), &b);
        let lower = composite_similarity(&a.to_lowercase(), &b);
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn prop_pure(a in short_string(), b in short_string()) {
        prop_assert_eq!(composite_similarity(&a, &b), composite_similarity(&a, &b));
        prop_assert_eq!(positional_diff(&a, &b), positional_diff(&a, &b));
    }

    #[test]
    fn prop_diff_covers_longer_string(a in short_string(), b in short_string()) {
        let diff = positional_diff(&a, &b);
        let longer = a.chars().count().max(b.chars().count());
        prop_assert_eq!(diff.len(), longer);
        prop_assert_eq!(diff.exact_matches, diff.with_status(DiffStatus::Match).count());

        for (i, entry) in diff.entries.iter().enumerate() {
            prop_assert_eq!(entry.position, i);
        }
    }

    #[test]
    fn prop_alignment_is_equal_length_and_preserves_text(a in short_string(), b in short_string()) {
        let aligned = align(&a, &b);
        let (row_a, row_b) = aligned.to_strings();
        let longer = a.chars().count().max(b.chars().count());

        prop_assert_eq!(row_a.chars().count(), longer);
        prop_assert_eq!(row_b.chars().count(), longer);

        let kept_a: String = aligned.a.iter().flatten().collect();
        let kept_b: String = aligned.b.iter().flatten().collect();
        prop_assert_eq!(kept_a, normalize(&a));
        prop_assert_eq!(kept_b, normalize(&b));
    }

    #[test]
    fn prop_noisy_tail_plates_match(p in plate(), tail in "[A-Z0-9]") {
        let mut noisy = p.clone();
        noisy.pop();
        noisy.push_str(&tail);
        prop_assert!(composite_similarity(&p, &noisy) >= 0.6);
    }

    #[test]
    fn prop_custom_weights_stay_bounded(
        a in short_string(),
        b in short_string(),
        sequence in 0.0f64..10.0,
        edit in 0.01f64..10.0,
    ) {
        let scorer = ScorerConfig::new()
            .sequence_weight(sequence)
            .edit_weight(edit)
            .build()
            .unwrap();
        let score = scorer.composite(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}

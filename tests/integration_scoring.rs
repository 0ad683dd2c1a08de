//! Integration tests for the scoring API.
//!
//! These tests exercise the public surface end to end:
//! - Known plate scenarios
//! - Empty-input conventions
//! - Randomized plate batches

use plate_similarity::core::comparator::{compare_pairs, parse_pairs, BatchSummary, ThresholdStrategy};
use plate_similarity::core::diff::{align, positional_diff, DiffStatus};
use plate_similarity::core::plate::{is_valid_plate, PlateGenerator};
use plate_similarity::core::reporter::{DetailedReporter, DiffVisualizer, PairReport};
use plate_similarity::core::scorer::{
    composite_similarity, edit_distance, edit_similarity, set_similarity, SimilarityScorer,
};

#[test]
fn trailing_digit_is_one_edit() {
    assert_eq!(edit_distance("MH12AB1234", "MH12AB1235"), 1);
}

#[test]
fn character_set_overlap() {
    let similarity = set_similarity("AB1234", "AC1234");
    assert!((similarity - 5.0 / 7.0).abs() < 1e-9);
    assert!((similarity - 0.714).abs() < 1e-3);
}

#[test]
fn positional_diff_reports_extra_tail() {
    let diff = positional_diff("AB1234", "AB123");

    let matches: Vec<usize> = diff
        .with_status(DiffStatus::Match)
        .map(|e| e.position)
        .collect();
    assert_eq!(matches, vec![0, 1, 2, 3, 4]);

    let extra: Vec<_> = diff.with_status(DiffStatus::Extra).collect();
    assert_eq!(extra.len(), 1);
    assert_eq!(extra[0].position, 5);
    assert_eq!(extra[0].char_a, Some('4'));
}

#[test]
fn empty_pair_conventions() {
    assert_eq!(composite_similarity("", ""), 1.0);
    assert_eq!(composite_similarity("", "X"), 0.0);
    assert_eq!(composite_similarity("AB1234", ""), 0.0);
}

#[test]
fn case_differences_are_ignored() {
    assert_eq!(composite_similarity("ab12cd", "AB12CD"), 1.0);
    assert_eq!(composite_similarity("ab12cd3456", "AB12CD3456"), 1.0);
}

#[test]
fn single_character_differences_score_around_83_percent() {
    for (a, b) in [("AB1234", "AB1235"), ("AB1234", "AC1234")] {
        let score = composite_similarity(a, b) * 100.0;
        assert!((score - 83.0).abs() <= 20.0, "{} vs {} scored {}", a, b, score);
    }
}

#[test]
fn thousand_noisy_plates_stay_similar() {
    let mut generator = PlateGenerator::with_seed(2024);

    for _ in 0..1000 {
        let plate = generator.valid_plate();
        let noisy = generator.with_noisy_tail(&plate);
        assert!(is_valid_plate(&plate));

        let score = composite_similarity(&plate, &noisy);
        assert!(
            score >= 0.6,
            "{} vs {} scored {:.2}%",
            plate,
            noisy,
            score * 100.0
        );
    }
}

#[test]
fn random_noise_scores_below_near_match() {
    let mut generator = PlateGenerator::with_seed(99);

    for _ in 0..1000 {
        let plate = generator.valid_plate();
        let noise = generator.invalid_plate();
        let score = composite_similarity(&plate, &noise);
        assert!((0.0..=1.0).contains(&score));
    }
}

#[test]
fn edit_similarity_never_increases_with_more_substitutions() {
    let base = "MH12AB1234";
    let replacements = ['#', '@', '!', '$', '%', '^', '&', '*', '?', '~'];
    let mut previous = edit_similarity(base, base);
    assert_eq!(previous, 1.0);

    for changed in 1..=base.len() {
        let variant: String = base
            .chars()
            .enumerate()
            .map(|(i, c)| if i < changed { replacements[i] } else { c })
            .collect();
        let current = edit_similarity(base, &variant);
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn alignment_pads_to_equal_length() {
    let aligned = align("XAB1234", "AB1234");
    let (a, b) = aligned.to_strings();
    assert_eq!(a.len(), b.len());
    assert_eq!(b, "-AB1234");
}

#[test]
fn batch_from_text_matches_expected_pairs() {
    let input = "\
# predefined examples
hello,hellp
world,worl
test,best
string,strung
compute,compete
";
    let pairs = parse_pairs(input).unwrap();
    let results = compare_pairs(&pairs, &SimilarityScorer::new(), &ThresholdStrategy::balanced());
    let summary = BatchSummary::from_results(&results);

    assert_eq!(summary.total_pairs, 5);
    assert!(results.iter().all(|r| r.score > 0.5));
    assert!(summary.min_score <= summary.average_score);
    assert!(summary.average_score <= summary.max_score);
}

#[test]
fn full_report_renders() {
    let scorer = SimilarityScorer::new();
    let report = PairReport::new(scorer.analyze("similar", "similer"), &DetailedReporter::default());
    let text = report.render_text(&DiffVisualizer::default());

    assert!(text.contains("MISMATCH"));
    assert!(text.contains("Composite:"));
    assert!(report.to_json().unwrap().contains("\"verdict\""));
}

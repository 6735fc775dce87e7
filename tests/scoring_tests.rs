//! End-to-end properties of the normalize -> score -> classify pipeline

use chrono::NaiveDate;
use moodjour::domain::sentiment;
use moodjour::domain::text::normalize;
use moodjour::domain::{trend, Analysis, Emotion, Entry, Journal};

const CORPUS: &[&str] = &[
    "I am so happy today!",
    "Terrible, awful day. I feel miserable.",
    "The table is in the kitchen",
    "Dinner with friends was lovely, but the traffic was bad.",
    "Worried about the exam??",
    "GREAT news!!! Best day ever",
    "meh",
    "!!!",
];

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_shares_sum_to_one() {
    for text in CORPUS {
        let scores = Analysis::of(text).unwrap().scores;
        let sum = scores.positive + scores.negative + scores.neutral;
        assert!((sum - 1.0).abs() < 1e-9, "{:?} sums to {}", text, sum);
    }
}

#[test]
fn test_scores_stay_in_range() {
    for text in CORPUS {
        let scores = Analysis::of(text).unwrap().scores;
        assert!((-1.0..=1.0).contains(&scores.compound), "{:?}", text);
        for share in [scores.positive, scores.negative, scores.neutral] {
            assert!((0.0..=1.0).contains(&share), "{:?}", text);
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    for text in CORPUS {
        assert_eq!(Analysis::of(text).unwrap(), Analysis::of(text).unwrap());
    }
}

#[test]
fn test_sample_entries_land_in_expected_categories() {
    assert_eq!(
        Analysis::of("I am so happy today!").unwrap().emotion(),
        Emotion::Positive
    );
    assert_eq!(
        Analysis::of("Terrible, awful day. I feel miserable.")
            .unwrap()
            .emotion(),
        Emotion::VeryNegative
    );
    assert_eq!(
        Analysis::of("The table is in the kitchen").unwrap().emotion(),
        Emotion::Neutral
    );
}

#[test]
fn test_text_without_known_words_is_neutral() {
    let scores = sentiment::score(&normalize("The table is in the kitchen"));
    assert_eq!(scores.compound, 0.0);
    assert_eq!(scores.neutral, 1.0);
}

#[test]
fn test_normalized_text_drops_stop_words() {
    assert_eq!(normalize("I am so happy today!"), "happy today !");
    assert_eq!(normalize("the and of"), "");
}

#[test]
fn test_category_boundaries_are_inclusive() {
    assert_eq!(Emotion::classify(0.75), Emotion::VeryPositive);
    assert_eq!(Emotion::classify(0.25), Emotion::Positive);
    assert_eq!(Emotion::classify(0.05), Emotion::SlightlyPositive);
    assert_eq!(Emotion::classify(0.0), Emotion::Neutral);
    assert_eq!(Emotion::classify(-0.05), Emotion::SlightlyNegative);
    assert_eq!(Emotion::classify(-0.25), Emotion::Negative);
    assert_eq!(Emotion::classify(-0.75), Emotion::VeryNegative);
}

#[test]
fn test_categories_are_monotonic_in_compound() {
    let mut previous = Emotion::classify(1.0);
    for step in 0..=200 {
        let compound = 1.0 - step as f64 * 0.01;
        let current = Emotion::classify(compound);
        assert!(current >= previous, "{} broke ordering", compound);
        previous = current;
    }
    assert_eq!(previous, Emotion::VeryNegative);
}

#[test]
fn test_recorded_entries_feed_the_trend() {
    let today = day(2025, 1, 17);
    let mut journal = Journal::new();
    journal.push(Entry::analyze("2025-01-17", "I am so happy today!", today).unwrap());
    journal.push(Entry::analyze("2025-01-17", "The table is in the kitchen", today).unwrap());

    let points = trend(journal.entries(), today);
    assert_eq!(points.len(), 7);
    assert_eq!(points[6].date, today);

    let expected = journal.entries().iter().map(|e| e.compound).sum::<f64>() / 2.0;
    assert_eq!(points[6].mean, Some(expected));
    assert!(points[..6].iter().all(|p| p.mean.is_none()));
}

//! Time-windowed aggregation over scored entries
//!
//! Both aggregations are pure functions of the entry slice and `today` and
//! are recomputed from scratch on every call.

use crate::domain::emotion::Emotion;
use crate::domain::entry::Entry;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Number of calendar days in the trend series, ending today
pub const TREND_DAYS: i64 = 7;
/// Number of calendar days counted by the distribution, ending today
pub const DISTRIBUTION_DAYS: i64 = 30;

/// Mean compound score for one day; `None` when the day has no entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyMeanPoint {
    pub date: NaiveDate,
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionCount {
    pub emotion: Emotion,
    pub count: usize,
}

/// First day of an inclusive window of `days` days ending at `today`
fn window_start(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days - 1)
}

fn in_window(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    date >= window_start(today, days) && date <= today
}

/// One point per day from `today - 6` to `today`, in date order.
/// Days without entries are gap-filled with an absent mean.
pub fn trend(entries: &[Entry], today: NaiveDate) -> Vec<DailyMeanPoint> {
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|e| in_window(e.date, today, TREND_DAYS))
    {
        let slot = by_day.entry(entry.date).or_insert((0.0, 0));
        slot.0 += entry.compound;
        slot.1 += 1;
    }

    let start = window_start(today, TREND_DAYS);
    (0..TREND_DAYS)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let mean = by_day
                .get(&date)
                .map(|(sum, count)| sum / *count as f64);
            DailyMeanPoint { date, mean }
        })
        .collect()
}

/// Emotion counts over `[today - 29, today]`; only non-zero counts appear
pub fn distribution(entries: &[Entry], today: NaiveDate) -> BTreeMap<Emotion, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|e| in_window(e.date, today, DISTRIBUTION_DAYS))
    {
        *counts.entry(entry.emotion()).or_insert(0) += 1;
    }
    counts
}

/// Distribution ordered for display: descending count, ties in category order
pub fn ranked_distribution(entries: &[Entry], today: NaiveDate) -> Vec<EmotionCount> {
    let mut ranked: Vec<EmotionCount> = distribution(entries, today)
        .into_iter()
        .map(|(emotion, count)| EmotionCount { emotion, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.emotion.cmp(&b.emotion)));
    ranked
}

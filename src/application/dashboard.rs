//! Dashboard use case: 7-day trend and 30-day emotion distribution

use crate::domain::{ranked_distribution, trend, DailyMeanPoint, EmotionCount, Journal};
use chrono::NaiveDate;

/// Everything a chart renderer needs, as plain data
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub trend: Vec<DailyMeanPoint>,
    pub distribution: Vec<EmotionCount>,
}

/// Build the dashboard for `today`. `None` when the journal has no entries at
/// all, so callers can ask the user to add some first.
pub fn build_dashboard(journal: &Journal, today: NaiveDate) -> Option<Dashboard> {
    if journal.is_empty() {
        return None;
    }

    Some(Dashboard {
        today,
        trend: trend(journal.entries(), today),
        distribution: ranked_distribution(journal.entries(), today),
    })
}

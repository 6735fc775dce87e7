//! List entries use case

use crate::domain::{Entry, Journal};

/// Entries in recording order, optionally limited to the most recent `limit`.
pub fn list_entries(journal: &Journal, limit: Option<usize>) -> &[Entry] {
    match limit {
        Some(n) => journal.latest(n),
        None => journal.entries(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PolarityScores;
    use chrono::NaiveDate;

    fn journal(days: &[u32]) -> Journal {
        Journal::from_entries(
            days.iter()
                .map(|d| {
                    Entry::from_scores(
                        NaiveDate::from_ymd_opt(2025, 1, *d).unwrap(),
                        format!("day {}", d),
                        PolarityScores::neutral(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_list_all() {
        let journal = journal(&[5, 1, 3]);
        let texts: Vec<&str> = list_entries(&journal, None)
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["day 5", "day 1", "day 3"]);
    }

    #[test]
    fn test_list_with_limit() {
        let journal = journal(&[5, 1, 3]);
        assert_eq!(list_entries(&journal, Some(2)).len(), 2);
        assert_eq!(list_entries(&journal, Some(2))[0].text, "day 1");
    }
}

//! Journal entry model and the scoring pipeline that produces it

use crate::domain::emotion::Emotion;
use crate::domain::sentiment::{self, PolarityScores};
use crate::domain::text;
use crate::error::{MoodjourError, Result};
use chrono::NaiveDate;

/// Date format accepted from the user and written to the store
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One scored journal record. Immutable once created.
///
/// The emotion category is never stored: it is always derived from
/// `compound`, so label, colour and score cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub date: NaiveDate,
    pub text: String,
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl Entry {
    /// Build an entry from already computed scores
    pub fn from_scores(date: NaiveDate, text: impl Into<String>, scores: PolarityScores) -> Self {
        Entry {
            date,
            text: text.into(),
            compound: scores.compound,
            positive: scores.positive,
            negative: scores.negative,
            neutral: scores.neutral,
        }
    }

    /// Run raw user input through normalize -> score and stamp it with a date.
    ///
    /// `date_input` falls back to `today` when it is not `YYYY-MM-DD`.
    /// Whitespace-only text is rejected before any scoring happens.
    pub fn analyze(date_input: &str, raw_text: &str, today: NaiveDate) -> Result<Self> {
        let analysis = Analysis::of(raw_text)?;
        let date = parse_entry_date(date_input, today);
        Ok(Entry::from_scores(date, raw_text.trim(), analysis.scores))
    }

    pub fn emotion(&self) -> Emotion {
        Emotion::classify(self.compound)
    }

    pub fn color(&self) -> &'static str {
        self.emotion().color()
    }

    pub fn scores(&self) -> PolarityScores {
        PolarityScores {
            positive: self.positive,
            negative: self.negative,
            neutral: self.neutral,
            compound: self.compound,
        }
    }
}

/// Scoring result for a piece of text, without a date attached
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub normalized: String,
    pub scores: PolarityScores,
}

impl Analysis {
    pub fn of(raw_text: &str) -> Result<Self> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(MoodjourError::EmptyEntry);
        }

        let normalized = text::normalize(trimmed);
        let scores = sentiment::score(&normalized);
        Ok(Analysis { normalized, scores })
    }

    pub fn emotion(&self) -> Emotion {
        Emotion::classify(self.scores.compound)
    }
}

/// Parse a `YYYY-MM-DD` date, substituting `today` when it does not parse
pub fn parse_entry_date(input: &str, today: NaiveDate) -> NaiveDate {
    match NaiveDate::parse_from_str(input.trim(), DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(input, error = %e, fallback = %today, "unparseable entry date");
            today
        }
    }
}

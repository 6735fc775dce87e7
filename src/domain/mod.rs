//! Domain layer - Scoring pipeline, entry model and aggregation

pub mod aggregate;
pub mod emotion;
pub mod entry;
pub mod journal;
pub mod sentiment;
pub mod text;

pub use aggregate::{distribution, ranked_distribution, trend, DailyMeanPoint, EmotionCount};
pub use emotion::Emotion;
pub use entry::{parse_entry_date, Analysis, Entry, DATE_FORMAT};
pub use journal::Journal;
pub use sentiment::{PolarityScorer, PolarityScores};

//! moodjour - Emotion journal tracker
//!
//! Records free-text journal entries, scores their emotional tone with a
//! valence lexicon, and aggregates the scores into a daily mood trend and an
//! emotion distribution.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjourError;

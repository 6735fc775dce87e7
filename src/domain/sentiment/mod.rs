//! Lexicon-based sentiment scoring

pub mod lexicon;
pub mod scorer;

pub use lexicon::Lexicon;
pub use scorer::{PolarityScorer, PolarityScores};

/// Score normalized text with the built-in lexicon
pub fn score(normalized_text: &str) -> PolarityScores {
    PolarityScorer::default().score(normalized_text)
}

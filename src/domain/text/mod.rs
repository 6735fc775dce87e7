//! Text normalization resources

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

pub use lemmatizer::Lemmatizer;
pub use normalizer::{normalize, tokenize, Normalizer};

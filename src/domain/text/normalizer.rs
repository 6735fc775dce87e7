//! Text normalization: lowercase, tokenize, drop stop words, lemmatize

use super::lemmatizer::Lemmatizer;
use super::stopwords;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Words (keeping internal apostrophes) and the emphasis marks `!` and `?`.
/// Everything else is a separator.
fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\w+(?:'\w+)*|[!?]").unwrap())
}

/// Split lowercased text into word-level tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Normalizer over a fixed stop-word set and lemmatizer
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    stopwords: &'a HashSet<&'static str>,
    lemmatizer: &'a Lemmatizer,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Normalizer::new(stopwords::english(), Lemmatizer::english())
    }
}

impl<'a> Normalizer<'a> {
    pub fn new(stopwords: &'a HashSet<&'static str>, lemmatizer: &'a Lemmatizer) -> Self {
        Normalizer {
            stopwords,
            lemmatizer,
        }
    }

    /// Space-joined root forms of the non-stop-word tokens.
    /// Returns an empty string when nothing survives.
    pub fn normalize(&self, raw: &str) -> String {
        tokenize(raw)
            .iter()
            .filter(|token| !self.stopwords.contains(token.as_str()))
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalize with the built-in English resources
pub fn normalize(raw: &str) -> String {
    Normalizer::default().normalize(raw)
}

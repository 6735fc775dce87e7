//! Dictionary-based lemmatization
//!
//! WordNet-style noun morphology: irregular forms come from an exception
//! table, regular plurals are detached by suffix rules, and a candidate is
//! only accepted when it is a known base form. No part-of-speech tagging is
//! done; every token is treated as a noun. Unknown words pass through.

use crate::domain::sentiment::Lexicon;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Noun suffix substitutions, in rule order
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("selves", "self"),
    ("halves", "half"),
    ("wolves", "wolf"),
    ("thieves", "thief"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

/// Base forms for everyday journal vocabulary, on top of the lexicon's words
const BASE_WORDS: &[&str] = &[
    "afternoon", "bag", "bill", "birthday", "book", "boss", "box", "brother", "bus", "car",
    "cat", "chair", "child", "class", "coffee", "colleague", "computer", "cousin", "dad",
    "date", "daughter", "day", "deadline", "dinner", "dish", "doctor", "dog", "dream",
    "email", "evening", "exam", "family", "feeling", "film", "flower", "food", "game",
    "glass", "goal", "grade", "guest", "habit", "holiday", "home", "hour", "house", "idea",
    "job", "kid", "lesson", "life", "lunch", "meal", "meeting", "memory", "message",
    "minute", "mom", "moment", "money", "month", "morning", "movie", "music", "neighbor",
    "news", "night", "parent", "park", "party", "person", "phone", "plan", "plant",
    "project", "rain", "relationship", "result", "room", "school", "sister", "sleep", "son",
    "song", "story", "street", "student", "sun", "task", "teacher", "team", "tear", "test",
    "thing", "thought", "time", "today", "tomorrow", "traffic", "train", "trip", "walk",
    "watch", "weather", "week", "weekend", "wish", "work", "world", "year", "yesterday",
];

/// Reduces tokens to their root form against a known vocabulary
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    known: HashSet<String>,
    exceptions: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    /// Build a lemmatizer that accepts the given words as base forms
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Lemmatizer {
            known: vocabulary.into_iter().map(Into::into).collect(),
            exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
        }
    }

    /// Process-wide English lemmatizer: lexicon words plus common nouns
    pub fn english() -> &'static Lemmatizer {
        static LEMMATIZER: OnceLock<Lemmatizer> = OnceLock::new();
        LEMMATIZER.get_or_init(|| {
            Lemmatizer::new(
                Lexicon::vader()
                    .words()
                    .chain(BASE_WORDS.iter().copied())
                    .map(str::to_string),
            )
        })
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    /// Shortest known form among the token itself and its rule-derived
    /// candidates; the token unchanged when none is known.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(base) = self.exceptions.get(token) {
            return (*base).to_string();
        }

        std::iter::once(token.to_string())
            .chain(NOUN_RULES.iter().filter_map(|(suffix, replacement)| {
                token
                    .strip_suffix(suffix)
                    .map(|stem| format!("{}{}", stem, replacement))
            }))
            .filter(|candidate| !candidate.is_empty() && self.is_known(candidate))
            .min_by_key(|candidate| candidate.len())
            .unwrap_or_else(|| token.to_string())
    }
}

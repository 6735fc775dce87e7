//! Valence lexicon, negations and degree modifiers

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Embedded `word<TAB>valence` asset; lines starting with `#` are comments.
const VADER_LEXICON: &str = include_str!("vader_lexicon.txt");

/// Scalar added by an intensifying booster word
pub const B_INCR: f64 = 0.293;
/// Scalar added by a dampening booster word
pub const B_DECR: f64 = -0.293;
/// Multiplier applied to a negated valence
pub const N_SCALAR: f64 = -0.74;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
    "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
    "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont",
    "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
    "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping",
    "flippin", "frackin", "fracking", "fricking", "frickin", "frigging", "friggin", "fully",
    "fuckin", "fucking", "fuggin", "fugging", "greatly", "hella", "highly", "hugely",
    "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "total", "totally", "tremendous", "tremendously", "uber", "unbelievably",
    "unusually", "utter", "utterly", "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "kind of", "kinda", "kindof", "kind-of", "less", "little",
    "marginal", "marginally", "occasional", "occasionally", "partly", "scarce", "scarcely",
    "slight", "slightly", "somewhat", "sort of", "sorta", "sortof", "sort-of",
];

/// Word-level sentiment resources used by the scorer
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Word to valence mapping
    words: HashMap<String, f64>,
    /// Negation words
    negations: HashSet<&'static str>,
    /// Booster word to scalar
    boosters: HashMap<&'static str, f64>,
}

impl Lexicon {
    /// Build a lexicon from `word<TAB>valence` lines. Malformed lines are skipped.
    pub fn from_tsv(data: &str) -> Self {
        let words = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let mut parts = line.split('\t');
                let word = parts.next()?.trim();
                let valence = parts.next()?.trim().parse::<f64>().ok()?;
                Some((word.to_lowercase(), valence))
            })
            .collect();

        let boosters = INCREMENTS
            .iter()
            .map(|w| (*w, B_INCR))
            .chain(DECREMENTS.iter().map(|w| (*w, B_DECR)))
            .collect();

        Lexicon {
            words,
            negations: NEGATIONS.iter().copied().collect(),
            boosters,
        }
    }

    /// Process-wide lexicon parsed from the embedded asset
    pub fn vader() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(|| Lexicon::from_tsv(VADER_LEXICON))
    }

    /// Valence of a word, if it carries sentiment
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Booster scalar for a degree adverb
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// True for explicit negations and any `n't` contraction
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't")
    }

    /// Every word carrying a valence
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

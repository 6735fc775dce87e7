//! Lexicon-based polarity scoring
//!
//! Sums word valences adjusted by degree modifiers, negation, contrastive
//! "but" and punctuation emphasis, then normalizes the sum into a compound
//! score in [-1, 1]. Positive, negative and neutral shares always sum to 1.

use super::lexicon::{Lexicon, N_SCALAR};

/// Normalization constant approximating the maximum expected raw sum
const ALPHA: f64 = 15.0;
/// Emphasis added per exclamation mark
const EXCLAMATION_INCR: f64 = 0.292;
/// Exclamation marks beyond this count add nothing
const MAX_EXCLAMATIONS: usize = 4;
/// Emphasis added per question mark when there are two or three
const QUESTION_INCR_SMALL: f64 = 0.18;
/// Flat emphasis when there are more than three question marks
const QUESTION_INCR_LARGE: f64 = 0.96;
/// Multiplier for "never so ..." / "never this ..."
const NEVER_AMPLIFIER: f64 = 1.25;

/// Four-part polarity result for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// Scores for a text with nothing to score
    pub fn neutral() -> Self {
        PolarityScores {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        }
    }
}

/// Scores normalized text against a lexicon
#[derive(Debug, Clone, Copy)]
pub struct PolarityScorer<'a> {
    lexicon: &'a Lexicon,
}

impl Default for PolarityScorer<'static> {
    fn default() -> Self {
        PolarityScorer::new(Lexicon::vader())
    }
}

impl<'a> PolarityScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        PolarityScorer { lexicon }
    }

    /// Score a whitespace-separated, lowercased token sequence.
    ///
    /// Empty input (or input made only of punctuation) is fully neutral.
    pub fn score(&self, text: &str) -> PolarityScores {
        let words = words_of(text);
        if words.is_empty() {
            return PolarityScores::neutral();
        }

        let mut sentiments = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let starts_kind_of = *word == "kind" && words.get(i + 1) == Some(&"of");
            if starts_kind_of || self.lexicon.booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&words, i));
        }

        but_check(&words, &mut sentiments);
        score_valence(&sentiments, text)
    }

    /// Valence of `words[i]` after modifiers in the three preceding tokens
    fn valence_at(&self, words: &[&str], i: usize) -> f64 {
        let Some(mut valence) = self.lexicon.valence(words[i]) else {
            return 0.0;
        };

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let preceding = words[i - (start_i + 1)];
            if self.lexicon.contains(preceding) {
                continue;
            }

            let mut scalar = self.scalar_inc_dec(preceding, valence);
            match start_i {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = self.negation_check(valence, words, start_i, i);
        }

        self.least_check(valence, words, i)
    }

    /// Booster contribution, signed to push away from zero
    fn scalar_inc_dec(&self, word: &str, valence: f64) -> f64 {
        match self.lexicon.booster(word) {
            Some(scalar) if valence < 0.0 => -scalar,
            Some(scalar) => scalar,
            None => 0.0,
        }
    }

    fn negation_check(&self, valence: f64, words: &[&str], start_i: usize, i: usize) -> f64 {
        let amplifies = |w: &str| w == "so" || w == "this";
        match start_i {
            0 => {
                if self.lexicon.is_negation(words[i - 1]) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
            1 => {
                let (w2, w1) = (words[i - 2], words[i - 1]);
                if w2 == "never" && amplifies(w1) {
                    valence * NEVER_AMPLIFIER
                } else if w2 == "without" && w1 == "doubt" {
                    valence
                } else if self.lexicon.is_negation(w2) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
            _ => {
                let (w3, w2, w1) = (words[i - 3], words[i - 2], words[i - 1]);
                if w3 == "never" && (amplifies(w2) || amplifies(w1)) {
                    valence * NEVER_AMPLIFIER
                } else if w3 == "without" && (w2 == "doubt" || w1 == "doubt") {
                    valence
                } else if self.lexicon.is_negation(w3) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
        }
    }

    /// "least happy" is negated, "at least happy" is not
    fn least_check(&self, valence: f64, words: &[&str], i: usize) -> f64 {
        if i == 0 || words[i - 1] != "least" || self.lexicon.contains(words[i - 1]) {
            return valence;
        }
        if i > 1 && (words[i - 2] == "at" || words[i - 2] == "very") {
            valence
        } else {
            valence * N_SCALAR
        }
    }
}

/// Tokens that can carry valence: surrounding punctuation stripped when the
/// remainder is still a word, single characters dropped.
fn words_of(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|word| word.chars().count() > 1)
        .collect()
}

/// Down-weight sentiment before the first "but", up-weight after it
fn but_check(words: &[&str], sentiments: &mut [f64]) {
    let Some(but_index) = words.iter().position(|w| *w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_index {
            *sentiment *= 0.5;
        } else if idx > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR_SMALL,
        _ => QUESTION_INCR_LARGE,
    };

    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

/// `x / sqrt(x² + α)`, clamped to [-1, 1]
pub fn normalize_score(score: f64) -> f64 {
    let normalized = score / (score * score + ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize_score(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0, 0.0, 0.0);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return PolarityScores::neutral();
    }

    PolarityScores {
        positive: (pos_sum / total).abs(),
        negative: (neg_sum / total).abs(),
        neutral: (neu_count / total).abs(),
        compound,
    }
}

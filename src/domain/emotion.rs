//! Emotion categories and compound-score classification

use std::fmt;
use std::str::FromStr;

/// Seven ordered emotion categories, most positive first.
///
/// The display colour is attached to the variant, so a label and its colour
/// can never be stored out of step with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Emotion {
    VeryPositive,
    Positive,
    SlightlyPositive,
    Neutral,
    SlightlyNegative,
    Negative,
    VeryNegative,
}

/// One row of the threshold cascade; both bounds are inclusive.
#[derive(Debug, Clone, Copy)]
enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl Bound {
    fn matches(self, compound: f64) -> bool {
        match self {
            Bound::AtLeast(t) => compound >= t,
            Bound::AtMost(t) => compound <= t,
        }
    }
}

/// Evaluated top to bottom; first match wins, `Neutral` otherwise.
const CASCADE: [(Bound, Emotion); 6] = [
    (Bound::AtLeast(0.75), Emotion::VeryPositive),
    (Bound::AtLeast(0.25), Emotion::Positive),
    (Bound::AtLeast(0.05), Emotion::SlightlyPositive),
    (Bound::AtMost(-0.75), Emotion::VeryNegative),
    (Bound::AtMost(-0.25), Emotion::Negative),
    (Bound::AtMost(-0.05), Emotion::SlightlyNegative),
];

impl Emotion {
    /// All categories in display order
    pub const ALL: [Emotion; 7] = [
        Emotion::VeryPositive,
        Emotion::Positive,
        Emotion::SlightlyPositive,
        Emotion::Neutral,
        Emotion::SlightlyNegative,
        Emotion::Negative,
        Emotion::VeryNegative,
    ];

    /// Map a compound score to its category. Total over the real line;
    /// NaN falls through to `Neutral`.
    pub fn classify(compound: f64) -> Emotion {
        CASCADE
            .iter()
            .find(|(bound, _)| bound.matches(compound))
            .map(|(_, emotion)| *emotion)
            .unwrap_or(Emotion::Neutral)
    }

    /// Canonical label, without decoration
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::VeryPositive => "Very Positive",
            Emotion::Positive => "Positive",
            Emotion::SlightlyPositive => "Slightly Positive",
            Emotion::Neutral => "Neutral",
            Emotion::SlightlyNegative => "Slightly Negative",
            Emotion::Negative => "Negative",
            Emotion::VeryNegative => "Very Negative",
        }
    }

    /// Colour name persisted alongside the label
    pub fn color(&self) -> &'static str {
        match self {
            Emotion::VeryPositive => "Dark Green",
            Emotion::Positive => "Green",
            Emotion::SlightlyPositive => "Light Green",
            Emotion::Neutral => "Yellow",
            Emotion::SlightlyNegative => "Orange",
            Emotion::Negative => "Red",
            Emotion::VeryNegative => "Dark Red",
        }
    }

    /// Hex colour used by chart renderers
    pub fn hex(&self) -> &'static str {
        match self {
            Emotion::VeryPositive => "#006400",
            Emotion::Positive => "#228B22",
            Emotion::SlightlyPositive => "#90EE90",
            Emotion::Neutral => "#FFD700",
            Emotion::SlightlyNegative => "#FF8C00",
            Emotion::Negative => "#DC143C",
            Emotion::VeryNegative => "#8B0000",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::VeryPositive => "😄",
            Emotion::Positive => "🙂",
            Emotion::SlightlyPositive => "😊",
            Emotion::Neutral => "😐",
            Emotion::SlightlyNegative => "😕",
            Emotion::Negative => "😔",
            Emotion::VeryNegative => "😭",
        }
    }

    /// Label as shown to the user, optionally decorated with the emoji
    pub fn display(&self, emoji: bool) -> String {
        if emoji {
            format!("{} {}", self.label(), self.emoji())
        } else {
            self.label().to_string()
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Emotion {
    type Err = String;

    /// Accepts canonical labels as well as emoji-decorated ones
    /// (e.g. "Positive 🙂"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = Emotion::ALL
            .iter()
            .find_map(|e| trimmed.strip_suffix(e.emoji()))
            .unwrap_or(trimmed)
            .trim();

        Emotion::ALL
            .iter()
            .copied()
            .find(|e| e.label().eq_ignore_ascii_case(bare))
            .ok_or_else(|| format!("Unknown emotion label: '{}'", s))
    }
}

//! Output formatting utilities

use crate::application::Dashboard;
use crate::domain::{Analysis, Entry};

/// Characters in a full-scale (|mean| = 1) trend bar
const BAR_WIDTH: f64 = 20.0;

/// Format entries as a Date / Emotion / Compound table
pub fn format_entry_list(entries: &[Entry], emoji: bool) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = format!("{:<10}  {:<20}  {:>8}\n", "Date", "Emotion", "Compound");
    for entry in entries {
        output.push_str(&format!(
            "{:<10}  {:<20}  {:>8.2}\n",
            entry.date.format("%Y-%m-%d"),
            entry.emotion().display(emoji),
            entry.compound
        ));
    }
    output
}

/// Format the scores of a single analysis
pub fn format_analysis(analysis: &Analysis, emoji: bool) -> String {
    let scores = &analysis.scores;
    format!(
        "Emotion:  {}\n\
        Compound: {:.4}\n\
        Positive: {:.3}\n\
        Negative: {:.3}\n\
        Neutral:  {:.3}\n",
        analysis.emotion().display(emoji),
        scores.compound,
        scores.positive,
        scores.negative,
        scores.neutral
    )
}

fn trend_bar(mean: f64) -> String {
    let width = (mean.abs() * BAR_WIDTH).round() as usize;
    let glyph = if mean < 0.0 { '▒' } else { '█' };
    std::iter::repeat(glyph).take(width).collect()
}

/// Format the trend series and emotion distribution as text charts
pub fn format_dashboard(dashboard: &Dashboard, emoji: bool) -> String {
    let mut output = String::from("Mood Trend (Past 7 Days)\n");
    for point in &dashboard.trend {
        let day = point.date.format("%b %d");
        match point.mean {
            Some(mean) => {
                output.push_str(&format!("{}  {:>+6.2}  {}\n", day, mean, trend_bar(mean)))
            }
            None => output.push_str(&format!("{}  {:>6}\n", day, "-")),
        }
    }

    output.push_str("\nEmotion Distribution (Past 30 Days)\n");
    if dashboard.distribution.is_empty() {
        output.push_str("No entries in the past 30 days\n");
    }
    for count in &dashboard.distribution {
        output.push_str(&format!(
            "{:<20}  {:>4}  {}\n",
            count.emotion.display(emoji),
            count.count,
            count.emotion.hex()
        ));
    }

    output
}

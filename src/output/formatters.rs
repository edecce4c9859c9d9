//! Formatting utilities for terminal output

use crate::solver::ScoredWord;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a letter count relative to the most frequent letter
#[must_use]
pub fn frequency_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count as f64, width)
}

/// One ranked line: position, word, score and an answer marker
#[must_use]
pub fn ranked_line(rank: usize, scored: &ScoredWord) -> String {
    let marker = if scored.is_valid_guess { " ✓" } else { "" };
    format!(
        "{rank:>2}. {:<8} {:>6}{marker}",
        scored.word.text(),
        scored.score
    )
}

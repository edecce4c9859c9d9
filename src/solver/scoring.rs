//! Letter-frequency word scoring
//!
//! A word scores the frequency of each distinct letter it contains, so a
//! repeated letter only counts once.

use super::FrequencyTable;
use crate::core::{Word, WordSet};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Number of top letters excluded when picking a second exploration word
pub const SECOND_DISCOVERY_EXCLUDED: usize = 5;

/// A word with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: usize,
    /// Word is itself a plausible answer (see [`super::rank_discoveries`])
    pub is_valid_guess: bool,
}

/// Score a word by the frequencies of its distinct letters
///
/// Letters in `forbidden` contribute nothing.
///
/// # Examples
/// ```
/// use letterwise::core::Language;
/// use letterwise::solver::{FrequencyTable, score};
/// use letterwise::wordlists::loader::parse_dictionary;
/// use rustc_hash::FxHashSet;
///
/// let words = parse_dictionary("speed,erase", 5, |c| Language::English.contains(c));
/// let table = FrequencyTable::from_words(&words);
///
/// // S=2, P=1, E=4, D=1; the second E is not counted again
/// assert_eq!(score(&words.as_slice()[0], &table, &FxHashSet::default()), 8);
/// ```
#[must_use]
pub fn score(word: &Word, freq: &FrequencyTable, forbidden: &FxHashSet<char>) -> usize {
    word.distinct_chars()
        .filter(|c| !forbidden.contains(c))
        .map(|c| freq.get(c))
        .sum()
}

/// Score every word and sort by descending score
///
/// Ties keep the word set's order.
#[must_use]
pub fn rank_by_score(
    words: &WordSet,
    freq: &FrequencyTable,
    forbidden: &FxHashSet<char>,
) -> Vec<ScoredWord> {
    let mut scored: Vec<ScoredWord> = words
        .as_slice()
        .par_iter()
        .map(|word| ScoredWord {
            word: word.clone(),
            score: score(word, freq, forbidden),
            is_valid_guess: false,
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Rank opening words by raw letter coverage
#[must_use]
pub fn rank_start_words(words: &WordSet, freq: &FrequencyTable) -> Vec<ScoredWord> {
    rank_by_score(words, freq, &FxHashSet::default())
}

/// Letters ignored when ranking second exploration words
#[must_use]
pub fn second_discovery_forbidden(freq: &FrequencyTable) -> FxHashSet<char> {
    freq.most_frequent(SECOND_DISCOVERY_EXCLUDED)
}

/// Rank follow-up words that avoid the most common letters
///
/// The five most frequent letters are left out of the score, which steers
/// the second guess toward letters the first one did not probe.
#[must_use]
pub fn rank_second_discovery_words(words: &WordSet, freq: &FrequencyTable) -> Vec<ScoredWord> {
    rank_by_score(words, freq, &second_discovery_forbidden(freq))
}

//! Letter frequency analysis
//!
//! Counts every letter occurrence across a word set. A letter appearing
//! twice in one word counts twice.

use crate::core::WordSet;
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter occurrence counts in first-encounter order
///
/// Lookups of unseen letters return zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<(char, usize)>,
    index: FxHashMap<char, usize>,
}

impl FrequencyTable {
    /// Count letters across `words`
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::Language;
    /// use letterwise::solver::FrequencyTable;
    /// use letterwise::wordlists::loader::parse_dictionary;
    ///
    /// let words = parse_dictionary("speed,erase", 5, |c| Language::English.contains(c));
    /// let table = FrequencyTable::from_words(&words);
    ///
    /// assert_eq!(table.get('E'), 4);
    /// assert_eq!(table.get('Z'), 0);
    /// assert_eq!(table.total(), 10);
    /// ```
    #[must_use]
    pub fn from_words(words: &WordSet) -> Self {
        let mut table = Self::default();
        for word in words {
            for &c in word.chars() {
                table.increment(c);
            }
        }
        table
    }

    fn increment(&mut self, c: char) {
        if let Some(&slot) = self.index.get(&c) {
            self.counts[slot].1 += 1;
        } else {
            self.index.insert(c, self.counts.len());
            self.counts.push((c, 1));
        }
    }

    /// Occurrences of `c`, zero if never seen
    #[inline]
    #[must_use]
    pub fn get(&self, c: char) -> usize {
        self.index.get(&c).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Number of distinct letters seen
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    /// Entries in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Entries by descending count
    ///
    /// Ties keep first-encounter order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, usize)> {
        let mut sorted = self.counts.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// The `n` most frequent letters, ties broken as in [`Self::sorted`]
    #[must_use]
    pub fn most_frequent(&self, n: usize) -> FxHashSet<char> {
        self.sorted().into_iter().take(n).map(|(c, _)| c).collect()
    }
}

/// Count letters across `words`
#[must_use]
pub fn compute_frequencies(words: &WordSet) -> FrequencyTable {
    FrequencyTable::from_words(words)
}

//! Recomputation pipeline
//!
//! raw buffer → [`WordSet`] → frequencies → scores → filter → discoveries.
//! Every input change recomputes everything downstream of the word set; only
//! the word set itself is cached, keyed by selection and buffer.

use super::{
    FrequencyTable, ScoredWord, compute_valid_guesses, rank_discoveries,
    rank_second_discovery_words, rank_start_words,
};
use crate::core::{ConstraintError, ConstraintState, Language, WordSet};
use crate::wordlists::loader::parse_dictionary;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Which words are relevant: dictionary language and word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub language: Language,
    pub length: usize,
}

impl Selection {
    #[must_use]
    pub const fn new(language: Language, length: usize) -> Self {
        Self { language, length }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(Language::default(), DEFAULT_WORD_LENGTH)
    }
}

/// Everything derived from one word set and one constraint state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub relevant_words: usize,
    pub frequencies: FrequencyTable,
    /// `(letter, count)` by descending count
    pub frequency_list: Vec<(char, usize)>,
    pub start_words: Vec<ScoredWord>,
    pub second_discovery_words: Vec<ScoredWord>,
    pub valid_guesses: WordSet,
    pub discoveries: Vec<ScoredWord>,
}

impl Analysis {
    /// Run the whole pipeline over `words`
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidShape` if `constraints` describes a
    /// different word length than `words`.
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::{ConstraintState, Language};
    /// use letterwise::solver::Analysis;
    /// use letterwise::wordlists::loader::parse_dictionary;
    ///
    /// let words = parse_dictionary("APPLE,ANGER,BREAD,CRANE,GRAPE", 5, |c| {
    ///     Language::English.contains(c)
    /// });
    /// let analysis = Analysis::compute(&words, &ConstraintState::new(5)).unwrap();
    ///
    /// assert_eq!(analysis.relevant_words, 5);
    /// assert_eq!(analysis.start_words[0].word.text(), "GRAPE");
    /// ```
    pub fn compute(
        words: &WordSet,
        constraints: &ConstraintState,
    ) -> Result<Self, ConstraintError> {
        if constraints.len() != words.word_length() {
            return Err(ConstraintError::InvalidShape {
                expected: words.word_length(),
                found: constraints.len(),
            });
        }

        let contradictions = constraints.contradictions();
        if !contradictions.is_empty() {
            log::warn!(
                "Letters both absent and present: {}",
                contradictions.iter().collect::<String>()
            );
        }

        let frequencies = FrequencyTable::from_words(words);
        let frequency_list = frequencies.sorted();
        let start_words = rank_start_words(words, &frequencies);
        let second_discovery_words = rank_second_discovery_words(words, &frequencies);
        let valid_guesses = compute_valid_guesses(words, constraints);
        let discoveries = rank_discoveries(words, &frequencies, constraints, &valid_guesses);

        log::debug!(
            "Analysed {} words: {} letters, {} valid guesses",
            words.len(),
            frequencies.len(),
            valid_guesses.len()
        );

        Ok(Self {
            relevant_words: words.len(),
            frequencies,
            frequency_list,
            start_words,
            second_discovery_words,
            valid_guesses,
            discoveries,
        })
    }
}

/// Pipeline inputs plus the cached word set
///
/// The raw buffer arrives from outside (embedded dictionary, file, fetch).
/// Until it does, every result is empty.
#[derive(Debug, Default)]
pub struct Pipeline {
    raw: Option<String>,
    selection: Selection,
    constraints: Option<ConstraintState>,
    words: Option<WordSet>,
}

impl Pipeline {
    /// Create a pipeline with no dictionary loaded
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the raw dictionary buffer
    pub fn set_raw_dictionary(&mut self, raw: impl Into<String>) {
        self.raw = Some(raw.into());
        self.words = None;
    }

    /// Change language or word length
    ///
    /// Constraints for a different length are dropped.
    pub fn set_selection(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.words = None;
            if self
                .constraints
                .as_ref()
                .is_some_and(|c| c.len() != selection.length)
            {
                log::info!("Word length changed to {}, clearing constraints", selection.length);
                self.constraints = None;
            }
        }
    }

    /// Replace the constraints
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidShape` if `constraints` does not match
    /// the selected word length.
    pub fn set_constraints(&mut self, constraints: ConstraintState) -> Result<(), ConstraintError> {
        if constraints.len() != self.selection.length {
            return Err(ConstraintError::InvalidShape {
                expected: self.selection.length,
                found: constraints.len(),
            });
        }
        self.constraints = Some(constraints);
        Ok(())
    }

    /// Current constraints, unconstrained if none were set
    #[must_use]
    pub fn constraints(&self) -> ConstraintState {
        self.constraints
            .clone()
            .unwrap_or_else(|| ConstraintState::new(self.selection.length))
    }

    /// Relevant words for the current selection
    pub fn words(&mut self) -> &WordSet {
        let selection = self.selection;
        let raw = self.raw.as_deref();
        self.words.get_or_insert_with(|| {
            let words = raw.map_or_else(
                || WordSet::new(selection.length),
                |raw| {
                    parse_dictionary(raw, selection.length, |c| selection.language.contains(c))
                },
            );
            log::debug!(
                "Normalized {} {}-letter {} words",
                words.len(),
                selection.length,
                selection.language
            );
            words
        })
    }

    /// Recompute every derived value
    ///
    /// # Errors
    /// Propagates [`Analysis::compute`] errors.
    pub fn analysis(&mut self) -> Result<Analysis, ConstraintError> {
        let constraints = self.constraints();
        Analysis::compute(self.words(), &constraints)
    }
}

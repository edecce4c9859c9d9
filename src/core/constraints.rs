//! Accumulated knowledge about the hidden word
//!
//! A [`ConstraintState`] holds three co-indexed pieces of knowledge:
//! - `correct_at[i]`: letter known to occupy position `i`
//! - `present_wrong_position[i]`: letters in the word but not at position `i`
//! - `known_absent`: letters not in the word at all
//!
//! The state is trusted as given. Contradictions (a letter both absent and
//! present) are reported by [`ConstraintState::contradictions`] but never
//! reconciled.

use super::{Feedback, Mark, Word, canonical_letter};
use rustc_hash::FxHashSet;
use std::fmt;

/// Characters that mark an unknown position in a `correct` pattern
const UNKNOWN_MARKERS: [char; 4] = [' ', '_', '.', '?'];

/// Error type for malformed constraint input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// Constraint input does not fit the word length
    InvalidShape { expected: usize, found: usize },
    /// A new correct letter disagrees with one already known
    Conflict {
        position: usize,
        known: char,
        found: char,
    },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { expected, found } => write!(
                f,
                "Constraint covers {found} positions but words have {expected} letters"
            ),
            Self::Conflict {
                position,
                known,
                found,
            } => write!(
                f,
                "Position {} is already known to be '{known}', not '{found}'",
                position + 1
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// Raw constraint strings as entered by a user
///
/// - `correct`: one character per position; ` `, `_`, `.` or `?` for unknown
/// - `present`: one string per position, letters seen there in the wrong spot
/// - `absent`: letters known not to be in the word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintInput {
    pub correct: String,
    pub present: Vec<String>,
    pub absent: String,
}

/// Known constraints for words of a fixed length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    correct_at: Vec<Option<char>>,
    present_wrong_position: Vec<FxHashSet<char>>,
    known_absent: FxHashSet<char>,
}

impl ConstraintState {
    /// Create an unconstrained state for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            correct_at: vec![None; length],
            present_wrong_position: vec![FxHashSet::default(); length],
            known_absent: FxHashSet::default(),
        }
    }

    /// Build a state from raw user input
    ///
    /// Input shorter than `length` leaves the remaining positions unknown.
    /// Letters are uppercased; whitespace inside `present`/`absent` and
    /// characters without a single uppercase form are ignored.
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidShape` if `correct` has more
    /// characters, or `present` more entries, than `length`.
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::{ConstraintInput, ConstraintState};
    ///
    /// let input = ConstraintInput {
    ///     correct: " r".to_string(),
    ///     present: vec!["e".to_string()],
    ///     absent: "b t".to_string(),
    /// };
    /// let state = ConstraintState::from_input(5, &input).unwrap();
    ///
    /// assert_eq!(state.correct_at(1), Some('R'));
    /// assert_eq!(state.correct_at(4), None);
    /// assert!(state.present_wrong_at(0).contains(&'E'));
    /// assert!(state.known_absent().contains(&'T'));
    /// ```
    pub fn from_input(length: usize, input: &ConstraintInput) -> Result<Self, ConstraintError> {
        let correct_len = input.correct.chars().count();
        if correct_len > length {
            return Err(ConstraintError::InvalidShape {
                expected: length,
                found: correct_len,
            });
        }
        if input.present.len() > length {
            return Err(ConstraintError::InvalidShape {
                expected: length,
                found: input.present.len(),
            });
        }

        let mut state = Self::new(length);

        for (i, c) in input.correct.chars().enumerate() {
            if !UNKNOWN_MARKERS.contains(&c) {
                state.correct_at[i] = canonical_letter(c);
            }
        }

        for (i, letters) in input.present.iter().enumerate() {
            state.present_wrong_position[i] = letters
                .chars()
                .filter(|c| !c.is_whitespace())
                .filter_map(canonical_letter)
                .collect();
        }

        state.known_absent = input
            .absent
            .chars()
            .filter(|c| !c.is_whitespace())
            .filter_map(canonical_letter)
            .collect();

        Ok(state)
    }

    /// Word length the state describes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.correct_at.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct_at.is_empty()
    }

    /// Letter known at `position`, if any
    #[inline]
    #[must_use]
    pub fn correct_at(&self, position: usize) -> Option<char> {
        self.correct_at.get(position).copied().flatten()
    }

    /// Letters known to be present but not at `position`
    ///
    /// Positions outside the state are treated as empty.
    #[must_use]
    pub fn present_wrong_at(&self, position: usize) -> &FxHashSet<char> {
        static EMPTY: std::sync::LazyLock<FxHashSet<char>> =
            std::sync::LazyLock::new(FxHashSet::default);
        self.present_wrong_position.get(position).unwrap_or(&EMPTY)
    }

    #[inline]
    #[must_use]
    pub const fn known_absent(&self) -> &FxHashSet<char> {
        &self.known_absent
    }

    /// Record `letter` at `position`
    ///
    /// # Errors
    /// Returns `InvalidShape` for a position past the word end, or
    /// `Conflict` if a different letter is already known there.
    pub fn set_correct(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        let length = self.len();
        let slot = self
            .correct_at
            .get_mut(position)
            .ok_or(ConstraintError::InvalidShape {
                expected: length,
                found: position + 1,
            })?;

        let Some(letter) = canonical_letter(letter) else {
            return Ok(());
        };
        if let Some(known) = *slot
            && known != letter
        {
            return Err(ConstraintError::Conflict {
                position,
                known,
                found: letter,
            });
        }
        *slot = Some(letter);
        Ok(())
    }

    /// Record that `letter` is in the word but not at `position`
    ///
    /// # Errors
    /// Returns `InvalidShape` for a position past the word end.
    pub fn add_present_wrong(
        &mut self,
        position: usize,
        letter: char,
    ) -> Result<(), ConstraintError> {
        let length = self.len();
        self.present_wrong_position
            .get_mut(position)
            .ok_or(ConstraintError::InvalidShape {
                expected: length,
                found: position + 1,
            })?
            .extend(canonical_letter(letter));
        Ok(())
    }

    /// Record that `letter` is not in the word
    pub fn add_absent(&mut self, letter: char) {
        self.known_absent.extend(canonical_letter(letter));
    }

    /// Letters the word must contain somewhere
    ///
    /// The union of every position's present-but-misplaced set.
    #[must_use]
    pub fn required_letters(&self) -> FxHashSet<char> {
        self.present_wrong_position
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// Every letter some constraint already says something about
    #[must_use]
    pub fn informative_letters(&self) -> FxHashSet<char> {
        let mut letters = self.required_letters();
        letters.extend(self.correct_at.iter().flatten().copied());
        letters.extend(self.known_absent.iter().copied());
        letters
    }

    /// Letters listed as absent that are also known present or correct
    #[must_use]
    pub fn contradictions(&self) -> Vec<char> {
        let mut present = self.required_letters();
        present.extend(self.correct_at.iter().flatten().copied());

        let mut conflicting: Vec<char> = self
            .known_absent
            .iter()
            .copied()
            .filter(|c| present.contains(c))
            .collect();
        conflicting.sort_unstable();
        conflicting
    }

    /// Merge the feedback for one guess into the state
    ///
    /// Correct marks fix a position, present marks exclude the position. An
    /// absent mark only rules the letter out entirely when the letter is not
    /// known to be in the word, either from this guess or an earlier one;
    /// otherwise it just excludes that position.
    ///
    /// # Errors
    /// Returns `InvalidShape` if the guess, feedback and state lengths
    /// differ, or `Conflict` if a correct mark disagrees with a known letter.
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::{ConstraintState, Feedback, Language, Word};
    ///
    /// let guess = Word::new("crane", 5, |c| Language::English.contains(c)).unwrap();
    /// let mut state = ConstraintState::new(5);
    /// state.apply_feedback(&guess, &Feedback::parse("-G-Y-").unwrap()).unwrap();
    ///
    /// assert_eq!(state.correct_at(1), Some('R'));
    /// assert!(state.present_wrong_at(3).contains(&'N'));
    /// assert!(state.known_absent().contains(&'C'));
    /// ```
    pub fn apply_feedback(
        &mut self,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<(), ConstraintError> {
        if guess.len() != self.len() || feedback.len() != self.len() {
            return Err(ConstraintError::InvalidShape {
                expected: self.len(),
                found: if guess.len() == self.len() {
                    feedback.len()
                } else {
                    guess.len()
                },
            });
        }

        let mut known_present: FxHashSet<char> = self.required_letters();
        known_present.extend(self.correct_at.iter().flatten().copied());
        known_present.extend(
            guess
                .chars()
                .iter()
                .zip(feedback.marks())
                .filter(|&(_, &mark)| mark != Mark::Absent)
                .map(|(&c, _)| c),
        );

        for (position, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => self.set_correct(position, letter)?,
                Mark::Present => self.add_present_wrong(position, letter)?,
                Mark::Absent if known_present.contains(&letter) => {
                    self.add_present_wrong(position, letter)?;
                }
                Mark::Absent => self.add_absent(letter),
            }
        }

        Ok(())
    }
}

//! Guess feedback marks
//!
//! Feedback is the colored response to a guess, one mark per position:
//! - Absent (gray): letter not in word
//! - Present (yellow): letter in word, wrong position
//! - Correct (green): letter in correct position

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Parse a single feedback character
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// Duplicate letters follow the game's rules: exact matches are marked
    /// first and consume the answer's letters, then remaining letters are
    /// marked present while the answer still has unconsumed copies.
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::{Feedback, Language, Word};
    ///
    /// let alphabet = |c| Language::English.contains(c);
    /// let guess = Word::new("crane", 5, alphabet).unwrap();
    /// let answer = Word::new("slate", 5, alphabet).unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &answer);
    /// assert_eq!(feedback, Feedback::parse("--G-G").unwrap());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut available: FxHashMap<char, usize> = FxHashMap::default();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Correct;
            } else {
                *available.entry(a).or_insert(0) += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜ for absent
    ///
    /// Returns `None` on any other character or an empty string.
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks: Option<Vec<Mark>> = s.trim().chars().map(Mark::from_char).collect();
        marks.filter(|m| !m.is_empty()).map(Self)
    }

    /// Render as an emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;

    fn word(text: &str) -> Word {
        Word::new(text, text.chars().count(), |c| Language::Swedish.contains(c)).unwrap()
    }

    #[test]
    fn all_absent() {
        let feedback = Feedback::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(feedback.marks(), &[Mark::Absent; 5]);
    }

    #[test]
    fn all_correct() {
        let w = word("crane");
        assert_eq!(Feedback::calculate(&w, &w).marks(), &[Mark::Correct; 5]);
    }

    #[test]
    fn duplicate_letters_correct_takes_priority() {
        // ROBOT vs FLOOR: first O present, second O correct
        let feedback = Feedback::calculate(&word("robot"), &word("floor"));
        assert_eq!(feedback, Feedback::parse("YY-G-").unwrap());
    }

    #[test]
    fn duplicate_letters_consume_answer_copies() {
        // SPEED vs ERASE: both E's present since ERASE has two
        let feedback = Feedback::calculate(&word("speed"), &word("erase"));
        assert_eq!(feedback, Feedback::parse("Y-YY-").unwrap());

        // EERIE vs CRANE: only one E to share
        let feedback = Feedback::calculate(&word("eerie"), &word("crane"));
        assert_eq!(feedback, Feedback::parse("--Y-G").unwrap());
    }

    #[test]
    fn swedish_letters() {
        let feedback = Feedback::calculate(&word("hallå"), &word("åskan"));
        assert_eq!(feedback, Feedback::parse("-Y--Y").unwrap());
    }

    #[test]
    fn parse_variants() {
        let f1 = Feedback::parse("GYG--").unwrap();
        let f2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::parse("gyg_.").unwrap();
        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.len(), 5);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("GXGGY".parse::<Feedback>().is_err());
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::parse("GY-GY").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.to_string(), "🟩🟨⬜🟩🟨");
    }
}

//! Dictionary word representation
//!
//! A Word is a fixed-length sequence of uppercase letters drawn from a
//! language alphabet.

use std::fmt;

/// A normalized, uppercase dictionary word
///
/// Length is counted in characters, so `Å` and `A` both take one position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for tokens that cannot become a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, found: usize },
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "Word must be exactly {expected} letters, got {found}")
            }
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

/// Uppercase form of a letter, if it has a single-character one
///
/// Characters whose uppercase expands (`ß`, `ﬁ`) or that only reach a letter
/// through case folding (`ſ` to `S`) have no canonical form.
///
/// # Examples
/// ```
/// use letterwise::core::canonical_letter;
///
/// assert_eq!(canonical_letter('a'), Some('A'));
/// assert_eq!(canonical_letter('Å'), Some('Å'));
/// assert_eq!(canonical_letter('ß'), None);
/// assert_eq!(canonical_letter('\u{17F}'), None);
/// ```
#[must_use]
pub fn canonical_letter(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    let letter = upper.next()?;
    if upper.next().is_some() {
        return None;
    }
    (letter == c || letter.to_lowercase().eq(std::iter::once(c))).then_some(letter)
}

impl Word {
    /// Create a new Word from a token
    ///
    /// Length is checked on the token as given. Each character must map to a
    /// single uppercase letter accepted by `alphabet`; see [`canonical_letter`].
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length` characters
    /// - Any character is rejected by `alphabet`
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::{Language, Word};
    ///
    /// let word = Word::new("crane", 5, |c| Language::English.contains(c)).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("cranes", 5, |c| Language::English.contains(c)).is_err());
    /// assert!(Word::new("kräft", 5, |c| Language::English.contains(c)).is_err());
    /// assert!(Word::new("kräft", 5, |c| Language::Swedish.contains(c)).is_ok());
    /// ```
    pub fn new(
        text: impl AsRef<str>,
        length: usize,
        alphabet: impl Fn(char) -> bool,
    ) -> Result<Self, WordError> {
        let token = text.as_ref();
        let found = token.chars().count();
        if found != length {
            return Err(WordError::InvalidLength {
                expected: length,
                found,
            });
        }

        let chars = token
            .chars()
            .map(|c| {
                canonical_letter(c)
                    .filter(|&upper| alphabet(upper))
                    .ok_or(WordError::InvalidCharacter(c))
            })
            .collect::<Result<Vec<char>, _>>()?;

        Ok(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Iterate the distinct letters of the word in first-occurrence order
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::{Language, Word};
    ///
    /// let word = Word::new("speed", 5, |c| Language::English.contains(c)).unwrap();
    /// let distinct: String = word.distinct_chars().collect();
    /// assert_eq!(distinct, "SPED");
    /// ```
    pub fn distinct_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, c)| !self.chars[..i].contains(c))
            .map(|(_, &c)| c)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

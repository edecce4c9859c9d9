//! Ordered collection of same-length words

use super::Word;

/// Words of one length, in dictionary order
///
/// Order is significant: every ranking downstream breaks ties by it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    length: usize,
    words: Vec<Word>,
}

impl WordSet {
    /// Create an empty set for words of `length` characters
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            words: Vec::new(),
        }
    }

    /// Word length every member shares
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Append a word
    ///
    /// Words of a different length are ignored.
    pub fn push(&mut self, word: Word) {
        if word.len() == self.length {
            self.words.push(word);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Linear membership test by text
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }

    /// Keep the words matching `predicate`, preserving order
    #[must_use]
    pub fn retain(&self, mut predicate: impl FnMut(&Word) -> bool) -> Self {
        Self {
            length: self.length,
            words: self.words.iter().filter(|w| predicate(*w)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;

    fn word(text: &str) -> Word {
        Word::new(text, text.chars().count(), |c| Language::English.contains(c)).unwrap()
    }

    #[test]
    fn push_ignores_other_lengths() {
        let mut set = WordSet::new(5);
        set.push(word("crane"));
        set.push(word("cranes"));
        set.push(word("slate"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.word_length(), 5);
        assert!(set.contains("CRANE"));
        assert!(!set.contains("CRANES"));
    }

    #[test]
    fn retain_preserves_order() {
        let mut set = WordSet::new(5);
        for w in ["crane", "slate", "irate", "grate"] {
            set.push(word(w));
        }

        let kept = set.retain(|w| w.has_letter('R'));
        let texts: Vec<&str> = kept.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "IRATE", "GRATE"]);
        assert_eq!(kept.word_length(), 5);
    }

    #[test]
    fn empty_set() {
        let set = WordSet::new(5);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
        assert!(!set.contains("CRANE"));
    }
}

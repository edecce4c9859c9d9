//! Dictionary normalization and loading
//!
//! Turns a raw token stream into a [`WordSet`]. Tokens of the wrong length
//! or with characters outside the alphabet are dropped without error.

use crate::core::{Word, WordSet};
use std::fs;
use std::io;
use std::path::Path;

/// Token separator in dictionary buffers
pub const DELIMITER: char = ',';

/// Normalize a token stream into a word set
///
/// Each token is uppercased and kept only if it has exactly `length`
/// characters, all accepted by `alphabet`. Input order and duplicates are
/// preserved.
///
/// # Examples
/// ```
/// use letterwise::core::Language;
/// use letterwise::wordlists::loader::normalize;
///
/// let words = normalize(["crane", "Slate", "toolong", "sl4te"], 5, |c| {
///     Language::English.contains(c)
/// });
/// assert_eq!(words.len(), 2);
/// assert_eq!(words.as_slice()[1].text(), "SLATE");
/// ```
pub fn normalize<'a, I, F>(tokens: I, length: usize, alphabet: F) -> WordSet
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(char) -> bool,
{
    let mut words = WordSet::new(length);
    for token in tokens {
        if let Ok(word) = Word::new(token, length, &alphabet) {
            words.push(word);
        }
    }
    words
}

/// Split a raw comma-separated buffer and normalize it
///
/// Tokens are trimmed of surrounding whitespace first, so line breaks in
/// dictionary files do not poison their neighbours.
///
/// # Examples
/// ```
/// use letterwise::core::Language;
/// use letterwise::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("APPLE,ANGER,BREAD,CRANE,GRAPE\n", 5, |c| {
///     Language::English.contains(c)
/// });
/// assert_eq!(words.len(), 5);
/// ```
pub fn parse_dictionary<F>(raw: &str, length: usize, alphabet: F) -> WordSet
where
    F: Fn(char) -> bool,
{
    normalize(raw.split(DELIMITER).map(str::trim), length, alphabet)
}

/// Read a raw dictionary buffer from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letterwise::wordlists::loader::load_from_file;
///
/// let raw = load_from_file("data/english.txt").unwrap();
/// println!("Loaded {} bytes", raw.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let raw = fs::read_to_string(path.as_ref())?;
    log::info!(
        "Loaded dictionary {} ({} bytes)",
        path.as_ref().display(),
        raw.len()
    );
    Ok(raw)
}

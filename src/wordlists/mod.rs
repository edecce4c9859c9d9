//! Dictionaries for supported languages
//!
//! Provides embedded dictionaries compiled into the binary, plus the
//! normalizer that turns a raw buffer into words.

mod embedded;
pub mod loader;

use crate::core::Language;

pub use embedded::{ENGLISH, ENGLISH_TOKENS, SWEDISH, SWEDISH_TOKENS};

/// Raw embedded dictionary buffer for a language
#[must_use]
pub const fn raw_dictionary(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH,
        Language::Swedish => SWEDISH,
    }
}

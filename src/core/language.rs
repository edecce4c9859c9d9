//! Supported dictionary languages and their alphabets

use std::fmt;

/// A dictionary language with a fixed uppercase alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// `A`-`Z`
    #[default]
    English,
    /// `A`-`Z` plus `Å`, `Ä` and `Ö`
    Swedish,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 2] = [Self::English, Self::Swedish];

    /// Parse a language from its name or short code
    ///
    /// # Examples
    /// ```
    /// use letterwise::core::Language;
    ///
    /// assert_eq!(Language::from_name("sv"), Some(Language::Swedish));
    /// assert_eq!(Language::from_name("English"), Some(Language::English));
    /// assert_eq!(Language::from_name("klingon"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "swedish" | "sv" => Some(Self::Swedish),
            _ => None,
        }
    }

    /// Lowercase language name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Swedish => "swedish",
        }
    }

    /// Check whether an (uppercase) character belongs to the alphabet
    #[inline]
    #[must_use]
    pub const fn contains(self, c: char) -> bool {
        match self {
            Self::English => c.is_ascii_uppercase(),
            Self::Swedish => c.is_ascii_uppercase() || matches!(c, 'Å' | 'Ä' | 'Ö'),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

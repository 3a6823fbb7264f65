//! Dictionary word representation
//!
//! A Word stores a candidate password along with its distinct letter set, which
//! is all the scoring rule ever looks at.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A candidate password with letter-set tracking
///
/// Stores the text as given (case preserved) and the set of distinct characters.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    Whitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::Whitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed; the remaining text is kept verbatim.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - The text contains interior whitespace
    ///
    /// # Examples
    /// ```
    /// use letter_oracle::core::Word;
    ///
    /// let word = Word::new("  hunter2\n").unwrap();
    /// assert_eq!(word.text(), "hunter2");
    /// assert_eq!(word.letters().len(), 7);
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let text = text.trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace);
        }

        Ok(Self {
            text: text.to_string(),
            letters: text.chars().collect(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct characters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for ch in self.text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("letmein").unwrap();
        assert_eq!(word.text(), "letmein");
        assert_eq!(word.letters().len(), 6);
    }

    #[test]
    fn word_creation_trims() {
        let word = Word::new("\tabc123  ").unwrap();
        assert_eq!(word.text(), "abc123");
    }

    #[test]
    fn word_creation_preserves_case() {
        let word = Word::new("AbC").unwrap();
        assert_eq!(word.text(), "AbC");
        assert!(word.has_letter('A'));
        assert!(!word.has_letter('a'));
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \n "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_interior_whitespace() {
        assert_eq!(Word::new("pass word"), Err(WordError::Whitespace));
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = Word::new("aabbbc").unwrap();
        assert_eq!(word.letters().len(), 3);
        assert!(word.has_letter('a'));
        assert!(word.has_letter('b'));
        assert!(word.has_letter('c'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_accepts_non_ascii() {
        let word = Word::new("día").unwrap();
        assert!(word.has_letter('í'));
        assert_eq!(word.char_counts().len(), 3);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'d'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("qwerty").unwrap();
        assert_eq!(format!("{word}"), "qwerty");
    }

    #[test]
    fn word_equality_by_text() {
        assert_eq!(Word::new("abc").unwrap(), Word::new(" abc").unwrap());
        assert_ne!(Word::new("abc").unwrap(), Word::new("cba").unwrap());
    }
}

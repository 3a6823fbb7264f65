//! Letter-match scoring
//!
//! The oracle answers every guess with a single number: how many characters of
//! the guess appear anywhere in the secret. Positions are ignored and every
//! occurrence in the guess counts, so only the secret's distinct letter set
//! matters.

use super::Word;
use std::fmt;

/// Count the characters of `guess` that belong to the letter set of `secret`
///
/// # Examples
/// ```
/// use letter_oracle::core::score;
///
/// assert_eq!(score("abc", "abc"), 3);
/// assert_eq!(score("aab", "ab"), 3); // duplicates in the guess each count
/// assert_eq!(score("cat", "dog"), 0);
/// assert_eq!(score("cat", "bat"), 2);
/// ```
#[must_use]
pub fn score(guess: &str, secret: &str) -> usize {
    let secret_letters: rustc_hash::FxHashSet<char> = secret.chars().collect();
    guess.chars().filter(|c| secret_letters.contains(c)).count()
}

/// Match score reported by the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(usize);

/// Error returned when an oracle reply is not a decimal integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScoreError {
    reply: String,
}

impl ParseScoreError {
    pub(crate) fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// The raw reply that failed to parse
    #[must_use]
    pub fn reply(&self) -> &str {
        &self.reply
    }
}

impl fmt::Display for ParseScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reply {:?} is not a decimal match count", self.reply)
    }
}

impl std::error::Error for ParseScoreError {}

impl Score {
    /// Create a score from a raw count
    #[inline]
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the raw match count
    #[inline]
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Check whether this score is the oracle's "exact match" sentinel
    #[inline]
    #[must_use]
    pub const fn is_full_match(self, full_match: usize) -> bool {
        self.0 == full_match
    }

    /// Score a guess against a candidate secret
    ///
    /// Uses the candidate's cached letter set, so this is the hot path for
    /// filtering.
    ///
    /// # Examples
    /// ```
    /// use letter_oracle::core::{Score, Word};
    ///
    /// let candidate = Word::new("dog").unwrap();
    /// assert_eq!(Score::calculate("good", &candidate).value(), 4);
    /// assert_eq!(Score::calculate("cat", &candidate).value(), 0);
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, candidate: &Word) -> Self {
        Self(guess.chars().filter(|&c| candidate.has_letter(c)).count())
    }
}

impl std::str::FromStr for Score {
    type Err = ParseScoreError;

    /// Parse a textual oracle reply such as `"7"` or `"12\n"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(Self)
            .map_err(|_| ParseScoreError::new(s))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

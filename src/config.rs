//! Session configuration

use crate::core::score;

/// Where the reference oracle listens
pub const DEFAULT_ORACLE_ADDR: &str = "127.0.0.1:8881";

/// Dictionary read when none is given
pub const DEFAULT_DICTIONARY: &str = "passwords.txt";

/// Rounds allowed before a session gives up
pub const DEFAULT_MAX_GUESSES: usize = 15;

/// Score the reference oracle sends for an exact match
pub const DEFAULT_FULL_MATCH: usize = 20;

/// Tunables for one guessing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Stop with `BudgetExceeded` once this many guesses have been sent
    pub max_guesses: usize,
    /// Reply value that means the guess matched the secret
    pub full_match: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(max_guesses: usize, full_match: usize) -> Self {
        Self {
            max_guesses,
            full_match,
        }
    }

    /// Config whose full-match sentinel is what `secret` scores against itself
    ///
    /// # Examples
    /// ```
    /// use letter_oracle::config::SessionConfig;
    ///
    /// let config = SessionConfig::for_secret("abca");
    /// assert_eq!(config.full_match, 4);
    /// assert_eq!(config.max_guesses, 15);
    /// ```
    #[must_use]
    pub fn for_secret(secret: &str) -> Self {
        Self {
            full_match: score(secret, secret),
            ..Self::default()
        }
    }

    /// Replace any field the caller supplied explicitly
    #[must_use]
    pub fn with_overrides(self, max_guesses: Option<usize>, full_match: Option<usize>) -> Self {
        Self {
            max_guesses: max_guesses.unwrap_or(self.max_guesses),
            full_match: full_match.unwrap_or(self.full_match),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES, DEFAULT_FULL_MATCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_oracle() {
        let config = SessionConfig::default();
        assert_eq!(config.max_guesses, 15);
        assert_eq!(config.full_match, 20);
    }

    #[test]
    fn for_secret_counts_characters() {
        assert_eq!(SessionConfig::for_secret("abc").full_match, 3);
        assert_eq!(SessionConfig::for_secret("aaaa").full_match, 4);
    }

    #[test]
    fn overrides_apply_only_when_given() {
        let config = SessionConfig::default().with_overrides(Some(3), None);
        assert_eq!(config, SessionConfig::new(3, 20));

        let config = SessionConfig::for_secret("abc").with_overrides(None, Some(9));
        assert_eq!(config, SessionConfig::new(15, 9));
    }
}

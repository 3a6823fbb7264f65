//! Candidate filtering and guess sanitizing
//!
//! After every reply only the candidates that would have produced the same
//! score survive. The letter universe of the survivors bounds which characters
//! a guess may still contain.

use crate::core::{Score, Word};
use rustc_hash::FxHashSet;

/// Keep the candidates consistent with `score` for the submitted `guess`
///
/// A candidate survives iff scoring `guess` against it reproduces `score`.
/// Order is preserved and the result is never larger than the input.
///
/// # Examples
/// ```
/// use letter_oracle::core::{Score, Word};
/// use letter_oracle::solver::filter_candidates;
///
/// let candidates: Vec<Word> = ["cat", "dog", "bat"]
///     .iter()
///     .map(|s| Word::new(*s).unwrap())
///     .collect();
///
/// let survivors = filter_candidates(&candidates, "cat", Score::new(0));
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].text(), "dog");
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &str, score: Score) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| Score::calculate(guess, candidate) == score)
        .cloned()
        .collect()
}

/// Union of the letters of all candidates
#[must_use]
pub fn letter_universe(candidates: &[Word]) -> FxHashSet<char> {
    candidates
        .iter()
        .flat_map(|candidate| candidate.letters().iter().copied())
        .collect()
}

/// Drop every character of `guess` that is not in `allowed`
///
/// Order and multiplicity of the kept characters are preserved. A guess picked
/// from the current candidates is never changed; if characters are dropped the
/// oracle scores the shortened text, not the candidate it came from.
///
/// # Examples
/// ```
/// use letter_oracle::solver::sanitize;
/// use std::collections::HashSet;
///
/// let allowed: HashSet<char> = ['a', 'b'].into_iter().collect();
/// assert_eq!(sanitize("abcab", &allowed), "abab");
/// ```
#[must_use]
pub fn sanitize<S>(guess: &str, allowed: &std::collections::HashSet<char, S>) -> String
where
    S: std::hash::BuildHasher,
{
    guess.chars().filter(|c| allowed.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;
    use crate::dictionary::words_from_slice;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn filter_keeps_exact_score_matches() {
        let candidates = words_from_slice(&["cat", "dog", "bat"]);

        // score("cat", "bat") == 2, so only dog matches a zero
        assert_eq!(texts(&filter_candidates(&candidates, "cat", Score::new(0))), ["dog"]);
        assert_eq!(texts(&filter_candidates(&candidates, "cat", Score::new(2))), ["bat"]);
        assert_eq!(texts(&filter_candidates(&candidates, "cat", Score::new(3))), ["cat"]);
    }

    #[test]
    fn filter_preserves_order() {
        let candidates = words_from_slice(&["ab", "xy", "ba", "aab"]);
        let survivors = filter_candidates(&candidates, "ab", Score::new(2));
        assert_eq!(texts(&survivors), ["ab", "ba", "aab"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let candidates = words_from_slice(&["abc", "abd", "xyz", "bcd", "cab", "zzz"]);
        let guess = "abd";

        for value in 0..=3 {
            let once = filter_candidates(&candidates, guess, Score::new(value));
            let twice = filter_candidates(&once, guess, Score::new(value));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn filter_never_grows() {
        let candidates = words_from_slice(&["abc", "abd", "xyz", "bcd"]);
        for value in 0..=4 {
            let survivors = filter_candidates(&candidates, "abcd", Score::new(value));
            assert!(survivors.len() <= candidates.len());
        }
    }

    #[test]
    fn filter_never_prunes_secret() {
        let candidates = words_from_slice(&["secret", "public", "private", "tester"]);
        let secret = "secret";

        for guess in ["public", "tester", "zzz", "sec", "private"] {
            let reply = Score::new(score(guess, secret));
            let survivors = filter_candidates(&candidates, guess, reply);
            assert!(survivors.iter().any(|w| w.text() == secret), "pruned by {guess}");
        }
    }

    #[test]
    fn filter_empty_when_inconsistent() {
        let candidates = words_from_slice(&["abc", "def"]);
        assert!(filter_candidates(&candidates, "abc", Score::new(7)).is_empty());
    }

    #[test]
    fn universe_is_union_of_letters() {
        let candidates = words_from_slice(&["aab", "bc", "xyz"]);
        let universe = letter_universe(&candidates);

        assert_eq!(universe.len(), 6);
        for letter in ['a', 'b', 'c', 'x', 'y', 'z'] {
            assert!(universe.contains(&letter));
        }
    }

    #[test]
    fn universe_of_nothing_is_empty() {
        assert!(letter_universe(&[]).is_empty());
    }

    #[test]
    fn sanitize_keeps_allowed_in_order() {
        let allowed: FxHashSet<char> = ['a', 'c'].into_iter().collect();
        assert_eq!(sanitize("abcabc", &allowed), "acac");
    }

    #[test]
    fn sanitize_candidate_is_unchanged() {
        let candidates = words_from_slice(&["hello", "world"]);
        let universe = letter_universe(&candidates);

        for candidate in &candidates {
            assert_eq!(sanitize(candidate.text(), &universe), candidate.text());
        }
    }

    #[test]
    fn sanitize_can_empty_guess() {
        let allowed = FxHashSet::default();
        assert_eq!(sanitize("abc", &allowed), "");
    }
}

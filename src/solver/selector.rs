//! Letter-frequency guess selection
//!
//! Favors candidates built from letters that are common across the remaining
//! set, since those split the candidates most evenly under a match-count reply.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Count every letter occurrence across all candidates
///
/// Occurrences are summed, so a candidate with a repeated letter contributes
/// each copy.
#[must_use]
pub fn letter_frequencies(candidates: &[Word]) -> FxHashMap<char, usize> {
    let mut frequencies = FxHashMap::default();
    for candidate in candidates {
        for (letter, count) in candidate.char_counts() {
            *frequencies.entry(letter).or_insert(0) += count;
        }
    }
    frequencies
}

/// Weight of a candidate: global frequency summed over its distinct letters
#[must_use]
pub fn candidate_weight(candidate: &Word, frequencies: &FxHashMap<char, usize>) -> usize {
    candidate
        .letters()
        .iter()
        .map(|letter| frequencies.get(letter).copied().unwrap_or(0))
        .sum()
}

/// Select the candidate with the highest letter-frequency weight
///
/// Ties go to the earliest candidate. A single remaining candidate is returned
/// without scoring. Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use letter_oracle::core::Word;
/// use letter_oracle::solver::select_best_guess;
///
/// let candidates: Vec<Word> = ["aab", "abc", "xyz"]
///     .iter()
///     .map(|s| Word::new(*s).unwrap())
///     .collect();
///
/// let best = select_best_guess(&candidates).unwrap();
/// assert_eq!(best.text(), "abc"); // a:3 + b:2 + c:1
/// ```
#[must_use]
pub fn select_best_guess(candidates: &[Word]) -> Option<&Word> {
    if candidates.len() <= 1 {
        return candidates.first();
    }

    let frequencies = letter_frequencies(candidates);

    let mut best: Option<(&Word, usize)> = None;
    for candidate in candidates {
        let weight = candidate_weight(candidate, &frequencies);
        if best.is_none_or(|(_, best_weight)| weight > best_weight) {
            best = Some((candidate, weight));
        }
    }

    best.map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::words_from_slice;

    #[test]
    fn frequencies_sum_all_occurrences() {
        let candidates = words_from_slice(&["aab", "abc", "xyz"]);
        let frequencies = letter_frequencies(&candidates);

        assert_eq!(frequencies.get(&'a'), Some(&3));
        assert_eq!(frequencies.get(&'b'), Some(&2));
        assert_eq!(frequencies.get(&'c'), Some(&1));
        assert_eq!(frequencies.get(&'x'), Some(&1));
        assert_eq!(frequencies.get(&'q'), None);
    }

    #[test]
    fn weight_uses_distinct_letters() {
        let candidates = words_from_slice(&["aab", "abc", "xyz"]);
        let frequencies = letter_frequencies(&candidates);

        // "aab" counts 'a' once even though it appears twice
        assert_eq!(candidate_weight(&candidates[0], &frequencies), 5);
        assert_eq!(candidate_weight(&candidates[1], &frequencies), 6);
        assert_eq!(candidate_weight(&candidates[2], &frequencies), 3);
    }

    #[test]
    fn selects_highest_weight() {
        let candidates = words_from_slice(&["aab", "abc", "xyz"]);
        let best = select_best_guess(&candidates).unwrap();
        assert_eq!(best.text(), "abc");
    }

    #[test]
    fn ties_go_to_first_candidate() {
        // cat and bat both weigh 5
        let candidates = words_from_slice(&["cat", "dog", "bat"]);
        let best = select_best_guess(&candidates).unwrap();
        assert_eq!(best.text(), "cat");

        let reordered = words_from_slice(&["bat", "dog", "cat"]);
        let best = select_best_guess(&reordered).unwrap();
        assert_eq!(best.text(), "bat");
    }

    #[test]
    fn single_candidate_returned_directly() {
        let candidates = words_from_slice(&["zzz"]);
        let best = select_best_guess(&candidates).unwrap();
        assert_eq!(best.text(), "zzz");
    }

    #[test]
    fn empty_candidates_returns_none() {
        assert!(select_best_guess(&[]).is_none());
    }

    #[test]
    fn selection_is_deterministic() {
        let candidates = words_from_slice(&["qwe", "rty", "wer", "ert", "tyu", "ewq"]);
        let first = select_best_guess(&candidates).unwrap().text().to_string();

        for _ in 0..10 {
            assert_eq!(select_best_guess(&candidates).unwrap().text(), first);
        }
    }
}

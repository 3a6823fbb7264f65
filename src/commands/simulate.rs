//! Play a session against a known secret
//!
//! Runs the same loop as a live session with the oracle scored in-process.

use crate::config::SessionConfig;
use crate::core::Word;
use crate::session::{RoundStep, Session, SessionReport, SimulatedOracle};
use crate::solver::Strategy;

/// Play one session against `secret`
pub fn run_simulate<S, F>(
    secret: &str,
    strategy: S,
    dictionary: Vec<Word>,
    config: SessionConfig,
    on_round: F,
) -> SessionReport
where
    S: Strategy,
    F: FnMut(&RoundStep),
{
    Session::new(SimulatedOracle::new(secret), strategy, dictionary, config).run_observed(on_round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::words_from_slice;
    use crate::session::SessionState;
    use crate::solver::{FirstStrategy, FrequencyStrategy};

    #[test]
    fn simulate_solves_reference_example() {
        let report = run_simulate(
            "abc",
            FrequencyStrategy,
            words_from_slice(&["aab", "abc", "xyz"]),
            SessionConfig::for_secret("abc"),
            |_| {},
        );

        assert!(report.is_solved());
        assert_eq!(report.guesses(), 1);
    }

    #[test]
    fn simulate_records_history() {
        let report = run_simulate(
            "kilo",
            FirstStrategy,
            words_from_slice(&["alpha", "bravo", "delta", "kilo", "lima"]),
            SessionConfig::for_secret("kilo"),
            |_| {},
        );

        assert!(report.is_solved());
        for (i, step) in report.rounds.iter().enumerate() {
            assert_eq!(step.round, i + 1);
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn simulate_flags_anagram_full_match() {
        let report = run_simulate(
            "listen",
            FrequencyStrategy,
            words_from_slice(&["silent", "listen"]),
            SessionConfig::for_secret("listen"),
            |_| {},
        );

        assert!(report.is_solved());
        assert_eq!(report.solution.as_deref(), Some("silent"));
        assert!(report.is_false_match("listen"));
    }

    #[test]
    fn simulate_secret_missing_from_dictionary_exhausts() {
        let report = run_simulate(
            "zzz",
            FrequencyStrategy,
            words_from_slice(&["abc", "abd"]),
            SessionConfig::for_secret("zzz"),
            |_| {},
        );

        assert!(matches!(report.outcome, SessionState::Exhausted));
    }
}

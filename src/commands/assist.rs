//! Assisted mode
//!
//! A person plays the oracle: the client suggests each guess and the person
//! types back the score they got.

use crate::config::SessionConfig;
use crate::core::Word;
use crate::session::{ConsoleOracle, Oracle, RoundStep, Session, SessionReport};
use crate::solver::Strategy;

/// Play one session with scores read from stdin
pub fn run_assist<S, F>(
    strategy: S,
    dictionary: Vec<Word>,
    config: SessionConfig,
    on_round: F,
) -> SessionReport
where
    S: Strategy,
    F: FnMut(&RoundStep),
{
    run_assist_with(ConsoleOracle::stdio(), strategy, dictionary, config, on_round)
}

fn run_assist_with<O, S, F>(
    oracle: O,
    strategy: S,
    dictionary: Vec<Word>,
    config: SessionConfig,
    on_round: F,
) -> SessionReport
where
    O: Oracle,
    S: Strategy,
    F: FnMut(&RoundStep),
{
    Session::new(oracle, strategy, dictionary, config).run_observed(on_round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::words_from_slice;
    use crate::session::{OracleError, SessionState};
    use crate::solver::FrequencyStrategy;
    use std::io;

    #[test]
    fn assist_solves_with_typed_scores() {
        // cat -> 0, then dog -> 3
        let oracle = ConsoleOracle::new(&b"0\n3\n"[..], io::sink());
        let report = run_assist_with(
            oracle,
            FrequencyStrategy,
            words_from_slice(&["cat", "dog", "bat"]),
            SessionConfig::new(15, 3),
            |_| {},
        );

        assert!(report.is_solved());
        assert_eq!(report.solution.as_deref(), Some("dog"));
    }

    #[test]
    fn assist_stops_when_input_ends() {
        let oracle = ConsoleOracle::new(&b"0\n"[..], io::sink());
        let report = run_assist_with(
            oracle,
            FrequencyStrategy,
            words_from_slice(&["cat", "dog", "bat"]),
            SessionConfig::new(15, 3),
            |_| {},
        );

        assert!(matches!(
            report.outcome,
            SessionState::Failed(OracleError::Connection(_))
        ));
        assert_eq!(report.guesses(), 1);
    }
}

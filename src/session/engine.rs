//! Guessing session state machine
//!
//! A session owns the live candidate set and the oracle connection. Each round
//! selects a guess, sends it, and prunes the candidates with the reply until
//! the secret is found, nothing is left, the budget runs out, or the channel
//! fails.

use super::oracle::{Oracle, OracleError};
use crate::config::SessionConfig;
use crate::core::{Score, Word};
use crate::solver::{Strategy, filter_candidates, letter_universe, sanitize};
use rustc_hash::FxHashSet;

/// Where a session stands
#[derive(Debug)]
pub enum SessionState {
    Running,
    /// The oracle reported a full match.
    Solved,
    /// No candidate is consistent with the replies so far.
    Exhausted,
    /// The guess cap was reached without a full match.
    BudgetExceeded,
    /// The oracle channel failed; the round was abandoned.
    Failed(OracleError),
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::BudgetExceeded => "budget exceeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// One guess/reply exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStep {
    /// 1-based round number
    pub round: usize,
    /// Text actually sent to the oracle
    pub guess: String,
    pub score: Score,
    pub candidates_before: usize,
    /// Survivors after filtering; unchanged on a full match
    pub candidates_after: usize,
}

/// Final account of a session
#[derive(Debug)]
pub struct SessionReport {
    pub outcome: SessionState,
    pub rounds: Vec<RoundStep>,
    /// The guess that drew a full match
    pub solution: Option<String>,
    /// Candidates still live when the session ended
    pub remaining: Vec<Word>,
}

impl SessionReport {
    /// Report for a session whose oracle could not even be reached
    #[must_use]
    pub fn failed(error: OracleError, remaining: Vec<Word>) -> Self {
        Self {
            outcome: SessionState::Failed(error),
            rounds: Vec::new(),
            solution: None,
            remaining,
        }
    }

    /// Number of guesses sent
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, SessionState::Solved)
    }

    /// Solved on a guess other than `secret`
    ///
    /// The oracle only reports a letter count, so any guess whose letters all
    /// occur in the secret draws the full-match score. Only a caller that knows
    /// the secret can tell such a match apart from the real one.
    #[must_use]
    pub fn is_false_match(&self, secret: &str) -> bool {
        self.is_solved() && self.solution.as_deref() != Some(secret)
    }
}

/// A single guessing session against one oracle
pub struct Session<O: Oracle, S: Strategy> {
    oracle: O,
    strategy: S,
    config: SessionConfig,
    candidates: Vec<Word>,
    universe: FxHashSet<char>,
    guesses: usize,
    state: SessionState,
    rounds: Vec<RoundStep>,
    solution: Option<String>,
}

impl<O: Oracle, S: Strategy> Session<O, S> {
    /// Start a session over the full dictionary
    ///
    /// # Examples
    /// ```
    /// use letter_oracle::config::SessionConfig;
    /// use letter_oracle::dictionary::words_from_slice;
    /// use letter_oracle::session::{Session, SimulatedOracle};
    /// use letter_oracle::solver::FrequencyStrategy;
    ///
    /// let dictionary = words_from_slice(&["aab", "abc", "xyz"]);
    /// let session = Session::new(
    ///     SimulatedOracle::new("abc"),
    ///     FrequencyStrategy,
    ///     dictionary,
    ///     SessionConfig::for_secret("abc"),
    /// );
    ///
    /// let report = session.run();
    /// assert!(report.is_solved());
    /// assert_eq!(report.solution.as_deref(), Some("abc"));
    /// assert_eq!(report.guesses(), 1);
    /// ```
    pub fn new(oracle: O, strategy: S, candidates: Vec<Word>, config: SessionConfig) -> Self {
        let universe = letter_universe(&candidates);
        Self {
            oracle,
            strategy,
            config,
            candidates,
            universe,
            guesses: 0,
            state: SessionState::Running,
            rounds: Vec::new(),
            solution: None,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn letter_universe(&self) -> &FxHashSet<char> {
        &self.universe
    }

    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundStep] {
        &self.rounds
    }

    /// Play one round
    ///
    /// Does nothing once the session has reached a terminal state.
    pub fn step(&mut self) -> &SessionState {
        if self.state.is_terminal() {
            return &self.state;
        }

        if self.candidates.is_empty() {
            self.state = SessionState::Exhausted;
            return &self.state;
        }

        let Some(selected) = self.strategy.select_guess(&self.candidates) else {
            self.state = SessionState::Exhausted;
            return &self.state;
        };
        let guess = sanitize(selected.text(), &self.universe);

        let score = match self.oracle.submit(&guess) {
            Ok(score) => score,
            Err(e) => {
                self.state = SessionState::Failed(e);
                return &self.state;
            }
        };
        self.guesses += 1;

        let candidates_before = self.candidates.len();

        if score.is_full_match(self.config.full_match) {
            self.rounds.push(RoundStep {
                round: self.guesses,
                guess: guess.clone(),
                score,
                candidates_before,
                candidates_after: candidates_before,
            });
            self.solution = Some(guess);
            self.state = SessionState::Solved;
            return &self.state;
        }

        self.candidates = filter_candidates(&self.candidates, &guess, score);
        self.universe = letter_universe(&self.candidates);

        self.rounds.push(RoundStep {
            round: self.guesses,
            guess,
            score,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        if self.guesses >= self.config.max_guesses {
            self.state = SessionState::BudgetExceeded;
        }

        &self.state
    }

    /// Play rounds until the session ends
    #[must_use]
    pub fn run(self) -> SessionReport {
        self.run_observed(|_| {})
    }

    /// Play rounds until the session ends, reporting each completed round
    pub fn run_observed<F: FnMut(&RoundStep)>(mut self, mut on_round: F) -> SessionReport {
        loop {
            let played = self.rounds.len();
            self.step();

            if let Some(step) = self.rounds.get(played) {
                on_round(step);
            }

            if self.state.is_terminal() {
                break;
            }
        }

        self.into_report()
    }

    /// Finish the session, releasing the oracle
    #[must_use]
    pub fn into_report(self) -> SessionReport {
        SessionReport {
            outcome: self.state,
            rounds: self.rounds,
            solution: self.solution,
            remaining: self.candidates,
        }
    }
}

//! Benchmark command
//!
//! Plays a simulated session for every secret in a set and aggregates how the
//! sessions ended.

use crate::config::SessionConfig;
use crate::core::Word;
use crate::session::{Session, SessionState, SimulatedOracle};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Knobs for a benchmark run
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Guess cap; defaults to the session default
    pub max_guesses: Option<usize>,
    /// Full-match sentinel; defaults to each secret's own full score
    pub full_match: Option<usize>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    /// Session config used when `secret` is the hidden password
    #[must_use]
    pub fn session_config(&self, secret: &str) -> SessionConfig {
        SessionConfig::for_secret(secret).with_overrides(self.max_guesses, self.full_match)
    }
}

/// How the session for one secret ended
#[derive(Debug)]
pub struct SecretResult {
    pub secret: String,
    pub guesses: usize,
    pub outcome: SessionState,
    /// Guess that drew the full-match score, if any
    pub solution: Option<String>,
}

impl SecretResult {
    /// Full match on a guess that is not the secret
    #[must_use]
    pub fn is_false_match(&self) -> bool {
        matches!(self.outcome, SessionState::Solved)
            && self.solution.as_deref() != Some(self.secret.as_str())
    }

    fn is_true_solve(&self) -> bool {
        matches!(self.outcome, SessionState::Solved) && !self.is_false_match()
    }
}

/// Aggregate of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub budget_exceeded: usize,
    pub failed: usize,
    /// Full matches on a guess other than the secret; not counted as solved
    pub false_matches: usize,
    /// Mean guesses over solved sessions
    pub average_guesses: f64,
    pub max_guesses: usize,
    /// Guesses needed → number of solved secrets
    pub distribution: BTreeMap<usize, usize>,
    /// Solved secrets needing the most guesses, worst first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Pick the secrets to benchmark
///
/// `None` uses the whole dictionary in order; `Some(n)` draws `n` distinct
/// entries at random.
#[must_use]
pub fn sample_secrets(dictionary: &[Word], sample: Option<usize>) -> Vec<Word> {
    use rand::prelude::IndexedRandom;

    match sample {
        Some(count) if count < dictionary.len() => dictionary
            .choose_multiple(&mut rand::rng(), count)
            .cloned()
            .collect(),
        _ => dictionary.to_vec(),
    }
}

/// Play one simulated session per secret, in parallel
pub fn run_benchmark<S: Strategy + Sync>(
    strategy: &S,
    dictionary: &[Word],
    secrets: &[Word],
    config: BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let results: Vec<SecretResult> = secrets
        .par_iter()
        .map(|secret| {
            let report = Session::new(
                SimulatedOracle::new(secret.text()),
                strategy,
                dictionary.to_vec(),
                config.session_config(secret.text()),
            )
            .run();

            pb.inc(1);
            SecretResult {
                secret: secret.text().to_string(),
                guesses: report.guesses(),
                outcome: report.outcome,
                solution: report.solution,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, start.elapsed())
}

fn summarize(results: &[SecretResult], duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let (mut solved, mut exhausted, mut budget_exceeded, mut failed) = (0, 0, 0, 0);
    let mut false_matches = 0;

    for result in results {
        match result.outcome {
            SessionState::Solved if result.is_false_match() => false_matches += 1,
            SessionState::Solved => {
                solved += 1;
                *distribution.entry(result.guesses).or_insert(0) += 1;
            }
            SessionState::Exhausted => exhausted += 1,
            SessionState::BudgetExceeded => budget_exceeded += 1,
            SessionState::Failed(_) | SessionState::Running => failed += 1,
        }
    }

    let solved_guesses: usize = distribution.iter().map(|(g, n)| g * n).sum();
    let average_guesses = if solved > 0 {
        solved_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.is_true_solve())
        .map(|r| (r.secret.clone(), r.guesses))
        .collect();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    BenchmarkResult {
        total: results.len(),
        solved,
        exhausted,
        budget_exceeded,
        failed,
        false_matches,
        average_guesses,
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        hardest,
        duration,
    }
}

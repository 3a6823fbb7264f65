//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::select_best_guess;
use crate::core::Word;

/// A strategy for picking the next guess from the live candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word>;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        (**self).select_guess(candidates)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Letter-frequency weighting (default)
    Frequency(FrequencyStrategy),
    /// Always the first live candidate
    First(FirstStrategy),
    /// Uniformly random live candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "first", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First(FirstStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Letter-frequency strategy
///
/// Picks the candidate whose distinct letters are most common overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        select_best_guess(candidates)
    }
}

/// Baseline strategy that guesses candidates in dictionary order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.first()
    }
}

/// Random strategy
///
/// Picks any live candidate. Useful as a lower bound when benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}

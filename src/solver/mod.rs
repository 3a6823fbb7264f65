//! Guess selection and candidate pruning
//!
//! The algorithmic half of a session: pick a guess, then keep only the
//! candidates that agree with the oracle's reply.

mod filter;
mod selector;
pub mod strategy;

pub use filter::{filter_candidates, letter_universe, sanitize};
pub use selector::{candidate_weight, letter_frequencies, select_best_guess};
pub use strategy::{FirstStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType};

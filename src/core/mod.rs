//! Core domain types
//!
//! Candidate words and the letter-match scoring rule. Everything here is pure
//! and shared by the client and the simulated oracle.

mod scoring;
mod word;

pub use scoring::{ParseScoreError, Score, score};
pub use word::{Word, WordError};

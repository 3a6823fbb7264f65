//! Letter Oracle
//!
//! A password guessing client. An oracle answers each guess with the number of
//! guess letters found in its secret; the client keeps only the dictionary
//! entries consistent with every answer until one guess matches.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_oracle::config::SessionConfig;
//! use letter_oracle::dictionary::words_from_slice;
//! use letter_oracle::session::{Session, SimulatedOracle};
//! use letter_oracle::solver::FrequencyStrategy;
//!
//! let dictionary = words_from_slice(&["cat", "dog", "bat"]);
//! let report = Session::new(
//!     SimulatedOracle::new("dog"),
//!     FrequencyStrategy,
//!     dictionary,
//!     SessionConfig::for_secret("dog"),
//! )
//! .run();
//!
//! assert!(report.is_solved());
//! assert_eq!(report.guesses(), 2);
//! ```

// Core domain types
pub mod core;

// Session tunables
pub mod config;

// Dictionary loading
pub mod dictionary;

// Guess selection and filtering
pub mod solver;

// Oracle channels and the round loop
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

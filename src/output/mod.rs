//! Terminal output formatting
//!
//! Display utilities for live rounds, session outcomes and benchmark results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_round, print_session_header, print_session_report,
    print_warning,
};

//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod remote;
pub mod simulate;

pub use assist::run_assist;
pub use benchmark::{BenchmarkConfig, BenchmarkResult, SecretResult, run_benchmark, sample_secrets};
pub use remote::run_remote;
pub use simulate::run_simulate;

//! Guessing sessions
//!
//! Oracle channels and the round loop that drives them.

mod engine;
pub mod oracle;

pub use engine::{RoundStep, Session, SessionReport, SessionState};
pub use oracle::{ConsoleOracle, Oracle, OracleError, SimulatedOracle, TcpOracle};

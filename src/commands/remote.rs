//! Guess against a live oracle over TCP

use crate::config::SessionConfig;
use crate::core::Word;
use crate::session::{RoundStep, Session, SessionReport, TcpOracle};
use crate::solver::Strategy;
use std::net::ToSocketAddrs;

/// Connect to the oracle at `addr` and play one session
///
/// A connection that cannot be opened ends the session as `Failed` instead of
/// returning an error. The connection is closed when this returns.
pub fn run_remote<A, S, F>(
    addr: A,
    strategy: S,
    dictionary: Vec<Word>,
    config: SessionConfig,
    on_round: F,
) -> SessionReport
where
    A: ToSocketAddrs,
    S: Strategy,
    F: FnMut(&RoundStep),
{
    match TcpOracle::connect(addr) {
        Ok(oracle) => Session::new(oracle, strategy, dictionary, config).run_observed(on_round),
        Err(e) => SessionReport::failed(e, dictionary),
    }
}

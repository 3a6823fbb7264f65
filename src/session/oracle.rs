//! Oracle channels
//!
//! An oracle takes a guess and answers with a match score. The real one lives
//! behind a TCP socket; the simulated one scores in-process against a known
//! secret, and the console one asks a human.

use crate::core::{ParseScoreError, Score, score};
use std::io::{self, BufRead, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use thiserror::Error;

/// Largest reply read from the oracle in one round
pub const REPLY_BUFFER_SIZE: usize = 1024;

/// Faults while talking to an oracle
#[derive(Debug, Error)]
pub enum OracleError {
    /// The channel could not be opened, or broke mid-round.
    #[error("connection to oracle failed")]
    Connection(#[from] io::Error),

    /// The reply was not a decimal match count.
    #[error("could not decode oracle reply")]
    Decode(#[from] ParseScoreError),
}

/// Something that scores guesses against a hidden secret
pub trait Oracle {
    /// Submit one guess and wait for its score
    ///
    /// # Errors
    ///
    /// Returns `OracleError` if the channel fails or the reply cannot be decoded.
    fn submit(&mut self, guess: &str) -> Result<Score, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn submit(&mut self, guess: &str) -> Result<Score, OracleError> {
        (**self).submit(guess)
    }
}

/// Oracle reached over a TCP connection
///
/// Each round is exactly one write of the UTF-8 guess followed by one read of
/// the textual score. There is no framing. The connection closes when the
/// oracle is dropped.
#[derive(Debug)]
pub struct TcpOracle {
    stream: TcpStream,
    peer: SocketAddr,
}

impl TcpOracle {
    /// Open the single connection used for a whole session
    ///
    /// # Errors
    ///
    /// Returns `OracleError::Connection` if no address accepts the connection.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, OracleError> {
        let stream = TcpStream::connect(addr)?;
        let peer = stream.peer_addr()?;
        Ok(Self { stream, peer })
    }

    /// Address of the oracle
    #[must_use]
    pub const fn peer(&self) -> SocketAddr {
        self.peer
    }
}

impl Oracle for TcpOracle {
    fn submit(&mut self, guess: &str) -> Result<Score, OracleError> {
        self.stream.write_all(guess.as_bytes())?;

        let mut buf = [0u8; REPLY_BUFFER_SIZE];
        let read = self.stream.read(&mut buf)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "oracle closed the connection",
            )
            .into());
        }

        let reply = std::str::from_utf8(&buf[..read])
            .map_err(|_| ParseScoreError::new(String::from_utf8_lossy(&buf[..read])))?;

        Ok(reply.parse()?)
    }
}

/// In-process oracle holding a known secret
#[derive(Debug, Clone)]
pub struct SimulatedOracle {
    secret: String,
}

impl SimulatedOracle {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Oracle for SimulatedOracle {
    fn submit(&mut self, guess: &str) -> Result<Score, OracleError> {
        Ok(Score::new(score(guess, &self.secret)))
    }
}

/// Oracle played by a person at the terminal
///
/// Prints each guess and reads the score typed back. Unparseable input is
/// rejected and asked for again; end of input aborts the session.
pub struct ConsoleOracle<R, W> {
    input: R,
    output: W,
}

impl ConsoleOracle<io::StdinLock<'static>, io::Stdout> {
    /// Console oracle on the process's stdin/stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleOracle<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Oracle for ConsoleOracle<R, W> {
    fn submit(&mut self, guess: &str) -> Result<Score, OracleError> {
        loop {
            write!(self.output, "Try \"{guess}\" - how many letters matched? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
            }

            match line.parse::<Score>() {
                Ok(score) => return Ok(score),
                Err(e) => writeln!(self.output, "{e}, please enter a number")?,
            }
        }
    }
}

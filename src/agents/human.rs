//! Agent driven by text input.

use std::fmt::Display;
use std::io::{self, BufRead, Read, Stdout, Write};
use std::str::FromStr;

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::GameState;
use crate::error::{AgentError, SearchError};

use super::Agent;

/// Reads moves from `input`, prompting on `output`.
///
/// Unparsable or illegal entries are ignored and the prompt repeats.
#[derive(Debug)]
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<StdinLines, Stdout> {
    /// Agent on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(StdinLines::default(), io::stdout())
    }
}

/// Reader over the process stdin that only holds the stdin lock while
/// reading one line, so several agents can share the terminal.
#[derive(Debug, Default)]
pub struct StdinLines {
    line: String,
    pos: usize,
}

impl Read for StdinLines {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for StdinLines {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            io::stdin().read_line(&mut self.line)?;
        }
        Ok(&self.line.as_bytes()[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, moves: &str) -> Result<(), AgentError> {
        write!(self.output, "Kindly enter your move [{moves}]: ")
            .and_then(|()| self.output.flush())
            .map_err(|source| AgentError::Io {
                operation: "write prompt",
                source,
            })
    }

    fn read_entry(&mut self) -> Result<String, AgentError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| AgentError::Io {
                operation: "read move",
                source,
            })?;
        if read == 0 {
            return Err(AgentError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }
}

impl<G, R, W> Agent<G> for HumanAgent<R, W>
where
    G: GameState,
    G::Move: FromStr + Display,
    R: BufRead,
    W: Write,
{
    fn name(&self) -> &str {
        "human"
    }

    fn get_move(&mut self, state: &G) -> Result<(G::Move, G), AgentError> {
        let mut legal: FxHashMap<G::Move, G> = state
            .successors()
            .map_err(SearchError::oracle)?
            .into_iter()
            .collect();
        if legal.is_empty() {
            return Err(AgentError::NoMoves);
        }

        let mut sorted: Vec<&G::Move> = legal.keys().collect();
        sorted.sort();
        let listing = sorted
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            self.prompt(&listing)?;
            let entry = self.read_entry()?;
            let Ok(mv) = entry.parse::<G::Move>() else {
                debug!("ignoring unparsable move {entry:?}");
                continue;
            };
            if let Some(next) = legal.remove(&mv) {
                return Ok((mv, next));
            }
            debug!("ignoring illegal move {entry:?}");
        }
    }
}

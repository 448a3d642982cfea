//! Session Loop
//!
//! Reads one line at a time and drives the [`Dispatcher`] until the session
//! reaches its terminal state.
//!
//! ```text
//!            ┌───────────────┐  line   ┌─────────────┐
//!   start ──►│ AwaitingLine  │────────►│ Dispatching │
//!            └──────┬────────┘◄────────└──────┬──────┘
//!                   │ EOF / blank line        │ exit
//!                   ▼                         ▼
//!            ┌──────────────────────────────────────┐
//!            │               Closed                 │
//!            └──────────────────────────────────────┘
//! ```
//!
//! A fatal error from the dispatcher leaves the loop immediately as `Err`.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::network::Transport;
use super::command::{ClientCommand, CommandTable, Parsed};
use super::dispatcher::{Dispatcher, Outcome};

/// Why a session ended cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Input stream exhausted
    EndOfInput,

    /// An empty line was entered
    BlankLine,

    /// The `exit` command
    Exit,
}

#[derive(Debug)]
enum State {
    AwaitingLine,
    Dispatching(ClientCommand),
    Closed(CloseReason),
}

/// One interactive session over one connection
pub struct Session<R, T, O: Write, E: Write> {
    input: R,
    table: CommandTable,
    dispatcher: Dispatcher<T, O, E>,

    /// Reused line buffer
    line: Vec<u8>,
}

impl<R: BufRead, T: Transport, O: Write, E: Write> Session<R, T, O, E> {
    pub fn new(input: R, table: CommandTable, dispatcher: Dispatcher<T, O, E>) -> Self {
        Self {
            input,
            table,
            dispatcher,
            line: Vec::new(),
        }
    }

    /// Run until the session closes
    pub fn run(&mut self) -> Result<CloseReason> {
        let mut state = State::AwaitingLine;
        loop {
            state = match state {
                State::AwaitingLine => self.next_line()?,
                State::Dispatching(command) => match self.dispatcher.dispatch(&command)? {
                    Outcome::Exit => State::Closed(CloseReason::Exit),
                    outcome => {
                        tracing::debug!("{:?} finished: {:?}", command.verb(), outcome);
                        State::AwaitingLine
                    }
                },
                State::Closed(reason) => {
                    tracing::info!("session closed: {:?}", reason);
                    return Ok(reason);
                }
            };
        }
    }

    /// Read and resolve one line
    fn next_line(&mut self) -> Result<State> {
        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(State::Closed(CloseReason::EndOfInput));
        }

        let console = self.dispatcher.console_mut();
        let line = match std::str::from_utf8(&self.line) {
            Ok(line) => strip_terminator(line),
            Err(_) => {
                let lossy = String::from_utf8_lossy(&self.line);
                console.report(format!("{}: invalid command", strip_terminator(&lossy)))?;
                return Ok(State::AwaitingLine);
            }
        };
        if line.is_empty() {
            return Ok(State::Closed(CloseReason::BlankLine));
        }
        tracing::debug!("command {}", line);

        let next = match self.table.parse(line) {
            Parsed::Command(command) => State::Dispatching(command),
            Parsed::Invalid => {
                console.report(format!("{}: invalid command", line))?;
                State::AwaitingLine
            }
            Parsed::Usage(verb) => {
                console.report(verb.usage())?;
                State::AwaitingLine
            }
            Parsed::BadFilename { verb, reason } => {
                console.report(format!("{}: {}", verb.keyword(), reason))?;
                State::AwaitingLine
            }
        };
        Ok(next)
    }

    pub fn into_dispatcher(self) -> Dispatcher<T, O, E> {
        self.dispatcher
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

//! User-facing output streams.

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;

/// Output side of the terminal: results go to `out`, diagnostics to `err`
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,

    /// Prefix for diagnostics
    program: String,
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, program: impl Into<String>) -> Self {
        Self {
            out,
            err,
            program: program.into(),
        }
    }

    /// Write bytes to the result stream unchanged
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()?;
        Ok(())
    }

    /// Print one line on the result stream
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    /// Print one diagnostic line, prefixed with the program name
    pub fn report(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.err, "{}: {}", self.program, message)?;
        self.err.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

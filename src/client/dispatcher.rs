//! Command Dispatcher
//!
//! Turns one [`ClientCommand`] into one request/response exchange and renders
//! the result.
//!
//! ## Error classes
//! - Local precondition failures (missing local file, unwritable destination)
//!   are reported and returned as [`Outcome::LocalError`]
//! - Well-formed but unexpected replies are reported with the returned header
//!   and returned as [`Outcome::Unexpected`]
//! - Transport failures and malformed headers are returned as `Err` and end
//!   the session

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{
    recv_header, recv_payload, send_header, send_payload, CommandType, Filename, Header,
};
use super::command::{ClientCommand, HELP_TEXT};
use super::console::Console;

/// How a dispatched command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Help text printed
    Help,

    /// Session should close
    Exit,

    /// LSOUT received and printed
    Listed { nbytes: usize },

    /// FILEOUT received and stored locally
    Fetched { filename: Filename, nbytes: usize },

    /// Server answered ACK
    Acked { request: CommandType, filename: Filename },

    /// Server answered NAK
    Nakked { request: CommandType, filename: Filename },

    /// Server answered with a code the request does not allow
    Unexpected { request: CommandType, reply: Header },

    /// Failed before or after the exchange on the local side
    LocalError { message: String },
}

impl Outcome {
    /// Whether the command did what the user asked
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Help
                | Outcome::Exit
                | Outcome::Listed { .. }
                | Outcome::Fetched { .. }
                | Outcome::Acked { .. }
        )
    }
}

/// Runs commands against the server over an exclusively owned transport
pub struct Dispatcher<T, O: Write, E: Write> {
    transport: T,
    console: Console<O, E>,
    local_dir: PathBuf,
    max_payload_size: u32,
}

impl<T: Transport, O: Write, E: Write> Dispatcher<T, O, E> {
    pub fn new(transport: T, console: Console<O, E>, config: &Config) -> Self {
        Self {
            transport,
            console,
            local_dir: config.local_dir.clone(),
            max_payload_size: config.max_payload_size,
        }
    }

    /// Run one command to completion
    pub fn dispatch(&mut self, command: &ClientCommand) -> Result<Outcome> {
        tracing::debug!("dispatching {:?}", command);
        match command {
            ClientCommand::Exit => Ok(Outcome::Exit),
            ClientCommand::Help => self.help(),
            ClientCommand::Ls => self.ls(),
            ClientCommand::Get(filename) => self.get(filename),
            ClientCommand::Put(filename) => self.put(filename),
            ClientCommand::Rm(filename) => self.rm(filename),
        }
    }

    pub fn help(&mut self) -> Result<Outcome> {
        self.console.write_raw(HELP_TEXT.as_bytes())?;
        Ok(Outcome::Help)
    }

    /// LS: header-only request, LSOUT reply carries the listing
    pub fn ls(&mut self) -> Result<Outcome> {
        send_header(&mut self.transport, &Header::bare(CommandType::Ls))?;
        let reply = recv_header(&mut self.transport)?;

        if reply.command != CommandType::LsOut {
            return self.unexpected(CommandType::Ls, reply, "sent LS, server did not return LSOUT");
        }

        let listing = recv_payload(&mut self.transport, reply.nbytes, self.max_payload_size)?;
        self.console.write_raw(&listing)?;
        Ok(Outcome::Listed {
            nbytes: listing.len(),
        })
    }

    /// GET: FILEOUT reply carries the contents, stored under the requested name
    pub fn get(&mut self, filename: &Filename) -> Result<Outcome> {
        let request = Header::for_file(CommandType::Get, filename.clone());
        send_header(&mut self.transport, &request)?;
        let reply = recv_header(&mut self.transport)?;

        if reply.command != CommandType::FileOut {
            let message = format!("{} is not a file", filename);
            return self.unexpected(CommandType::Get, reply, &message);
        }

        let contents = recv_payload(&mut self.transport, reply.nbytes, self.max_payload_size)?;

        let path = self.local_path(filename);
        if let Err(e) = fs::write(&path, &contents) {
            return self.local_error(format!("cannot write {}: {}", path.display(), e));
        }

        self.console.say(format!("{} was successfully added", filename))?;
        Ok(Outcome::Fetched {
            filename: filename.clone(),
            nbytes: contents.len(),
        })
    }

    /// PUT: local contents follow the header; ACK/NAK reply
    ///
    /// Nothing is sent when the local file cannot be read in full.
    pub fn put(&mut self, filename: &Filename) -> Result<Outcome> {
        let contents = match self.read_local(filename) {
            Ok(contents) => contents,
            Err(message) => return self.local_error(message),
        };

        // read_local enforces the ceiling, which fits in u32
        let nbytes = contents.len() as u32;
        let request = Header::for_file(CommandType::Put, filename.clone()).with_nbytes(nbytes);
        send_header(&mut self.transport, &request)?;
        send_payload(&mut self.transport, &contents)?;
        drop(contents);

        let reply = recv_header(&mut self.transport)?;
        match reply.command {
            CommandType::Ack => {
                self.console.say("ACK received: put file on the server")?;
                Ok(Outcome::Acked {
                    request: CommandType::Put,
                    filename: filename.clone(),
                })
            }
            CommandType::Nak => {
                self.console.report("NAK received: couldn't put file on the server")?;
                Ok(Outcome::Nakked {
                    request: CommandType::Put,
                    filename: filename.clone(),
                })
            }
            _ => self.unexpected(CommandType::Put, reply, "sent PUT, server returned neither ACK nor NAK"),
        }
    }

    /// RM: header-only request; ACK/NAK reply
    pub fn rm(&mut self, filename: &Filename) -> Result<Outcome> {
        let request = Header::for_file(CommandType::Rm, filename.clone());
        send_header(&mut self.transport, &request)?;
        let reply = recv_header(&mut self.transport)?;

        match reply.command {
            CommandType::Ack => {
                self.console
                    .say(format!("ACK received: file deleted: {}", filename))?;
                Ok(Outcome::Acked {
                    request: CommandType::Rm,
                    filename: filename.clone(),
                })
            }
            CommandType::Nak => {
                self.console
                    .report(format!("NAK received: couldn't delete the file: {}", filename))?;
                Ok(Outcome::Nakked {
                    request: CommandType::Rm,
                    filename: filename.clone(),
                })
            }
            _ => self.unexpected(CommandType::Rm, reply, "sent RM, server returned neither ACK nor NAK"),
        }
    }

    pub fn console_mut(&mut self) -> &mut Console<O, E> {
        &mut self.console
    }

    pub fn into_parts(self) -> (T, Console<O, E>) {
        (self.transport, self.console)
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn local_path(&self, filename: &Filename) -> PathBuf {
        self.local_dir.join(Path::new(filename.as_str()))
    }

    /// Read a whole local file, or describe why it cannot be sent
    fn read_local(&self, filename: &Filename) -> std::result::Result<Vec<u8>, String> {
        let path = self.local_path(filename);
        let describe = |e: std::io::Error| match e.kind() {
            ErrorKind::NotFound => format!("could not find file: {}", filename),
            _ => format!("cannot read {}: {}", path.display(), e),
        };

        let file = File::open(&path).map_err(describe)?;
        let metadata = file.metadata().map_err(describe)?;
        if !metadata.is_file() {
            return Err(format!("{} is not a regular file", filename));
        }

        let max = u64::from(self.max_payload_size);
        if metadata.len() > max {
            return Err(format!(
                "{} is too large: {} bytes (max {})",
                filename,
                metadata.len(),
                max
            ));
        }

        // One byte past the ceiling is enough to notice a file that grew
        let mut contents = Vec::with_capacity(metadata.len() as usize);
        file.take(max + 1)
            .read_to_end(&mut contents)
            .map_err(describe)?;
        if contents.len() as u64 > max {
            return Err(format!("{} grew while being read", filename));
        }
        Ok(contents)
    }

    fn unexpected(&mut self, request: CommandType, reply: Header, message: &str) -> Result<Outcome> {
        tracing::debug!("{} answered with {}", request, reply.command);
        self.console.report(message)?;
        self.console.report(format!("server returned {}", reply))?;
        Ok(Outcome::Unexpected { request, reply })
    }

    fn local_error(&mut self, message: String) -> Result<Outcome> {
        self.console.report(format!("Error message: {}", message))?;
        Ok(Outcome::LocalError { message })
    }
}

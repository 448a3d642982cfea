//! Command definitions
//!
//! The commands a user can type, and the table that resolves them.

use std::collections::HashMap;

use crate::protocol::Filename;

/// Static command summary printed by `help`
pub const HELP_TEXT: &str = "
exit         - Exit the program.  Equivalent to EOF.
get filename - Copy remote file to local host.
help         - Print help summary.
ls           - List names of files on remote server.
put filename - Copy local file to remote host.
rm filename  - Remove file from remote server.
";

/// Command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Exit,
    Help,
    Ls,
    Get,
    Put,
    Rm,
}

impl Verb {
    const ALL: [Verb; 6] = [Verb::Exit, Verb::Help, Verb::Ls, Verb::Get, Verb::Put, Verb::Rm];

    /// The keyword typed at the prompt
    pub fn keyword(self) -> &'static str {
        match self {
            Verb::Exit => "exit",
            Verb::Help => "help",
            Verb::Ls => "ls",
            Verb::Get => "get",
            Verb::Put => "put",
            Verb::Rm => "rm",
        }
    }

    /// Whether the command needs a filename argument
    pub fn takes_filename(self) -> bool {
        matches!(self, Verb::Get | Verb::Put | Verb::Rm)
    }

    pub fn usage(self) -> String {
        if self.takes_filename() {
            format!("usage: {} filename", self.keyword())
        } else {
            format!("usage: {}", self.keyword())
        }
    }
}

/// A fully resolved user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    Exit,
    Help,
    Ls,
    Get(Filename),
    Put(Filename),
    Rm(Filename),
}

impl ClientCommand {
    pub fn verb(&self) -> Verb {
        match self {
            ClientCommand::Exit => Verb::Exit,
            ClientCommand::Help => Verb::Help,
            ClientCommand::Ls => Verb::Ls,
            ClientCommand::Get(_) => Verb::Get,
            ClientCommand::Put(_) => Verb::Put,
            ClientCommand::Rm(_) => Verb::Rm,
        }
    }
}

/// Result of resolving one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Ready to dispatch
    Command(ClientCommand),

    /// First token is not a known keyword
    Invalid,

    /// Required filename argument missing or empty
    Usage(Verb),

    /// Filename given but not representable on the wire
    BadFilename { verb: Verb, reason: String },
}

/// Immutable keyword → command map, built once per process
#[derive(Debug, Clone)]
pub struct CommandTable {
    verbs: HashMap<&'static str, Verb>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        let verbs = Verb::ALL.iter().map(|&verb| (verb.keyword(), verb)).collect();
        Self { verbs }
    }

    /// Look up a keyword
    pub fn lookup(&self, token: &str) -> Option<Verb> {
        self.verbs.get(token).copied()
    }

    /// Resolve a line (without its terminator) to a command
    ///
    /// Tokens are separated by single spaces. Tokens after the ones a command
    /// consumes are ignored.
    pub fn parse(&self, line: &str) -> Parsed {
        let tokens = tokenize(line);

        let verb = match tokens.first().and_then(|t| self.lookup(t)) {
            Some(verb) => verb,
            None => return Parsed::Invalid,
        };

        if !verb.takes_filename() {
            return Parsed::Command(match verb {
                Verb::Exit => ClientCommand::Exit,
                Verb::Help => ClientCommand::Help,
                _ => ClientCommand::Ls,
            });
        }

        let name = match tokens.get(1) {
            Some(name) if !name.is_empty() => *name,
            _ => return Parsed::Usage(verb),
        };

        let filename = match Filename::new(name) {
            Ok(filename) => filename,
            Err(e) => {
                return Parsed::BadFilename {
                    verb,
                    reason: e.to_string(),
                }
            }
        };

        Parsed::Command(match verb {
            Verb::Get => ClientCommand::Get(filename),
            Verb::Put => ClientCommand::Put(filename),
            _ => ClientCommand::Rm(filename),
        })
    }
}

/// Split on single-space boundaries; consecutive spaces yield empty tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

//! Command definitions
//!
//! The closed set of codes carried in the `command` byte of a header.

use std::fmt;

/// Command types
///
/// `Exit` and `Help` share the numbering with the wire codes but are purely
/// local; they never appear in a header that crosses the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandType {
    Error = 0,
    Exit = 1,
    Get = 2,
    Help = 3,
    Ls = 4,
    Put = 5,
    Rm = 6,
    FileOut = 7,
    LsOut = 8,
    Ack = 9,
    Nak = 10,
}

impl CommandType {
    /// Map a raw code byte to a command type
    pub fn from_code(code: u8) -> Option<Self> {
        let command = match code {
            0 => CommandType::Error,
            1 => CommandType::Exit,
            2 => CommandType::Get,
            3 => CommandType::Help,
            4 => CommandType::Ls,
            5 => CommandType::Put,
            6 => CommandType::Rm,
            7 => CommandType::FileOut,
            8 => CommandType::LsOut,
            9 => CommandType::Ack,
            10 => CommandType::Nak,
            _ => return None,
        };
        Some(command)
    }

    /// The code byte written on the wire
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether this code may be exchanged with the server
    pub fn is_wire(self) -> bool {
        !matches!(self, CommandType::Exit | CommandType::Help)
    }

    /// Upper-case protocol name
    pub fn name(self) -> &'static str {
        match self {
            CommandType::Error => "ERROR",
            CommandType::Exit => "EXIT",
            CommandType::Get => "GET",
            CommandType::Help => "HELP",
            CommandType::Ls => "LS",
            CommandType::Put => "PUT",
            CommandType::Rm => "RM",
            CommandType::FileOut => "FILEOUT",
            CommandType::LsOut => "LSOUT",
            CommandType::Ack => "ACK",
            CommandType::Nak => "NAK",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

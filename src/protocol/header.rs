//! Header definitions
//!
//! The fixed-size envelope exchanged before every optional payload, and the
//! length-checked filename it carries.

use std::fmt;

use crate::error::{FilewireError, Result};
use super::CommandType;

/// Size of the filename field on the wire, including the NUL terminator
pub const FILENAME_CAPACITY: usize = 59;

/// Longest filename (in bytes) that fits in the field
pub const MAX_FILENAME_LEN: usize = FILENAME_CAPACITY - 1;

/// A remote filename that is guaranteed to fit the header's filename field
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Filename(String);

impl Filename {
    /// Validate a filename
    ///
    /// Names are rejected, never truncated: they must be non-empty, at most
    /// [`MAX_FILENAME_LEN`] bytes, and free of NUL bytes.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FilewireError::Protocol("filename is empty".to_string()));
        }
        Self::checked(name)
    }

    /// The empty name used by requests that do not address a file
    pub fn none() -> Self {
        Self(String::new())
    }

    pub(crate) fn checked(name: String) -> Result<Self> {
        if name.len() > MAX_FILENAME_LEN {
            return Err(FilewireError::Protocol(format!(
                "filename too long: {} bytes (max {})",
                name.len(),
                MAX_FILENAME_LEN
            )));
        }
        if name.contains('\0') {
            return Err(FilewireError::Protocol(
                "filename contains a NUL byte".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Protocol envelope
///
/// `nbytes` is always held in host order; the codec owns the conversion to and
/// from network order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Request or response kind
    pub command: CommandType,

    /// Length of the payload that follows this header
    pub nbytes: u32,

    /// File addressed by the request (empty when unused)
    pub filename: Filename,
}

impl Header {
    /// A header with no payload and no filename
    pub fn bare(command: CommandType) -> Self {
        Self {
            command,
            nbytes: 0,
            filename: Filename::none(),
        }
    }

    /// A header-only request naming a file
    pub fn for_file(command: CommandType, filename: Filename) -> Self {
        Self {
            command,
            nbytes: 0,
            filename,
        }
    }

    /// Set the payload length
    pub fn with_nbytes(mut self, nbytes: u32) -> Self {
        self.nbytes = nbytes;
        self
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {:?}}}", self.nbytes, self.command, self.filename.as_str())
    }
}

//! Packet Transport
//!
//! Blocking, all-or-nothing send/receive of an exact byte count.

use std::io::{self, Read, Write};

use crate::error::{FilewireError, Result};

/// A duplex byte channel that transfers exactly the requested count or fails
pub trait Transport {
    /// Send every byte of `buf`
    fn send(&mut self, buf: &[u8]) -> Result<()>;

    /// Fill `buf` completely
    fn recv(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<S: Read + Write> Transport for S {
    fn send(&mut self, buf: &[u8]) -> Result<()> {
        self.write_all(buf).map_err(transport_error)?;
        self.flush().map_err(transport_error)?;
        Ok(())
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<()> {
        self.read_exact(buf).map_err(transport_error)
    }
}

/// Classify a stream failure; lost connections become network errors
fn transport_error(err: io::Error) -> FilewireError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof => {
            FilewireError::Network("connection closed by server".to_string())
        }
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe => FilewireError::Network(format!("connection lost: {}", err)),
        _ => FilewireError::Io(err),
    }
}

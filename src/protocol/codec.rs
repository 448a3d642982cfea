//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Header Format (64 bytes, every exchange)
//! ```text
//! ┌────────────┬─────────┬──────────────────────────────────┐
//! │ nbytes (4) │ Cmd (1) │ Filename (59, NUL-terminated)    │
//! └────────────┴─────────┴──────────────────────────────────┘
//! ```
//!
//! `nbytes` is big-endian on the wire. It is converted on every encode and every
//! decode, so callers only ever handle host-order lengths.
//!
//! ### Payload by Command Type
//! - LS, GET, RM requests:  none
//! - PUT request:           file contents (`nbytes` bytes)
//! - LSOUT response:        newline-separated names (`nbytes` bytes)
//! - FILEOUT response:      file contents (`nbytes` bytes)
//! - ACK, NAK, ERROR:       none

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FilewireError, Result};
use crate::network::Transport;
use super::{CommandType, Filename, Header, FILENAME_CAPACITY};

/// Header size: 4 bytes length + 1 byte command + filename field
pub const HEADER_SIZE: usize = 4 + 1 + FILENAME_CAPACITY;

/// Default maximum payload size (64 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 64 * 1024 * 1024;

// =============================================================================
// Header Encoding/Decoding
// =============================================================================

/// Encode a header to its fixed-size wire form
pub fn encode_header(header: &Header) -> Bytes {
    let name = header.filename.as_str().as_bytes();

    let mut buf = BytesMut::with_capacity(HEADER_SIZE);
    buf.put_u32(header.nbytes);
    buf.put_u8(header.command.code());
    buf.put_slice(name);
    buf.put_bytes(0, FILENAME_CAPACITY - name.len());

    buf.freeze()
}

/// Decode a header from bytes
///
/// Only the first [`HEADER_SIZE`] bytes are examined.
pub fn decode_header(bytes: &[u8]) -> Result<Header> {
    if bytes.len() < HEADER_SIZE {
        return Err(FilewireError::Protocol(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let mut buf = &bytes[..HEADER_SIZE];
    let nbytes = buf.get_u32();
    let code = buf.get_u8();

    let command = match CommandType::from_code(code) {
        Some(command) if command.is_wire() => command,
        Some(command) => {
            return Err(FilewireError::Protocol(format!(
                "Local-only command on the wire: {}",
                command
            )))
        }
        None => {
            return Err(FilewireError::Protocol(format!(
                "Unknown command type: 0x{:02x}",
                code
            )))
        }
    };

    // buf now holds exactly the filename field
    let end = buf
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| FilewireError::Protocol("Unterminated filename field".to_string()))?;
    let name = std::str::from_utf8(&buf[..end])
        .map_err(|_| FilewireError::Protocol("Filename is not valid UTF-8".to_string()))?;

    Ok(Header {
        command,
        nbytes,
        filename: Filename::checked(name.to_string())?,
    })
}

/// Validate a received payload length before anything is allocated for it
pub fn check_payload_len(nbytes: u32, max: u32) -> Result<usize> {
    if nbytes > max {
        return Err(FilewireError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            nbytes, max
        )));
    }
    usize::try_from(nbytes)
        .map_err(|_| FilewireError::Protocol(format!("Payload length {} overflows", nbytes)))
}

// =============================================================================
// Transport-based I/O helpers
// =============================================================================

/// Send a header
pub fn send_header<T: Transport + ?Sized>(transport: &mut T, header: &Header) -> Result<()> {
    tracing::trace!("sending header {}", header);
    transport.send(&encode_header(header))
}

/// Receive a complete header
///
/// Blocks until all [`HEADER_SIZE`] bytes arrive or the transport fails
pub fn recv_header<T: Transport + ?Sized>(transport: &mut T) -> Result<Header> {
    let mut raw = [0u8; HEADER_SIZE];
    transport.recv(&mut raw)?;

    let header = decode_header(&raw)?;
    tracing::trace!("received header {}", header);
    Ok(header)
}

/// Send a payload body
pub fn send_payload<T: Transport + ?Sized>(transport: &mut T, payload: &[u8]) -> Result<()> {
    if payload.is_empty() {
        return Ok(());
    }
    transport.send(payload)
}

/// Receive a payload body of `nbytes` bytes, refusing lengths above `max`
pub fn recv_payload<T: Transport + ?Sized>(
    transport: &mut T,
    nbytes: u32,
    max: u32,
) -> Result<Vec<u8>> {
    let len = check_payload_len(nbytes, max)?;

    let mut payload = vec![0u8; len];
    if len > 0 {
        transport.recv(&mut payload)?;
    }
    tracing::trace!("received {} payload bytes", len);
    Ok(payload)
}

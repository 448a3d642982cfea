//! Protocol Module
//!
//! Defines the wire protocol between the client and a file server.
//!
//! ## Exchange Format
//!
//! Every request and every response starts with a fixed 64-byte header,
//! optionally followed by a payload whose length the header announces.
//! ```text
//! ┌────────────┬─────────┬──────────────────┬─────────────────────────┐
//! │ nbytes (4) │ Cmd (1) │ Filename (59)    │  Payload (nbytes)       │
//! └────────────┴─────────┴──────────────────┴─────────────────────────┘
//! ```
//!
//! ### Requests
//! - 0x04: LS   - no filename, no payload
//! - 0x02: GET  - filename, no payload
//! - 0x05: PUT  - filename, payload: file contents
//! - 0x06: RM   - filename, no payload
//!
//! ### Responses
//! - 0x08: LSOUT   - payload: listing
//! - 0x07: FILEOUT - payload: file contents
//! - 0x09: ACK
//! - 0x0A: NAK
//! - 0x00: ERROR

mod command;
mod header;
mod codec;

pub use command::CommandType;
pub use header::{Filename, Header, FILENAME_CAPACITY, MAX_FILENAME_LEN};
pub use codec::{
    check_payload_len, decode_header, encode_header, recv_header, recv_payload, send_header,
    send_payload, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};

//! Network Module
//!
//! Transport to the file server.
//!
//! ## Architecture
//! - One blocking TCP connection per session
//! - Exact-count send/receive through [`Transport`]
//! - Any `Read + Write` stream is a transport, which lets tests script a peer

mod transport;
mod connection;

pub use transport::Transport;
pub use connection::Connection;

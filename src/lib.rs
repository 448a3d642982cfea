//! # filewire
//!
//! An interactive client for a small remote file-access protocol:
//! - `ls`, `get`, `put`, `rm` against a remote file server
//! - Fixed 64-byte request/response headers with network-order lengths
//! - One blocking request/response exchange at a time over TCP
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Session Loop                            │
//! │          (line → tokens → command, until closed)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Command Dispatcher                          │
//! │        (one exchange per command, renders outcome)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Header    │          │  Transport  │
//!   │   Codec     │─────────►│   (TCP)     │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FilewireError, Result};
pub use config::Config;
pub use client::{CloseReason, CommandTable, Console, Dispatcher, Outcome, Session};
pub use network::{Connection, Transport};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filewire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

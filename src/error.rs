//! Error types for filewire
//!
//! Only conditions that end a session are errors. Local precondition failures and
//! unexpected-but-valid server replies are reported to the user and surface as
//! [`Outcome`](crate::client::Outcome) values instead.

use thiserror::Error;

/// Result type alias using FilewireError
pub type Result<T> = std::result::Result<T, FilewireError>;

/// Unified error type for filewire operations
#[derive(Debug, Error)]
pub enum FilewireError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

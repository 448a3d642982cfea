//! Configuration for filewire
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{FilewireError, Result};
use crate::protocol::MAX_PAYLOAD_SIZE;

/// Client configuration, fixed for the lifetime of a session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server host name or address
    pub host: String,

    /// Server TCP port
    pub port: u16,

    /// Disable Nagle's algorithm on the connection
    pub nodelay: bool,

    // -------------------------------------------------------------------------
    // Transfer Configuration
    // -------------------------------------------------------------------------
    /// Directory that `get` writes into and `put` reads from
    pub local_dir: PathBuf,

    /// Largest payload accepted from the server or sent with `put` (in bytes)
    pub max_payload_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 50000,
            nodelay: true,
            local_dir: PathBuf::from("."),
            max_payload_size: MAX_PAYLOAD_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port` as given on the command line, for logging
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check settings that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(FilewireError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(FilewireError::Config("port must be non-zero".to_string()));
        }
        if self.max_payload_size == 0 {
            return Err(FilewireError::Config(
                "max payload size must be non-zero".to_string(),
            ));
        }
        if !self.local_dir.is_dir() {
            return Err(FilewireError::Config(format!(
                "{} is not a directory",
                self.local_dir.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable or disable TCP_NODELAY
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    /// Set the local transfer directory
    pub fn local_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.local_dir = path.into();
        self
    }

    /// Set the payload ceiling (in bytes)
    pub fn max_payload_size(mut self, size: u32) -> Self {
        self.config.max_payload_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Server Connection
//!
//! The single TCP connection a session talks to the server over.

use std::io::{self, BufReader, BufWriter, Read, Write};
use std::net::TcpStream;

use crate::config::Config;
use crate::error::{FilewireError, Result};

/// Connection to the file server
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Connect to `config.host:config.port`
    pub fn connect(config: &Config) -> Result<Self> {
        tracing::info!("connecting to {} port {}", config.host, config.port);

        let stream = TcpStream::connect((config.host.as_str(), config.port)).map_err(|e| {
            FilewireError::Network(format!("cannot connect to {}: {}", config.server_addr(), e))
        })?;

        let connection = Self::from_stream(stream, config.nodelay)?;
        tracing::info!("connected to {}", connection.peer_addr);
        Ok(connection)
    }

    /// Wrap an already-connected stream
    pub fn from_stream(stream: TcpStream, nodelay: bool) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Headers are small; don't let Nagle hold them back
        stream.set_nodelay(nodelay)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Read for Connection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

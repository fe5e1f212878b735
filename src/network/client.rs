//! Client Connection
//!
//! One connection, one command, one read.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};

use bytes::BytesMut;

use crate::config::{Config, Endpoint};
use crate::error::{ClientError, Result};
use crate::protocol::{Command, Response};

/// A connected client
///
/// The socket is closed when the client is dropped; [`Client::close`] does the
/// same but reports shutdown failures.
pub struct Client {
    /// Underlying TCP stream
    stream: TcpStream,

    /// Endpoint we dialed, for diagnostics
    endpoint: Endpoint,

    /// Upper bound on bytes taken from a read
    buffer_size: usize,
}

impl Client {
    /// Dial the configured endpoint and apply socket options
    pub fn connect(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint;
        let addr = endpoint.socket_addr();

        tracing::debug!("Connecting to {}", endpoint);

        let stream = match config.connect_timeout() {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
            None => TcpStream::connect(addr),
        }
        .map_err(|source| ClientError::Connect { endpoint, source })?;

        // Disable Nagle's algorithm, the command is a single small write
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        tracing::debug!("Connected to {}", endpoint);

        Ok(Self {
            stream,
            endpoint,
            buffer_size: config.buffer_size,
        })
    }

    /// Write the command bytes exactly as given
    pub fn send(&mut self, command: &Command) -> Result<()> {
        let endpoint = self.endpoint;
        self.stream
            .write_all(command.as_bytes())
            .and_then(|_| self.stream.flush())
            .map_err(|source| ClientError::Send { endpoint, source })?;

        tracing::trace!("Sent {} bytes to {}", command.len(), endpoint);
        Ok(())
    }

    /// Perform a single read
    ///
    /// Returns `None` if the server closed the connection without sending
    /// anything. Bytes beyond the buffer size stay unread.
    pub fn recv(&mut self) -> Result<Option<Response>> {
        let endpoint = self.endpoint;
        let mut buffer = BytesMut::zeroed(self.buffer_size);

        let n = loop {
            match self.stream.read(&mut buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => return Err(ClientError::Receive { endpoint, source }),
            }
        };

        tracing::trace!("Received {} bytes from {}", n, endpoint);

        if n == 0 {
            return Ok(None);
        }
        buffer.truncate(n);
        Ok(Some(Response::new(buffer.freeze())))
    }

    /// Send a command and read the reply
    pub fn exchange(&mut self, command: &Command) -> Result<Option<Response>> {
        self.send(command)?;
        self.recv()
    }

    /// Shut down both directions of the connection
    pub fn close(self) -> Result<()> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => {}
            // Peer already tore the connection down
            Err(e) if e.kind() == ErrorKind::NotConnected => {}
            Err(source) => {
                return Err(ClientError::Close {
                    endpoint: self.endpoint,
                    source,
                })
            }
        }
        tracing::debug!("Closed connection to {}", self.endpoint);
        Ok(())
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

/// Connect, send the configured command, read once, close
pub fn run_once(config: &Config) -> Result<Option<Response>> {
    config.validate()?;

    let mut client = Client::connect(config)?;
    let response = client.exchange(&config.command)?;
    client.close()?;

    Ok(response)
}

//! Configuration for kvclient
//!
//! Centralized configuration with the demo's compiled-in defaults.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ClientError, Result};
use crate::protocol::Command;

/// Default server host
pub const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::new(192, 168, 31, 43);

/// Default server port
pub const DEFAULT_PORT: u16 = 2000;

/// Command sent when none is given
pub const DEFAULT_COMMAND: &str = "set student pu";

/// Size of the single read buffer
pub const RESPONSE_BUFFER_SIZE: usize = 1024;

/// Default connect timeout (milliseconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

// =============================================================================
// Endpoint
// =============================================================================

/// A (host, port) pair identifying a TCP listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: Ipv4Addr, port: u16) -> Self {
        Self { host, port }
    }

    /// Socket address to dial
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.host, self.port))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = ClientError;

    /// Parse `a.b.c.d:port`
    fn from_str(s: &str) -> Result<Self> {
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| ClientError::Config(format!("Endpoint '{}' is missing a port", s)))?;

        let host = host
            .parse::<Ipv4Addr>()
            .map_err(|e| ClientError::Config(format!("Invalid IPv4 host '{}': {}", host, e)))?;
        let port = port
            .parse::<u16>()
            .map_err(|e| ClientError::Config(format!("Invalid port '{}': {}", port, e)))?;

        Ok(Self::new(host, port))
    }
}

impl From<SocketAddrV4> for Endpoint {
    fn from(addr: SocketAddrV4) -> Self {
        Self::new(*addr.ip(), addr.port())
    }
}

// =============================================================================
// Config
// =============================================================================

/// Everything one run of the client needs
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Target
    // -------------------------------------------------------------------------
    /// Server to dial
    pub endpoint: Endpoint,

    /// Bytes written once after connecting
    pub command: Command,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Upper bound on bytes taken from the single read
    pub buffer_size: usize,

    /// Connect timeout (milliseconds, 0 = OS default)
    pub connect_timeout_ms: u64,

    /// Read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            command: Command::raw(DEFAULT_COMMAND),
            buffer_size: RESPONSE_BUFFER_SIZE,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        millis(self.write_timeout_ms)
    }

    /// Reject configurations that cannot produce a meaningful exchange
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.port == 0 {
            return Err(ClientError::Config("Port 0 cannot be dialed".to_string()));
        }
        if self.command.is_empty() {
            return Err(ClientError::Config("Command must not be empty".to_string()));
        }
        if self.buffer_size == 0 {
            return Err(ClientError::Config(
                "Response buffer size must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server endpoint
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    /// Set the server host
    pub fn host(mut self, host: Ipv4Addr) -> Self {
        self.config.endpoint.host = host;
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.endpoint.port = port;
        self
    }

    /// Set the command to send
    pub fn command(mut self, command: Command) -> Self {
        self.config.command = command;
        self
    }

    /// Set the size of the read buffer (in bytes)
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

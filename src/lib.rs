//! # kvclient
//!
//! A single-shot demo client for a text-command key-value store:
//! - Dials one TCP endpoint
//! - Writes one command, with no framing or terminator
//! - Reads once into a fixed 1024-byte buffer
//! - Hands back whatever arrived
//!
//! ## Data Flow
//!
//! ```text
//! connect ──▶ write command ──▶ read ≤ 1024 bytes ──▶ print ──▶ close
//! ```
//!
//! ```no_run
//! use kvclient::{run_once, Command, Config};
//!
//! let config = Config::builder()
//!     .command(Command::get("student"))
//!     .build()?;
//! if let Some(response) = run_once(&config)? {
//!     println!("recv: {}", response);
//! }
//! # Ok::<(), kvclient::ClientError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ClientError, Result};
pub use config::{Config, Endpoint};
pub use network::{run_once, Client};
pub use protocol::{Command, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvclient
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

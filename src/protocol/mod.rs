//! Protocol Module
//!
//! The server speaks whitespace-separated text commands with no framing:
//!
//! ```text
//! set <key> <value> [ttl_seconds]
//! get <key>
//! del <key>
//! ```
//!
//! The client writes the command bytes once, as-is, and takes whatever a
//! single read returns as the response. Neither side is parsed here.

mod command;
mod response;

pub use command::{Command, Verb};
pub use response::Response;

//! Network Module
//!
//! Blocking TCP client.
//!
//! ## Lifecycle
//! - Dial the endpoint (optionally bounded by a connect timeout)
//! - Write the command once
//! - Read once into a fixed-size buffer
//! - Shut the socket down

mod client;

pub use client::{run_once, Client};

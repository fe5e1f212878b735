//! Command definitions
//!
//! A command is the opaque byte string written to the server in one go.

use std::fmt;

use bytes::Bytes;

/// Verbs understood by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Set,
    Get,
    Del,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Set => "set",
            Verb::Get => "get",
            Verb::Del => "del",
        }
    }
}

/// Bytes sent to the server, without any terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    bytes: Bytes,
}

impl Command {
    /// Wrap arbitrary bytes
    pub fn raw(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// `set <key> <value>`
    pub fn set(key: &str, value: &str) -> Self {
        Self::from_parts(Verb::Set, &[key, value])
    }

    /// `set <key> <value> <ttl_seconds>`
    pub fn set_with_ttl(key: &str, value: &str, ttl_secs: u64) -> Self {
        Self::from_parts(Verb::Set, &[key, value, &ttl_secs.to_string()])
    }

    /// `get <key>`
    pub fn get(key: &str) -> Self {
        Self::from_parts(Verb::Get, &[key])
    }

    /// `del <key>`
    pub fn del(key: &str) -> Self {
        Self::from_parts(Verb::Del, &[key])
    }

    /// Join words with single spaces (e.g. CLI trailing arguments)
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let joined = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::raw(joined)
    }

    fn from_parts(verb: Verb, args: &[&str]) -> Self {
        let mut words = Vec::with_capacity(args.len() + 1);
        words.push(verb.as_str());
        words.extend_from_slice(args);
        Self::from_words(&words[..])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

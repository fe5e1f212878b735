//! Stub servers shared by the integration tests
//!
//! Each stub accepts exactly one connection on 127.0.0.1, runs a handler and
//! hands back every byte the client wrote.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{Ipv4Addr, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use kvclient::Endpoint;

pub struct StubServer {
    pub endpoint: Endpoint,
    handle: JoinHandle<Vec<u8>>,
}

impl StubServer {
    /// Bytes the client wrote over the whole connection
    pub fn received(self) -> Vec<u8> {
        self.handle.join().expect("stub server panicked")
    }
}

/// Accept one connection and hand it to `handler`
pub fn spawn<F>(handler: F) -> StubServer
where
    F: FnOnce(TcpStream) -> Vec<u8> + Send + 'static,
{
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        handler(stream)
    });

    StubServer {
        endpoint: Endpoint::new(Ipv4Addr::LOCALHOST, port),
        handle,
    }
}

/// Echo the first message back
pub fn echo_server() -> StubServer {
    spawn(|mut stream| {
        let mut first = read_once(&mut stream);
        stream.write_all(&first).unwrap();
        first.extend(drain(&mut stream));
        first
    })
}

/// Answer the first message with fixed bytes
pub fn reply_server(reply: Vec<u8>) -> StubServer {
    spawn(move |mut stream| {
        let mut first = read_once(&mut stream);
        stream.write_all(&reply).unwrap();
        first.extend(drain(&mut stream));
        first
    })
}

/// Read the first message, then hang up without answering
pub fn hangup_server() -> StubServer {
    spawn(|mut stream| read_once(&mut stream))
}

/// Read everything, never answer
pub fn silent_server() -> StubServer {
    spawn(|mut stream| drain(&mut stream))
}

/// An endpoint nobody listens on
pub fn refused_endpoint() -> Endpoint {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Endpoint::new(Ipv4Addr::LOCALHOST, port)
}

fn read_once(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = [0u8; 1024];
    let n = stream.read(&mut buf).unwrap();
    buf[..n].to_vec()
}

/// Read until the client closes, tolerating a reset
fn drain(stream: &mut TcpStream) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return out,
            Ok(n) => out.extend_from_slice(&buf[..n]),
        }
    }
}

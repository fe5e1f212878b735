//! Client Tests
//!
//! Single-shot exchanges against in-process stub servers.

mod common;

use std::io::ErrorKind;

use kvclient::{run_once, Client, ClientError, Command, Config};

fn config_for(endpoint: kvclient::Endpoint) -> Config {
    Config::builder().endpoint(endpoint).build().unwrap()
}

// =============================================================================
// Exchange Tests
// =============================================================================

#[test]
fn test_echo_returns_default_command() {
    let server = common::echo_server();
    let config = config_for(server.endpoint);

    let response = run_once(&config).unwrap().expect("expected a response");
    assert_eq!(response.as_text(), "set student pu");

    // Exactly the command on the wire, no terminator
    assert_eq!(server.received(), b"set student pu");
}

#[test]
fn test_ok_response() {
    let server = common::reply_server(b"OK".to_vec());
    let config = config_for(server.endpoint);

    let response = run_once(&config).unwrap().unwrap();
    assert_eq!(response.as_bytes(), b"OK");
    assert_eq!(response.to_string(), "OK");

    server.received();
}

#[test]
fn test_large_response_truncated_to_one_buffer() {
    let server = common::reply_server(vec![b'x'; 4096]);
    let config = config_for(server.endpoint);

    let response = run_once(&config).unwrap().unwrap();
    assert_eq!(response.len(), 1024);
    assert!(response.as_bytes().iter().all(|&b| b == b'x'));

    server.received();
}

#[test]
fn test_custom_buffer_size_limits_read() {
    let server = common::reply_server(b"NOT_FOUND".to_vec());
    let config = Config::builder()
        .endpoint(server.endpoint)
        .buffer_size(3)
        .build()
        .unwrap();

    let response = run_once(&config).unwrap().unwrap();
    assert_eq!(response.as_bytes(), b"NOT");

    server.received();
}

#[test]
fn test_hangup_without_reply_is_success() {
    let server = common::hangup_server();
    let config = config_for(server.endpoint);

    let response = run_once(&config).unwrap();
    assert!(response.is_none());

    assert_eq!(server.received(), b"set student pu");
}

#[test]
fn test_client_api_step_by_step() {
    let server = common::reply_server(b"pu".to_vec());
    let config = config_for(server.endpoint);

    let mut client = Client::connect(&config).unwrap();
    assert_eq!(client.endpoint(), server.endpoint);

    client.send(&Command::get("student")).unwrap();
    let response = client.recv().unwrap().unwrap();
    assert_eq!(response.as_text(), "pu");
    client.close().unwrap();

    assert_eq!(server.received(), b"get student");
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_connection_refused_names_endpoint() {
    let endpoint = common::refused_endpoint();
    let config = config_for(endpoint);

    let err = run_once(&config).unwrap_err();
    assert!(matches!(err, ClientError::Connect { .. }));
    assert!(err.to_string().contains(&endpoint.to_string()));
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(ErrorKind::ConnectionRefused)
    );
}

#[test]
fn test_read_timeout_on_silent_server() {
    let server = common::silent_server();
    let config = Config::builder()
        .endpoint(server.endpoint)
        .read_timeout_ms(200)
        .build()
        .unwrap();

    let err = run_once(&config).unwrap_err();
    match &err {
        ClientError::Receive { endpoint, source } => {
            assert_eq!(*endpoint, server.endpoint);
            assert!(matches!(
                source.kind(),
                ErrorKind::WouldBlock | ErrorKind::TimedOut
            ));
        }
        other => panic!("Expected receive error, got {:?}", other),
    }

    // The socket was released on the error path, so the server saw EOF
    assert_eq!(server.received(), b"set student pu");
}

#[test]
fn test_invalid_config_fails_before_dialing() {
    let mut config = Config::default();
    config.endpoint.port = 0;

    let err = run_once(&config).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    assert!(err.io_error().is_none());
}

//! kvclient CLI
//!
//! Sends one command to the key-value server and prints the reply.

use std::net::Ipv4Addr;
use std::process::ExitCode;

use clap::Parser;
use kvclient::config::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_COMMAND, DEFAULT_HOST, DEFAULT_PORT,
    RESPONSE_BUFFER_SIZE,
};
use kvclient::{run_once, Command, Config, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// kvclient
#[derive(Parser, Debug)]
#[command(name = "kvclient")]
#[command(about = "Send one command to a key-value server and print the reply")]
#[command(version)]
struct Args {
    /// Server host (IPv4)
    #[arg(long, default_value_t = DEFAULT_HOST)]
    host: Ipv4Addr,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Connect timeout in milliseconds (0 = OS default)
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_MS)]
    connect_timeout_ms: u64,

    /// Read timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value_t = 0)]
    read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value_t = 0)]
    write_timeout_ms: u64,

    /// Size of the single read buffer in bytes
    #[arg(short, long, default_value_t = RESPONSE_BUFFER_SIZE)]
    buffer_size: usize,

    /// Command words, joined with spaces (e.g. `get student`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr, stdout only carries the response
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,kvclient=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let command = if args.command.is_empty() {
        Command::raw(DEFAULT_COMMAND)
    } else {
        Command::from_words(&args.command[..])
    };

    let config = Config::builder()
        .host(args.host)
        .port(args.port)
        .command(command)
        .buffer_size(args.buffer_size)
        .connect_timeout_ms(args.connect_timeout_ms)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build()?;

    tracing::info!("kvclient v{}", kvclient::VERSION);
    tracing::info!("Sending '{}' to {}", config.command, config.endpoint);

    if let Some(response) = run_once(&config)? {
        println!("recv: {}", response);
    } else {
        tracing::info!("Server closed the connection without replying");
    }

    Ok(())
}

//! # flightpathd — Binary Entry Point
//!
//! Parses flags (each also settable from the environment), initializes
//! structured tracing, and runs the HTTP server until Ctrl-C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flightpath_api::server::{serve, shutdown_signal};
use flightpath_api::AppConfig;

/// Flight path microservice.
///
/// Accepts `POST /calculate` with a JSON list of `[from, to]` flights and
/// answers with the traveler's overall `[origin, destination]`.
#[derive(Parser, Debug)]
#[command(name = "flightpathd", version, about, long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "FLIGHTPATH_ADDR", default_value = "0.0.0.0:8080")]
    addr: SocketAddr,

    /// Request body read timeout, in seconds.
    #[arg(long, env = "FLIGHTPATH_READ_TIMEOUT", value_name = "SECS", default_value_t = 5)]
    read_timeout: u64,

    /// Whole-request timeout, in seconds.
    #[arg(long, env = "FLIGHTPATH_WRITE_TIMEOUT", value_name = "SECS", default_value_t = 10)]
    write_timeout: u64,

    /// Maximum request body size, in bytes.
    #[arg(long, env = "FLIGHTPATH_MAX_BODY_BYTES", default_value_t = 4096)]
    max_body_bytes: usize,

    /// How long to drain in-flight requests after a shutdown signal, in seconds.
    #[arg(long, env = "FLIGHTPATH_SHUTDOWN_GRACE", value_name = "SECS", default_value_t = 60)]
    shutdown_grace: u64,

    /// Emit logs as JSON lines.
    #[arg(long, env = "FLIGHTPATH_LOG_JSON")]
    log_json: bool,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        Self {
            addr: args.addr,
            read_timeout: Duration::from_secs(args.read_timeout),
            write_timeout: Duration::from_secs(args.write_timeout),
            max_body_bytes: args.max_body_bytes,
            shutdown_grace: Duration::from_secs(args.shutdown_grace),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = AppConfig::from(&args);
    tracing::debug!(?config, "resolved configuration");

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("flightpathd listening on {}", config.addr);

    serve(listener, &config, shutdown_signal()).await
}

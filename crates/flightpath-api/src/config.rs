//! # Service Configuration
//!
//! Operational limits for the HTTP boundary. The `flightpathd` binary builds
//! an [`AppConfig`] from command-line flags and environment variables; tests
//! use [`AppConfig::default`].

use std::net::SocketAddr;
use std::time::Duration;

/// Runtime configuration for the flightpath service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
    /// Deadline for reading a request body.
    pub read_timeout: Duration,
    /// Deadline for handling a whole request, response included.
    pub write_timeout: Duration,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_grace: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            read_timeout: Duration::from_secs(5),
            write_timeout: Duration::from_secs(10),
            max_body_bytes: 4096,
            shutdown_grace: Duration::from_secs(60),
        }
    }
}

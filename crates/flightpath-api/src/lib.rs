//! # flightpath-api — HTTP Boundary for Itinerary Reduction
//!
//! Thin Axum service around [`flightpath_core::calculate`]. It decodes the
//! request body, hands the flights to the core, and renders the result or a
//! structured error. No reduction logic lives here.
//!
//! ## API Surface
//!
//! | Route                    | Module                 | Purpose                    |
//! |--------------------------|------------------------|----------------------------|
//! | `POST /calculate`        | [`routes::calculate`]  | Flight list → route        |
//! | `GET /health/liveness`   | this module            | Process is up              |
//! | `GET /health/readiness`  | this module            | Ready to serve             |
//! | `GET /metrics`           | [`middleware::metrics`]| Request/error counters     |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! Extension → TraceLayer → MetricsMiddleware → TimeoutLayer → RequestBodyTimeoutLayer → body limit → Handler
//! (the last three wrap `/calculate` only)
//! ```
//!
//! The `flightpathd` binary wires [`AppConfig`] from flags and runs the router
//! through [`server::serve`] with graceful shutdown.

pub mod codec;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::{metrics_handler, metrics_middleware, ApiMetrics};

pub use config::AppConfig;
pub use error::AppError;

/// Assemble the application router with all routes and middleware.
///
/// Health probes and `/metrics` sit outside the request limits but are
/// traced and counted like any other request.
pub fn app(config: &AppConfig) -> Router {
    let api = Router::new()
        .merge(routes::calculate::router())
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(RequestBodyTimeoutLayer::new(config.read_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.write_timeout,
        ));

    let probes = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(probes)
        .merge(api)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(ApiMetrics::new()))
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the service has no dependencies to wait on.
async fn readiness() -> &'static str {
    "ready"
}

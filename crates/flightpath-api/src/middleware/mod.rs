//! # Middleware
//!
//! - `metrics` — request and error counters exposed at `/metrics`.

pub mod metrics;

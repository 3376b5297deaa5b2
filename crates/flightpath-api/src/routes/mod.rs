//! # API Route Modules
//!
//! - `calculate` — `POST /calculate`, reduces a flight list to its overall
//!   origin and destination.

pub mod calculate;

//! # flightpath-core — Itinerary Reduction
//!
//! Given the flight segments of a single traveler in arbitrary order, this
//! crate reconstructs the overall route: the airport the traveler started at
//! and the airport they ended at. It is the leaf of the workspace; the HTTP
//! boundary in `flightpath-api` depends on it and nothing here depends back.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for identifiers.** Airports are [`Airport`] values, not bare
//!    strings. Codes are opaque: no alphabet, length or case is assumed.
//!
//! 2. **The input is borrowed, never reordered.** [`calculate`] works on a
//!    borrowed view of the caller's flights and returns a freshly built
//!    [`Flight`], so callers may reuse or drop their list right after the call.
//!
//! 3. **No panics on bad input.** An empty list and shapes that are visibly not
//!    a single path come back as a typed [`PathError`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `flightpath-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod flight;
pub mod path;

#[cfg(test)]
mod contraction;

// Re-export primary types for ergonomic imports.
pub use error::PathError;
pub use flight::{Airport, Flight};
pub use path::calculate;

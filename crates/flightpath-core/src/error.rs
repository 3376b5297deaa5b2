//! # Error Types
//!
//! Failures reported by itinerary reduction. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error returned when a list of flights cannot be reduced to a single route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// No flights were supplied.
    #[error("no flights supplied")]
    Empty,

    /// The flights do not have exactly one starting and one ending leg.
    ///
    /// A single simple path always has one of each. Other counts mean the
    /// input branches, is split into several pieces, loops, or repeats a leg.
    #[error(
        "flights do not form a single path: {origins} candidate origin(s), \
         {destinations} candidate destination(s)"
    )]
    Broken {
        /// Number of legs whose departure airport is never arrived at.
        origins: usize,
        /// Number of legs whose arrival airport is never departed from.
        destinations: usize,
    },

    /// Contraction gave up with flights it could not attach to the route.
    #[error("{unmatched} flight(s) could not be attached to the route")]
    Unresolved {
        /// Number of flights left over when contraction stopped.
        unmatched: usize,
    },
}

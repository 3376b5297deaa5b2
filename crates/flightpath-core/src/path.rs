//! # Route Reduction
//!
//! Reconstructs the overall origin and destination of an itinerary from its
//! flights in arbitrary order, without building an adjacency graph.
//!
//! ## Algorithm
//!
//! Given `[A->B, B->C, C->D]`:
//! - `B` and `C` appear both as a departure and as an arrival.
//! - `A` is never arrived at, so `A->B` is the departure leg.
//! - `D` is never departed from, so `C->D` is the arrival leg.
//!
//! Each flight is classified as a [`Leg`] using the set of departure airports
//! and the set of arrival airports. A stable sort on that key places the
//! departure leg first and the arrival leg last; every connection in between
//! compares equal, which is fine because only the two ends are read.
//!
//! Counting legs while classifying gives a cheap shape check: a single path
//! has exactly one departure leg and one arrival leg.

use std::collections::HashSet;

use crate::error::PathError;
use crate::flight::{Airport, Flight};

/// Position class of a flight within the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Leg {
    /// Leaves the overall origin.
    Departure,
    /// Both ends are shared with other flights.
    Connection,
    /// Reaches the overall destination.
    Arrival,
}

/// Reduce a list of flights to a single flight from the overall origin to the
/// overall destination.
///
/// The flights must form one simple path in any order. The input is only
/// borrowed; the returned flight is newly built.
///
/// # Errors
///
/// - [`PathError::Empty`] when `flights` is empty.
/// - [`PathError::Broken`] when the flights visibly do not form a single
///   path. Detection is best-effort: some malformed inputs still yield a
///   route.
pub fn calculate(flights: &[Flight]) -> Result<Flight, PathError> {
    match flights {
        [] => Err(PathError::Empty),
        [only] => Ok(only.clone()),
        [a, b] => splice(a, b),
        _ => reduce(flights),
    }
}

/// Join two flights in whichever order they connect.
///
/// A pair that connects both ways is a round trip with no endpoints.
fn splice(a: &Flight, b: &Flight) -> Result<Flight, PathError> {
    let forward = a.to == b.from;
    let backward = b.to == a.from;
    if forward && backward {
        Err(PathError::Broken {
            origins: 0,
            destinations: 0,
        })
    } else if forward {
        Ok(Flight::new(a.from.clone(), b.to.clone()))
    } else if backward {
        Ok(Flight::new(b.from.clone(), a.to.clone()))
    } else {
        Err(PathError::Broken {
            origins: 2,
            destinations: 2,
        })
    }
}

fn reduce(flights: &[Flight]) -> Result<Flight, PathError> {
    let departures: HashSet<&Airport> = flights.iter().map(|f| &f.from).collect();
    let arrivals: HashSet<&Airport> = flights.iter().map(|f| &f.to).collect();

    let mut origins = 0;
    let mut destinations = 0;
    let mut ordered: Vec<(Leg, &Flight)> = flights
        .iter()
        .map(|f| {
            let leg = if !arrivals.contains(&f.from) {
                origins += 1;
                Leg::Departure
            } else if !departures.contains(&f.to) {
                destinations += 1;
                Leg::Arrival
            } else {
                Leg::Connection
            };
            (leg, f)
        })
        .collect();

    // A flight that starts at the origin and ends at the destination is an
    // isolated piece; it is counted once above, so recount its arrival side.
    destinations += ordered
        .iter()
        .filter(|(leg, f)| *leg == Leg::Departure && !departures.contains(&f.to))
        .count();

    if origins != 1 || destinations != 1 {
        return Err(PathError::Broken {
            origins,
            destinations,
        });
    }

    ordered.sort_by_key(|(leg, _)| *leg);

    match (ordered.first(), ordered.last()) {
        (Some((_, first)), Some((_, last))) => Ok(Flight::new(first.from.clone(), last.to.clone())),
        _ => Err(PathError::Empty),
    }
}

//! Contraction reducer used as an independent oracle in tests.
//!
//! Starts from the first flight and grows the route at either end, deferring
//! flights that do not touch it yet. Quadratic in the worst case, but simple
//! enough to trust when checking [`crate::calculate`].

use crate::error::PathError;
use crate::flight::Flight;

/// Reduce `flights` by repeatedly attaching flights to either end of a route.
///
/// Each pass over the worklist must attach at least one flight, and at most
/// `flights.len()` passes are made. Anything left over is reported as
/// [`PathError::Unresolved`].
pub(crate) fn reduce(flights: &[Flight]) -> Result<Flight, PathError> {
    let (first, rest) = flights.split_first().ok_or(PathError::Empty)?;

    let mut route = first.clone();
    let mut pending: Vec<&Flight> = rest.iter().collect();

    for _ in 0..flights.len() {
        if pending.is_empty() {
            break;
        }
        let before = pending.len();
        let mut unmatched = Vec::with_capacity(before);

        for flight in pending {
            if flight.to == route.from {
                route.from = flight.from.clone();
            } else if flight.from == route.to {
                route.to = flight.to.clone();
            } else {
                unmatched.push(flight);
            }
        }

        pending = unmatched;
        if pending.len() == before {
            break;
        }
    }

    if pending.is_empty() {
        Ok(route)
    } else {
        Err(PathError::Unresolved {
            unmatched: pending.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flights(pairs: &[(&str, &str)]) -> Vec<Flight> {
        pairs.iter().map(|(from, to)| Flight::new(*from, *to)).collect()
    }

    #[test]
    fn known_itineraries() {
        let cases = [
            flights(&[("SFO", "EWR")]),
            flights(&[("ATL", "EWR"), ("SFO", "ATL")]),
            flights(&[("SFO", "ATL"), ("ATL", "EWR")]),
            flights(&[("IND", "EWR"), ("SFO", "ATL"), ("GSO", "IND"), ("ATL", "GSO")]),
            flights(&[("SFO", "ATL"), ("IND", "EWR"), ("GSO", "IND"), ("ATL", "GSO")]),
        ];
        for input in &cases {
            assert_eq!(reduce(input), Ok(Flight::new("SFO", "EWR")), "input: {input:?}");
        }
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(reduce(&[]), Err(PathError::Empty));
    }

    #[test]
    fn disconnected_flight_terminates() {
        let input = flights(&[("SFO", "ATL"), ("IND", "EWR"), ("ATL", "GSO")]);
        assert_eq!(reduce(&input), Err(PathError::Unresolved { unmatched: 1 }));
    }

    #[test]
    fn duplicate_flight_terminates() {
        let input = flights(&[("SFO", "ATL"), ("SFO", "ATL"), ("ATL", "GSO")]);
        assert_eq!(reduce(&input), Err(PathError::Unresolved { unmatched: 1 }));
    }

    #[test]
    fn outer_flights_attach_on_a_later_pass() {
        // A->B and E->F touch nothing until B->C and D->E are attached.
        let input = flights(&[("C", "D"), ("A", "B"), ("E", "F"), ("B", "C"), ("D", "E")]);
        assert_eq!(reduce(&input), Ok(Flight::new("A", "F")));
    }
}

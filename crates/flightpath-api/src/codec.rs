//! # Wire Codec
//!
//! Request bodies are JSON arrays of `[from, to]` pairs:
//!
//! ```text
//! [["IND", "EWR"], ["SFO", "ATL"], ["GSO", "IND"], ["ATL", "GSO"]]
//! ```
//!
//! The array shape is enforced by the `serde` representation of [`Flight`],
//! which also renders the response pair `["SFO","EWR"]`. This module adds the
//! check serde cannot express: airport codes must be non-empty.

use flightpath_core::Flight;
use thiserror::Error;

/// A request body that is not a valid list of flights.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Not JSON, not a top-level array, or an element that is not exactly two
    /// strings.
    #[error("invalid flight list: {0}")]
    Syntax(#[from] serde_json::Error),

    /// An element has an empty airport code.
    #[error("invalid flight at index {index}: [{from:?}, {to:?}]")]
    EmptyAirport {
        /// Position of the offending element.
        index: usize,
        /// Departure code as received.
        from: String,
        /// Arrival code as received.
        to: String,
    },
}

/// Decode a request body into flights.
pub fn decode_flights(body: &[u8]) -> Result<Vec<Flight>, DecodeError> {
    let flights: Vec<Flight> = serde_json::from_slice(body)?;

    if let Some((index, f)) = flights
        .iter()
        .enumerate()
        .find(|(_, f)| f.from.is_empty() || f.to.is_empty())
    {
        return Err(DecodeError::EmptyAirport {
            index,
            from: f.from.to_string(),
            to: f.to.to_string(),
        });
    }

    Ok(flights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_itineraries() {
        let cases: [(&str, Vec<Flight>); 3] = [
            (r#"[["SFO", "EWR"]]"#, vec![Flight::new("SFO", "EWR")]),
            (
                r#"[["ATL", "EWR"], ["SFO", "ATL"]]"#,
                vec![Flight::new("ATL", "EWR"), Flight::new("SFO", "ATL")],
            ),
            (
                r#"[["IND", "EWR"], ["SFO", "ATL"], ["GSO", "IND"], ["ATL", "GSO"]]"#,
                vec![
                    Flight::new("IND", "EWR"),
                    Flight::new("SFO", "ATL"),
                    Flight::new("GSO", "IND"),
                    Flight::new("ATL", "GSO"),
                ],
            ),
        ];
        for (body, want) in cases {
            assert_eq!(decode_flights(body.as_bytes()).unwrap(), want, "body: {body}");
        }
    }

    #[test]
    fn empty_list_decodes() {
        assert!(decode_flights(b"[]").unwrap().is_empty());
    }

    #[test]
    fn codes_are_not_restricted_to_three_letters() {
        let flights = decode_flights(br#"[["KSFO", "x"]]"#).unwrap();
        assert_eq!(flights, vec![Flight::new("KSFO", "x")]);
    }

    #[test]
    fn rejects_malformed_bodies() {
        let bodies = [
            "",
            "not json",
            r#"{"flights": []}"#,
            r#"["SFO", "EWR"]"#,
            r#"[["SFO"]]"#,
            r#"[["SFO", "ATL", "EWR"]]"#,
            r#"[["SFO", 1]]"#,
            r#"[["SFO", null]]"#,
            r#"[["SFO", "EWR"]"#,
        ];
        for body in bodies {
            assert!(
                matches!(decode_flights(body.as_bytes()), Err(DecodeError::Syntax(_))),
                "body should be rejected: {body:?}"
            );
        }
    }

    #[test]
    fn rejects_empty_codes() {
        match decode_flights(br#"[["SFO", "ATL"], ["ATL", ""]]"#) {
            Err(DecodeError::EmptyAirport { index, from, to }) => {
                assert_eq!(index, 1);
                assert_eq!(from, "ATL");
                assert_eq!(to, "");
            }
            other => panic!("expected EmptyAirport, got: {other:?}"),
        }
    }
}

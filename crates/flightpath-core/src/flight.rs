//! # Airports and Flights
//!
//! [`Airport`] is a newtype over the airport code so that codes cannot be
//! confused with other strings. [`Flight`] is one directed segment between two
//! airports.
//!
//! Both types serialize to the shapes used on the wire: an airport is a plain
//! JSON string and a flight is a two-element array `["SFO", "EWR"]`.

use serde::{Deserialize, Serialize};

/// Opaque airport identifier, e.g. `"SFO"`.
///
/// The code is compared by exact value. Non-emptiness is checked where input
/// enters the system, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Airport(String);

impl Airport {
    /// Wrap an airport code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Access the airport code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Airport {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Airport {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Airport {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single flight from one airport to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Airport; 2]", into = "[Airport; 2]")]
pub struct Flight {
    /// Departure airport.
    pub from: Airport,
    /// Arrival airport.
    pub to: Airport,
}

impl Flight {
    /// Build a flight between two airports.
    pub fn new(from: impl Into<Airport>, to: impl Into<Airport>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl From<[Airport; 2]> for Flight {
    fn from([from, to]: [Airport; 2]) -> Self {
        Self { from, to }
    }
}

impl From<Flight> for [Airport; 2] {
    fn from(flight: Flight) -> Self {
        [flight.from, flight.to]
    }
}

impl std::fmt::Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

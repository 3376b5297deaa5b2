//! # Route Calculation
//!
//! `POST /calculate` accepts `[[from, to], ...]` and answers with the
//! traveler's overall `[origin, destination]`.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::routing::post;
use axum::{Json, Router};
use flightpath_core::Flight;

use crate::codec::decode_flights;
use crate::error::AppError;
use crate::extractors::extract_body;

/// Build the calculation router.
pub fn router() -> Router {
    Router::new().route("/calculate", post(calculate))
}

/// POST /calculate — Reduce a flight list to a single route.
async fn calculate(body: Result<Bytes, BytesRejection>) -> Result<Json<Flight>, AppError> {
    let body = extract_body(body).map_err(|err| {
        tracing::warn!(error = %err, "failed to read request body");
        err
    })?;

    let flights = decode_flights(&body).map_err(|err| {
        tracing::warn!(error = %err, body = %String::from_utf8_lossy(&body), "unmarshal");
        AppError::from(err)
    })?;

    let route = flightpath_core::calculate(&flights).map_err(|err| {
        tracing::warn!(error = %err, flights = %Itinerary(&flights), "calculate");
        AppError::from(err)
    })?;

    tracing::info!(flights = %Itinerary(&flights), route = %route, "calculated route");
    Ok(Json(route))
}

/// Log formatting for a flight list: `[IND->EWR SFO->ATL]`.
struct Itinerary<'a>(&'a [Flight]);

impl std::fmt::Display for Itinerary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, flight) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{flight}")?;
        }
        f.write_str("]")
    }
}

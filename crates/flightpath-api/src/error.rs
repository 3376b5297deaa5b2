//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps codec and reduction errors to HTTP status codes with a JSON body
//! carrying a machine-readable code and a message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flightpath_core::PathError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::DecodeError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "BAD_REQUEST", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be decoded into flights (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Flights decoded but do not reduce to a route (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body exceeds the configured limit (413).
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<PathError> for AppError {
    fn from(err: PathError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            (
                AppError::Validation("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
            ),
            (
                AppError::PayloadTooLarge("x".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (status, code), "{err:?}");
        }
    }

    #[test]
    fn path_error_converts_to_validation() {
        let app_err = AppError::from(PathError::Empty);
        match &app_err {
            AppError::Validation(msg) => assert!(msg.contains("no flights"), "got: {msg}"),
            other => panic!("expected Validation, got: {other:?}"),
        }
    }

    #[test]
    fn decode_error_converts_to_bad_request() {
        let decode_err = crate::codec::decode_flights(b"{}").unwrap_err();
        assert!(matches!(AppError::from(decode_err), AppError::BadRequest(_)));
    }

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_validation() {
        let (status, body) = response_parts(AppError::from(PathError::Empty)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("no flights supplied"));
    }

    #[tokio::test]
    async fn into_response_bad_request() {
        let (status, body) = response_parts(AppError::BadRequest("malformed".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.code, "BAD_REQUEST");
        assert_eq!(body.error.message, "bad request: malformed");
    }
}

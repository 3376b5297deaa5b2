//! # Body Extraction
//!
//! Handlers take the raw body as `Result<Bytes, BytesRejection>` so that
//! rejections become [`AppError`] values with the structured error body
//! instead of Axum's plain-text defaults.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;

use crate::error::AppError;

/// Unwrap a buffered body, mapping the size limit to [`AppError::PayloadTooLarge`]
/// and any other read failure (including a read timeout) to [`AppError::BadRequest`].
///
/// ```ignore
/// async fn handler(body: Result<Bytes, BytesRejection>) -> Result<..., AppError> {
///     let bytes = extract_body(body)?;
///     // decode bytes...
/// }
/// ```
pub fn extract_body(result: Result<Bytes, BytesRejection>) -> Result<Bytes, AppError> {
    result.map_err(|err| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::BadRequest(err.body_text())
        }
    })
}

//! Mapping application errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use wallet_shared::AppError;

/// Renders `err` as a JSON response.
///
/// Validation failures use `{"message": ...}`; everything else uses
/// `{"error": ..., "code": ...}`. Server errors are logged at `error` level,
/// client errors at `debug`.
pub fn error_response(err: &AppError) -> Response {
    if err.is_server_error() {
        tracing::error!(error = %err, code = err.error_code(), "Request failed");
    } else {
        tracing::debug!(error = %err, code = err.error_code(), "Request rejected");
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        AppError::Unacceptable(message) => json!({ "message": message }),
        other => json!({
            "error": other.to_string(),
            "code": other.error_code()
        }),
    };

    (status, Json(body)).into_response()
}

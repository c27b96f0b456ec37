//! HTTP error mapping.
//!
//! Every error leaving the service is a JSON object with a single `error`
//! field, matching what the front-end client parses. Validation problems
//! from the core map to 400; anything else is a 500 with a generic message
//! (the detail goes to the log, not the client).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use plafond_core::CalcError;

/// An error response: HTTP status plus client-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client-input problem (400)
    BadRequest(String),
    /// Unknown endpoint (404)
    NotFound(String),
    /// Unexpected fault (500)
    Internal(String),
}

impl ApiError {
    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        if err.is_validation() {
            ApiError::BadRequest(err.to_string())
        } else {
            tracing::error!(error = %err, code = err.error_code(), "calculation fault");
            ApiError::Internal("Server error".to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        let err = ApiError::from(CalcError::system_not_found("900x900"));
        assert_eq!(err, ApiError::BadRequest("Unknown system: 900x900".to_string()));
    }

    #[test]
    fn test_faults_map_to_500_with_generic_message() {
        let err = ApiError::from(CalcError::calculation_failed("takeoff", "overflow"));
        assert_eq!(err, ApiError::Internal("Server error".to_string()));
    }
}

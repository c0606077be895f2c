//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the single error type of the service. Each variant maps
//! to an HTTP status and a string error code, and renders as the failure
//! envelope:
//!
//! ```json
//! {
//!   "success": false,
//!   "error": { "code": "NOT_FOUND", "message": "Endpoint /nope not found" },
//!   "timestamp": "2024-12-10T10:00:00.000Z"
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::enums::UnknownCode;
use crate::domain::timestamp::now_iso8601;

/// Message sent for every internal failure. Details are only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failure envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Structured error payload.
    pub error: ErrorBody,
    /// Response time (ISO-8601, millisecond precision).
    pub timestamp: String,
}

impl ErrorResponse {
    /// Builds a failure envelope stamped with the current time.
    #[must_use]
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
            timestamp: now_iso8601(),
        }
    }
}

/// Inner error body with string code and human-readable message.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// One of `NOT_FOUND`, `VALIDATION_ERROR`, `INTERNAL_ERROR`.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Code               | HTTP Status               |
/// |--------------------|---------------------------|
/// | `NOT_FOUND`        | 404 Not Found             |
/// | `VALIDATION_ERROR` | 400 Bad Request           |
/// | `INTERNAL_ERROR`   | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A fixture record with the given id does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of record looked up.
        entity: &'static str,
        /// Identifier as supplied by the client.
        id: String,
    },

    /// No route matches the request path.
    #[error("Endpoint {0} not found")]
    RouteNotFound(String),

    /// An enum code is outside its table.
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    /// The request body or query is malformed.
    #[error("{0}")]
    Validation(String),

    /// Unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for [`ApiError::NotFound`].
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Returns the string error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::RouteNotFound(_) | Self::UnknownCode(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::RouteNotFound(_) | Self::UnknownCode(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorResponse::new(self.error_code(), message);
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::enums::EnumDomain;

    #[test]
    fn status_and_code_mapping() {
        let cases = [
            (ApiError::not_found("campaign", "x"), 404, "NOT_FOUND"),
            (ApiError::RouteNotFound("/nope".into()), 404, "NOT_FOUND"),
            (ApiError::Validation("bad".into()), 400, "VALIDATION_ERROR"),
            (ApiError::Internal("boom".into()), 500, "INTERNAL_ERROR"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_code().as_u16(), status);
            assert_eq!(err.error_code(), code);
        }
    }

    #[test]
    fn unknown_code_is_not_found() {
        let Err(miss) = EnumDomain::Complexity.label(4) else {
            panic!("code 4 is outside Complexity");
        };
        let err = ApiError::from(miss);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "unknown Complexity code 4");
    }

    #[test]
    fn route_message_names_path() {
        let err = ApiError::RouteNotFound("/api/unknown".into());
        assert_eq!(err.to_string(), "Endpoint /api/unknown not found");
    }

    #[test]
    fn failure_envelope_shape() {
        let Ok(json) = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "gone")) else {
            panic!("serializable");
        };
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "gone");
        assert!(json.get("data").is_none());
        assert!(json["timestamp"].is_string());
    }
}

//! Success envelope wrapped around every `/api` payload.
//!
//! Failures use [`crate::error::ErrorResponse`]. The two shapes are distinct
//! types, so a success never carries `error` and a failure never carries
//! `data`.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::timestamp::now_iso8601;

/// `{ "success": true, "data": ..., "timestamp": ... }`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Endpoint payload.
    pub data: T,
    /// Response time (ISO-8601, millisecond precision).
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// Wraps `data`, stamping the current time.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: now_iso8601(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn success_envelope_shape() {
        let Ok(json) = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])) else {
            panic!("serializable");
        };
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("error").is_none());

        let Some(ts) = json["timestamp"].as_str() else {
            panic!("timestamp is a string");
        };
        let Ok(at) = DateTime::parse_from_rfc3339(ts) else {
            panic!("ISO-8601 timestamp");
        };
        let skew = Utc::now().signed_duration_since(at.with_timezone(&Utc));
        assert!(skew.num_seconds().abs() < 5);
        assert!(ts.ends_with('Z'));
    }
}

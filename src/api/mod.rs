//! REST API layer: route handlers, DTOs, envelopes and router composition.
//!
//! [`build_app`] assembles the complete service: every resource route, the
//! enveloped 404 fallback, panic recovery, request tracing and permissive
//! CORS.

pub mod dto;
pub mod envelope;
pub mod extract;
pub mod handlers;

use std::any::Any;

use axum::Router;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Builds the application router with all endpoints and middleware.
pub fn build_app(state: AppState) -> Router {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        router.merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::doc::ApiDoc::openapi()),
        )
    };

    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::routing::get;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::FixtureStore;
    use crate::service::MarketplaceService;

    fn app() -> Router {
        let service = MarketplaceService::new(Arc::new(FixtureStore::new()), Some(7));
        build_app(AppState::new(service))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let Ok(response) = router.oneshot(request).await else {
            panic!("router is infallible");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body readable");
        };
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("JSON body: {}", String::from_utf8_lossy(&bytes));
        };
        (status, json)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("valid request");
        };
        send(app(), request).await
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let Ok(request) = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("valid request");
        };
        send(app(), request).await
    }

    #[tokio::test]
    async fn unmatched_route_is_enveloped_404() {
        let (status, json) = get_json("/api/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(
            json["error"]["message"],
            "Endpoint /api/does-not-exist not found"
        );
    }

    #[tokio::test]
    async fn unmatched_method_is_enveloped_404() {
        let (status, json) = post_json("/health", "{}").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["message"], "Endpoint /health not found");
    }

    #[tokio::test]
    async fn trailing_slash_is_a_distinct_path() {
        let (status, json) = get_json("/api/creator/campaigns/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json["error"]["message"],
            "Endpoint /api/creator/campaigns/ not found"
        );
    }

    #[tokio::test]
    async fn health_is_not_enveloped() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert!(json.get("success").is_none());
    }

    #[tokio::test]
    async fn enum_lookups() {
        let (status, json) = get_json("/api/enums/focusarea/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["label"], "DeFi");

        let (status, json) = get_json("/api/enums/Complexity/4").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["message"], "unknown Complexity code 4");

        let (status, json) = get_json("/api/enums/Complexity/high").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = get_json("/api/enums/Colour").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn fee_estimate() {
        let (status, json) = post_json(
            "/api/project/fees/estimate",
            r#"{"campaignBudget":5000,"useAW3Token":true}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["totalFee"], 250.0);
        assert_eq!(json["data"]["totalRequired"], 5250.0);
    }

    #[tokio::test]
    async fn malformed_body_is_validation_error() {
        let (status, json) =
            post_json("/api/project/fees/estimate", r#"{"useAW3Token":true}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn marketplace_filter_counts_matches() {
        let (status, json) =
            get_json("/api/public/marketplace/campaigns?category=DeFi&size=20").await;
        assert_eq!(status, StatusCode::OK);
        let pagination = &json["data"]["pagination"];
        assert_eq!(pagination["totalElements"], 1);
        assert_eq!(pagination["totalPages"], 1);
        assert_eq!(pagination["currentPage"], 0);
    }

    #[tokio::test]
    async fn panics_become_internal_errors() {
        async fn boom() -> &'static str {
            panic!("fixture exploded")
        }
        let router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));
        let Ok(request) = Request::builder().uri("/boom").body(Body::empty()) else {
            panic!("valid request");
        };
        let (status, json) = send(router, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "Internal server error");
    }
}

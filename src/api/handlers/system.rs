//! System endpoints: service index, health check and the OpenAPI document.
//!
//! These responses are plain JSON or YAML, not enveloped.

use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::app_state::AppState;
use crate::doc::ApiDoc;
use crate::domain::timestamp::now_iso8601;
use crate::error::{ApiError, ErrorResponse};

/// Where the OpenAPI document is served.
#[derive(Debug, Serialize, ToSchema)]
struct SwaggerLinks {
    yaml: &'static str,
    json: &'static str,
    ui: &'static str,
}

/// Documentation and health links.
#[derive(Debug, Serialize, ToSchema)]
struct EndpointIndex {
    swagger: SwaggerLinks,
    health: &'static str,
}

/// Service index.
#[derive(Debug, Serialize, ToSchema)]
struct RootInfo {
    name: &'static str,
    version: &'static str,
    documentation: &'static str,
    endpoints: EndpointIndex,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// `GET /`: Service name, version and documentation links.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Service index",
    responses((status = 200, description = "Service index", body = RootInfo))
)]
pub async fn root_handler() -> impl IntoResponse {
    Json(RootInfo {
        name: "AW3 Platform Mock API",
        version: env!("CARGO_PKG_VERSION"),
        documentation: "/docs",
        endpoints: EndpointIndex {
            swagger: SwaggerLinks {
                yaml: "/swagger.yaml",
                json: "/swagger.json",
                ui: "/docs",
            },
            health: "/health",
        },
    })
}

/// `GET /health`: Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns `ok` and the current timestamp.",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        timestamp: now_iso8601(),
    })
}

/// `GET /swagger.json`: OpenAPI document as JSON.
#[utoipa::path(
    get,
    path = "/swagger.json",
    tag = "System",
    summary = "OpenAPI document (JSON)",
    responses((status = 200, description = "OpenAPI 3.1 document", content_type = "application/json"))
)]
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// `GET /swagger.yaml`: OpenAPI document as YAML.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] if the document cannot be rendered.
#[utoipa::path(
    get,
    path = "/swagger.yaml",
    tag = "System",
    summary = "OpenAPI document (YAML)",
    responses(
        (status = 200, description = "OpenAPI 3.1 document", content_type = "application/yaml"),
        (status = 500, description = "Rendering failed", body = ErrorResponse),
    )
)]
pub async fn openapi_yaml() -> Result<impl IntoResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("openapi yaml: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/swagger.json", get(openapi_json))
        .route("/swagger.yaml", get(openapi_yaml))
}

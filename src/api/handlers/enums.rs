//! Lookup table handlers.

use axum::Router;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::api::dto::{EnumEntry, EnumTable};
use crate::api::envelope::ApiResponse;
use crate::app_state::AppState;
use crate::domain::enums::{EnumDomain, UnknownCode};
use crate::error::{ApiError, ErrorResponse};

fn parse_domain(raw: &str) -> Result<EnumDomain, ApiError> {
    raw.parse::<EnumDomain>()
        .map_err(|_| ApiError::not_found("enum domain", raw))
}

/// `GET /api/enums`: Every lookup table.
#[utoipa::path(
    get,
    path = "/api/enums",
    tag = "Enums",
    summary = "List lookup tables",
    responses((status = 200, description = "All tables", body = ApiResponse<Vec<EnumTable>>))
)]
pub async fn list_tables() -> impl IntoResponse {
    let tables: Vec<EnumTable> = EnumDomain::ALL.into_iter().map(EnumTable::from).collect();
    ApiResponse::ok(tables)
}

/// `GET /api/enums/{domain}`: One lookup table.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown domain.
#[utoipa::path(
    get,
    path = "/api/enums/{domain}",
    tag = "Enums",
    summary = "Get a lookup table",
    params(("domain" = String, Path, description = "Domain name, case-insensitive, e.g. `FocusArea`")),
    responses(
        (status = 200, description = "Table", body = ApiResponse<EnumTable>),
        (status = 404, description = "Unknown domain", body = ErrorResponse),
    )
)]
pub async fn get_table(Path(domain): Path<String>) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(EnumTable::from(parse_domain(&domain)?)))
}

/// `GET /api/enums/{domain}/{code}`: One label.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on an unknown domain or code and
/// [`ApiError::Validation`] when `code` is not an integer.
#[utoipa::path(
    get,
    path = "/api/enums/{domain}/{code}",
    tag = "Enums",
    summary = "Look up a label",
    params(
        ("domain" = String, Path, description = "Domain name, case-insensitive"),
        ("code" = i64, Path, description = "Numeric code"),
    ),
    responses(
        (status = 200, description = "Entry", body = ApiResponse<EnumEntry>),
        (status = 400, description = "Code is not an integer", body = ErrorResponse),
        (status = 404, description = "Unknown domain or code", body = ErrorResponse),
    )
)]
pub async fn lookup(
    Path((domain, code)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let domain = parse_domain(&domain)?;
    let code: i64 = code
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("code must be an integer, got {code}")))?;
    let (code, label) = domain
        .entries()
        .find(|(c, _)| i64::from(*c) == code)
        .ok_or(UnknownCode { domain, code })?;
    Ok(ApiResponse::ok(EnumEntry {
        code,
        label: label.to_string(),
    }))
}

/// Lookup table routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/enums", get(list_tables))
        .route("/api/enums/{domain}", get(get_table))
        .route("/api/enums/{domain}/{code}", get(lookup))
}

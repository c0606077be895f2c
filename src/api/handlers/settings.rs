//! Creator settings handlers.
//!
//! `GET` returns the stored defaults; `POST` echoes the supplied fields
//! over them. Nothing is persisted.

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::api::dto::{
    LanguageSettings, LanguageSettingsUpdate, NotificationSettings, NotificationSettingsUpdate,
    PrivacySettings, PrivacySettingsUpdate, RateSettings, RateSettingsUpdate, SecuritySettings,
    SecuritySettingsUpdate,
};
use crate::api::envelope::ApiResponse;
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /api/creator/settings/language`
#[utoipa::path(
    get,
    path = "/api/creator/settings/language",
    tag = "Settings",
    summary = "Get language settings",
    responses((status = 200, description = "Language settings", body = ApiResponse<LanguageSettings>))
)]
pub async fn get_language() -> impl IntoResponse {
    ApiResponse::ok(LanguageSettings::default())
}

/// `POST /api/creator/settings/language`
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/creator/settings/language",
    tag = "Settings",
    summary = "Update language settings",
    request_body = LanguageSettingsUpdate,
    responses(
        (status = 200, description = "Updated settings", body = ApiResponse<LanguageSettings>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn update_language(
    ApiJson(update): ApiJson<LanguageSettingsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(update.apply()))
}

/// `GET /api/creator/settings/rate`
#[utoipa::path(
    get,
    path = "/api/creator/settings/rate",
    tag = "Settings",
    summary = "Get rate settings",
    responses((status = 200, description = "Rate settings", body = ApiResponse<RateSettings>))
)]
pub async fn get_rate() -> impl IntoResponse {
    ApiResponse::ok(RateSettings::default())
}

/// `POST /api/creator/settings/rate`
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/creator/settings/rate",
    tag = "Settings",
    summary = "Update rate settings",
    request_body = RateSettingsUpdate,
    responses(
        (status = 200, description = "Updated settings", body = ApiResponse<RateSettings>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn update_rate(
    ApiJson(update): ApiJson<RateSettingsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(update.apply()))
}

/// `GET /api/creator/settings/notification`
#[utoipa::path(
    get,
    path = "/api/creator/settings/notification",
    tag = "Settings",
    summary = "Get notification settings",
    responses((status = 200, description = "Notification settings", body = ApiResponse<NotificationSettings>))
)]
pub async fn get_notification() -> impl IntoResponse {
    ApiResponse::ok(NotificationSettings::default())
}

/// `POST /api/creator/settings/notification`
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/creator/settings/notification",
    tag = "Settings",
    summary = "Update notification settings",
    request_body = NotificationSettingsUpdate,
    responses(
        (status = 200, description = "Updated settings", body = ApiResponse<NotificationSettings>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn update_notification(
    ApiJson(update): ApiJson<NotificationSettingsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(update.apply()))
}

/// `GET /api/creator/settings/privacy`
#[utoipa::path(
    get,
    path = "/api/creator/settings/privacy",
    tag = "Settings",
    summary = "Get privacy settings",
    responses((status = 200, description = "Privacy settings", body = ApiResponse<PrivacySettings>))
)]
pub async fn get_privacy() -> impl IntoResponse {
    ApiResponse::ok(PrivacySettings::default())
}

/// `POST /api/creator/settings/privacy`
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/creator/settings/privacy",
    tag = "Settings",
    summary = "Update privacy settings",
    request_body = PrivacySettingsUpdate,
    responses(
        (status = 200, description = "Updated settings", body = ApiResponse<PrivacySettings>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn update_privacy(
    ApiJson(update): ApiJson<PrivacySettingsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(update.apply()))
}

/// `GET /api/creator/settings/security`
#[utoipa::path(
    get,
    path = "/api/creator/settings/security",
    tag = "Settings",
    summary = "Get security settings",
    description = "Includes the trusted device the current session signed in from.",
    responses((status = 200, description = "Security settings", body = ApiResponse<SecuritySettings>))
)]
pub async fn get_security() -> impl IntoResponse {
    ApiResponse::ok(SecuritySettings::current())
}

/// `POST /api/creator/settings/security`
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/creator/settings/security",
    tag = "Settings",
    summary = "Update security settings",
    request_body = SecuritySettingsUpdate,
    responses(
        (status = 200, description = "Updated settings", body = ApiResponse<SecuritySettings>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn update_security(
    ApiJson(update): ApiJson<SecuritySettingsUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(ApiResponse::ok(update.apply()))
}

/// Settings routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/creator/settings/language",
            get(get_language).post(update_language),
        )
        .route("/api/creator/settings/rate", get(get_rate).post(update_rate))
        .route(
            "/api/creator/settings/notification",
            get(get_notification).post(update_notification),
        )
        .route(
            "/api/creator/settings/privacy",
            get(get_privacy).post(update_privacy),
        )
        .route(
            "/api/creator/settings/security",
            get(get_security).post(update_security),
        )
}

//! Wallet authentication handlers. Tokens are opaque mock strings.

use axum::Router;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use chrono::Utc;
use uuid::Uuid;

use crate::api::dto::{
    MessageResponse, NonceResponse, RefreshedToken, RegisterRequest, Registration,
    SessionTokens, SessionUser, VerifySignatureRequest, WalletChallenge, WalletConnectRequest,
};
use crate::api::envelope::ApiResponse;
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// Lifetime of an access token, in seconds.
const ACCESS_TOKEN_TTL_SECS: u32 = 3600;
/// Lifetime of a sign-in challenge, in milliseconds.
const CHALLENGE_TTL_MS: i64 = 300_000;
/// Chain assumed when the wallet does not report one.
const DEFAULT_CHAIN_ID: u64 = 1;

fn mock_token(kind: &str) -> String {
    format!("mock_{kind}_token_{}", Uuid::new_v4())
}

/// `POST /api/auth/wallet-connect`: Issue a sign-in challenge.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a blank address or unknown wallet type.
#[utoipa::path(
    post,
    path = "/api/auth/wallet-connect",
    tag = "Auth",
    summary = "Start wallet sign-in",
    description = "Returns a nonce and the message the wallet must sign. The challenge expires after five minutes.",
    request_body = WalletConnectRequest,
    responses(
        (status = 200, description = "Challenge issued", body = ApiResponse<WalletChallenge>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn wallet_connect(
    ApiJson(req): ApiJson<WalletConnectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    let nonce = Uuid::new_v4();
    let chain_id = req.chain_id.unwrap_or(DEFAULT_CHAIN_ID);
    let message = format!(
        "Welcome to AW3 Platform!\n\nSign this message to authenticate.\n\nWallet: {}\nChain ID: {chain_id}\nNonce: {nonce}",
        req.wallet_address
    );
    tracing::debug!(wallet = %req.wallet_address, chain_id, "wallet challenge issued");
    Ok(ApiResponse::ok(WalletChallenge {
        wallet_address: req.wallet_address,
        nonce,
        message,
        expires_at: Utc::now().timestamp_millis() + CHALLENGE_TTL_MS,
    }))
}

/// `POST /api/auth/verify-signature`: Exchange a signed challenge for tokens.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] if any field is blank.
#[utoipa::path(
    post,
    path = "/api/auth/verify-signature",
    tag = "Auth",
    summary = "Verify wallet signature",
    description = "Accepts any non-empty signature and returns a session for the demo creator.",
    request_body = VerifySignatureRequest,
    responses(
        (status = 200, description = "Session issued", body = ApiResponse<SessionTokens>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn verify_signature(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<VerifySignatureRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    let creator = &state.service.fixtures().creator;
    Ok(ApiResponse::ok(SessionTokens {
        access_token: mock_token("access"),
        refresh_token: mock_token("refresh"),
        token_type: "Bearer".to_string(),
        expires_in: ACCESS_TOKEN_TTL_SECS,
        user: SessionUser {
            user_id: creator.user_id,
            wallet_address: req.wallet_address,
            role: 1,
            display_name: creator.display_name.clone(),
            profile_complete: creator.profile_complete,
        },
    }))
}

/// `POST /api/auth/register`: Register a wallet with a role.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on a blank address or unknown role.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    summary = "Register a wallet",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<Registration>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn register(
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;
    let registration = Registration {
        user_id: Uuid::new_v4(),
        wallet_address: req.wallet_address,
        role: req.role,
        access_token: mock_token("access"),
        refresh_token: mock_token("refresh"),
        expires_in: ACCESS_TOKEN_TTL_SECS,
        profile_complete: false,
        next_steps: vec![
            "Complete profile".to_string(),
            "Verify social accounts".to_string(),
            "Browse campaigns".to_string(),
        ],
    };
    tracing::info!(user_id = %registration.user_id, role = registration.role, "wallet registered");
    Ok(ApiResponse::ok(registration))
}

/// `POST /api/auth/refresh`: Issue a fresh access token.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "Auth",
    summary = "Refresh access token",
    responses(
        (status = 200, description = "Token refreshed", body = ApiResponse<RefreshedToken>),
    )
)]
pub async fn refresh() -> impl IntoResponse {
    ApiResponse::ok(RefreshedToken {
        access_token: mock_token("access"),
        expires_in: ACCESS_TOKEN_TTL_SECS,
    })
}

/// `POST /api/auth/logout`: End the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    summary = "Log out",
    responses(
        (status = 200, description = "Session ended", body = ApiResponse<MessageResponse>),
    )
)]
pub async fn logout() -> impl IntoResponse {
    ApiResponse::ok(MessageResponse::new("Logged out successfully"))
}

/// `GET /api/auth/nonce/{walletAddress}`: Issue a bare nonce.
#[utoipa::path(
    get,
    path = "/api/auth/nonce/{walletAddress}",
    tag = "Auth",
    summary = "Get a sign-in nonce",
    params(("walletAddress" = String, Path, description = "Wallet address")),
    responses(
        (status = 200, description = "Nonce issued", body = ApiResponse<NonceResponse>),
    )
)]
pub async fn nonce(Path(wallet_address): Path<String>) -> impl IntoResponse {
    ApiResponse::ok(NonceResponse {
        wallet_address,
        nonce: Uuid::new_v4(),
    })
}

/// Authentication routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/wallet-connect", post(wallet_connect))
        .route("/api/auth/verify-signature", post(verify_signature))
        .route("/api/auth/register", post(register))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/nonce/{walletAddress}", get(nonce))
}

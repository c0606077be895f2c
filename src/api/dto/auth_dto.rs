//! Wallet authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::common_dto::{check_code, require_text};
use crate::domain::enums::EnumDomain;
use crate::error::ApiError;

/// Request body for `POST /api/auth/wallet-connect`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnectRequest {
    /// Wallet address to authenticate.
    pub wallet_address: String,
    /// EVM chain id. Defaults to 1.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// `WalletType` code.
    #[serde(default)]
    pub wallet_type: Option<u8>,
}

impl WalletConnectRequest {
    /// Validates the address and wallet type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a blank address or unknown type.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("walletAddress", &self.wallet_address)?;
        if let Some(code) = self.wallet_type {
            check_code("walletType", EnumDomain::WalletType, code)?;
        }
        Ok(())
    }
}

/// Sign-in challenge.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletChallenge {
    /// Wallet address echoed from the request.
    pub wallet_address: String,
    /// Single-use nonce.
    pub nonce: Uuid,
    /// Message the wallet must sign; embeds the nonce.
    pub message: String,
    /// Challenge expiry (Unix milliseconds).
    pub expires_at: i64,
}

/// Request body for `POST /api/auth/verify-signature`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifySignatureRequest {
    /// Signing wallet.
    pub wallet_address: String,
    /// Signature over the challenge message.
    pub signature: String,
    /// Nonce from the challenge.
    pub nonce: String,
}

impl VerifySignatureRequest {
    /// Validates that every field is present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on any blank field.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("walletAddress", &self.wallet_address)?;
        require_text("signature", &self.signature)?;
        require_text("nonce", &self.nonce)
    }
}

/// User summary returned on sign-in.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// User identifier.
    pub user_id: Uuid,
    /// Wallet address.
    pub wallet_address: String,
    /// `UserRole` code.
    pub role: u8,
    /// Display name.
    pub display_name: String,
    /// Onboarding finished.
    pub profile_complete: bool,
}

/// Issued token pair.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    /// Bearer access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: u32,
    /// Signed-in user.
    pub user: SessionUser,
}

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Wallet address to register.
    pub wallet_address: String,
    /// `UserRole` code.
    pub role: u8,
    /// Terms of service accepted.
    #[serde(default)]
    pub terms_accepted: bool,
}

impl RegisterRequest {
    /// Validates the address and role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a blank address or unknown role.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("walletAddress", &self.wallet_address)?;
        check_code("role", EnumDomain::UserRole, self.role)
    }
}

/// Newly registered account.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// User identifier.
    pub user_id: Uuid,
    /// Wallet address.
    pub wallet_address: String,
    /// `UserRole` code.
    pub role: u8,
    /// Bearer access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u32,
    /// Always `false` for a new account.
    pub profile_complete: bool,
    /// Suggested onboarding steps.
    pub next_steps: Vec<String>,
}

/// Refreshed access token.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedToken {
    /// Bearer access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u32,
}

/// Fresh nonce for a wallet.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NonceResponse {
    /// Wallet address from the path.
    pub wallet_address: String,
    /// Single-use nonce.
    pub nonce: Uuid,
}

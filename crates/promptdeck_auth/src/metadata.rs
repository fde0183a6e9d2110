// --- File: crates/promptdeck_auth/src/metadata.rs ---
use promptdeck_common::HTTP_CLIENT;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::AuthSetupError;

/// Provider endpoint returning the public key used to sign access tokens.
pub const TOKEN_VERIFICATION_METADATA_PATH: &str = "/api/v1/token_verification_metadata";

#[derive(Debug, Clone, Deserialize)]
pub struct TokenVerificationMetadata {
    pub verifier_key_pem: String,
}

/// Fetches the verifier key from the auth provider using the backend API key.
pub async fn fetch_token_verification_metadata(
    auth_url: &str,
    api_key: &str,
) -> Result<TokenVerificationMetadata, AuthSetupError> {
    let url = format!(
        "{}{}",
        auth_url.trim_end_matches('/'),
        TOKEN_VERIFICATION_METADATA_PATH
    );
    info!("Fetching token verification metadata from {}", url);

    let response = HTTP_CLIENT.get(&url).bearer_auth(api_key).send().await?;

    if !response.status().is_success() {
        let status_code = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        error!(
            "Token verification metadata request failed ({}): {}",
            status_code, message
        );
        return Err(AuthSetupError::ApiError {
            status_code,
            message,
        });
    }

    Ok(response.json::<TokenVerificationMetadata>().await?)
}

// --- File: crates/promptdeck_auth/src/validator.rs ---
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use promptdeck_common::{AuthError, BoxFuture, OrgAccessValidator, UserWithOrg};
use promptdeck_config::AuthConfig;
use tracing::{debug, info};

use crate::claims::AccessTokenClaims;
use crate::error::AuthSetupError;
use crate::metadata::fetch_token_verification_metadata;
use crate::token::extract_bearer_token;

/// Verifies provider-issued access tokens locally (RS256) and checks org membership.
pub struct PropelAuthValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl PropelAuthValidator {
    /// Builds a validator from a PEM encoded RSA public key.
    ///
    /// Literal `\n` sequences (as found in single-line env vars) are turned
    /// into newlines. A trailing `/` on the issuer is ignored.
    pub fn new(verifier_key_pem: &str, issuer: &str) -> Result<Self, AuthSetupError> {
        let pem = verifier_key_pem.replace("\\n", "\n");
        let decoding_key = DecodingKey::from_rsa_pem(pem.trim().as_bytes())
            .map_err(|e| AuthSetupError::InvalidVerifierKey(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer.trim_end_matches('/')]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.validate_aud = false;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Builds a validator from config, fetching the verifier key from the
    /// provider when none is configured.
    pub async fn from_config(config: &AuthConfig) -> Result<Self, AuthSetupError> {
        let verifier_key = match config.verifier_key.as_deref().filter(|k| !k.trim().is_empty()) {
            Some(key) => key.to_string(),
            None => {
                let api_key = config
                    .api_key
                    .as_deref()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| {
                        AuthSetupError::MissingConfig(
                            "auth.verifier_key or auth.api_key must be set".to_string(),
                        )
                    })?;
                fetch_token_verification_metadata(&config.auth_url, api_key)
                    .await?
                    .verifier_key_pem
            }
        };

        info!("Access token validator configured for issuer {}", config.issuer());
        Self::new(&verifier_key, config.issuer())
    }

    /// Validates the `Authorization` header value and returns the token claims.
    pub fn validate_access_token(
        &self,
        authorization_header: &str,
    ) -> Result<AccessTokenClaims, AuthError> {
        let token = extract_bearer_token(authorization_header)?;

        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "Access token expired",
                    ErrorKind::InvalidIssuer => "Access token issuer mismatch",
                    ErrorKind::InvalidSignature => "Access token signature invalid",
                    _ => "Access token invalid",
                };
                debug!("{}: {}", reason, e);
                AuthError::Unauthorized(reason.to_string())
            })
    }

    /// Validates the token and requires membership in `org_id`.
    pub fn validate_org_access(
        &self,
        authorization_header: &str,
        org_id: &str,
    ) -> Result<UserWithOrg, AuthError> {
        let mut claims = self.validate_access_token(authorization_header)?;

        let Some(org_member_info) = claims.org_id_to_org_member_info.remove(org_id) else {
            debug!("User {} is not a member of org {}", claims.user_id, org_id);
            return Err(AuthError::Forbidden(format!(
                "User is not a member of organization {}",
                org_id
            )));
        };

        Ok(UserWithOrg {
            user: claims.user(),
            org_member_info,
        })
    }
}

impl OrgAccessValidator for PropelAuthValidator {
    fn validate_access_token_and_get_user_with_org_info<'a>(
        &'a self,
        authorization_header: &'a str,
        org_id: &'a str,
    ) -> BoxFuture<'a, UserWithOrg, AuthError> {
        Box::pin(async move { self.validate_org_access(authorization_header, org_id) })
    }
}

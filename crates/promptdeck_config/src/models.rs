// --- File: crates/promptdeck_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_STRIPE_API_BASE_URL: &str = "https://api.stripe.com";
pub const DEFAULT_SETTINGS_PATH: &str = "/app/settings";

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public origin used for checkout redirects, e.g. `https://app.example.com`.
    /// When unset the origin is derived from the incoming request.
    #[serde(default)]
    pub public_url: Option<String>,
}

// --- Auth Provider Config ---
// Secrets are injected from env vars through the `secret_from_env` marker.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Base URL of the auth provider (PUBLIC_AUTH_URL).
    pub auth_url: String,
    /// Backend API key (PROPELAUTH_API_KEY). Only needed to fetch the
    /// verifier key when `verifier_key` is unset.
    #[serde(default)]
    pub api_key: Option<String>,
    /// PEM encoded RSA public key used to verify access tokens (PROPELAUTH_VERIFIER_KEY).
    /// When unset it is fetched from the provider with `api_key` at startup.
    #[serde(default)]
    pub verifier_key: Option<String>,
    /// Expected `iss` claim; falls back to `auth_url`.
    #[serde(default)]
    pub issuer: Option<String>,
}

impl AuthConfig {
    pub fn issuer(&self) -> &str {
        self.issuer.as_deref().unwrap_or(&self.auth_url)
    }
}

// --- Stripe Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StripeConfig {
    /// STRIPE_SECRET_KEY
    #[serde(default)]
    pub secret_key: Option<String>,
    /// STRIPE_PRICE_ID, the subscription price used for the single line item.
    #[serde(default)]
    pub price_id: Option<String>,
    #[serde(default = "default_stripe_api_base_url")]
    pub api_base_url: String,
    /// Path (relative to the app origin) used as success and cancel URL.
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
}

impl StripeConfig {
    /// Returns `(secret_key, price_id)` when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let secret_key = self.secret_key.as_deref().filter(|s| !s.trim().is_empty())?;
        let price_id = self.price_id.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((secret_key, price_id))
    }
}

fn default_stripe_api_base_url() -> String {
    DEFAULT_STRIPE_API_BASE_URL.to_string()
}

fn default_settings_path() -> String {
    DEFAULT_SETTINGS_PATH.to_string()
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // DATABASE_URL, e.g. sqlite:data/promptdeck.db
    #[serde(default)]
    pub max_connections: Option<u32>,
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// --- Error reporting ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ErrorsConfig {
    /// Send the full error text to callers instead of the status reason phrase.
    #[serde(default)]
    pub return_detailed_errors: bool,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server and auth config are mandatory
    pub server: ServerConfig,
    pub auth: AuthConfig,

    #[serde(default)]
    pub stripe: Option<StripeConfig>,
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub errors: ErrorsConfig,
}

impl AppConfig {
    /// The Stripe section, only when both secret key and price id are configured.
    pub fn stripe_settings(&self) -> Option<&StripeConfig> {
        self.stripe.as_ref().filter(|s| s.credentials().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripe(secret_key: Option<&str>, price_id: Option<&str>) -> StripeConfig {
        StripeConfig {
            secret_key: secret_key.map(String::from),
            price_id: price_id.map(String::from),
            api_base_url: default_stripe_api_base_url(),
            settings_path: default_settings_path(),
        }
    }

    #[test]
    fn test_stripe_credentials_require_both_values() {
        assert_eq!(
            stripe(Some("sk_test"), Some("price_1")).credentials(),
            Some(("sk_test", "price_1"))
        );
        assert!(stripe(Some("sk_test"), None).credentials().is_none());
        assert!(stripe(None, Some("price_1")).credentials().is_none());
        assert!(stripe(Some("  "), Some("price_1")).credentials().is_none());
    }

    #[test]
    fn test_issuer_falls_back_to_auth_url() {
        let mut auth = AuthConfig {
            auth_url: "https://auth.example.com".to_string(),
            api_key: Some("key".to_string()),
            verifier_key: Some("pem".to_string()),
            issuer: None,
        };
        assert_eq!(auth.issuer(), "https://auth.example.com");
        auth.issuer = Some("https://issuer.example.com".to_string());
        assert_eq!(auth.issuer(), "https://issuer.example.com");
    }
}

// --- File: crates/promptdeck_auth/src/error.rs ---
use promptdeck_common::{HttpStatusCode, PromptdeckError};
use thiserror::Error;

/// Errors raised while setting up the validator (not per request).
#[derive(Error, Debug)]
pub enum AuthSetupError {
    #[error("Invalid verifier key: {0}")]
    InvalidVerifierKey(String),

    #[error("Auth provider request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Auth provider API error ({status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    #[error("Missing auth configuration: {0}")]
    MissingConfig(String),
}

impl HttpStatusCode for AuthSetupError {
    fn status_code(&self) -> u16 {
        match self {
            AuthSetupError::InvalidVerifierKey(_) => 500,
            AuthSetupError::RequestError(_) => 502,
            AuthSetupError::ApiError { .. } => 502,
            AuthSetupError::MissingConfig(_) => 500,
        }
    }
}

impl From<AuthSetupError> for PromptdeckError {
    fn from(err: AuthSetupError) -> Self {
        match err {
            AuthSetupError::InvalidVerifierKey(msg) | AuthSetupError::MissingConfig(msg) => {
                PromptdeckError::ConfigError(msg)
            }
            AuthSetupError::RequestError(e) => PromptdeckError::HttpError(e.to_string()),
            AuthSetupError::ApiError { message, .. } => PromptdeckError::ExternalServiceError {
                service_name: "Auth".to_string(),
                message,
            },
        }
    }
}

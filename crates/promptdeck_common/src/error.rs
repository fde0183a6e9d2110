// --- File: crates/promptdeck_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all PromptDeck crates.
///
/// Each crate keeps its own `thiserror` enum and implements
/// `From<CrateError> for PromptdeckError`.
#[derive(Error, Debug)]
pub enum PromptdeckError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The caller is not authenticated
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to access the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Maps an error to the HTTP status it should be reported with.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for PromptdeckError {
    fn status_code(&self) -> u16 {
        match self {
            PromptdeckError::HttpError(_) => 500,
            PromptdeckError::ParseError(_) => 400,
            PromptdeckError::ConfigError(_) => 500,
            PromptdeckError::Unauthorized(_) => 401,
            PromptdeckError::Forbidden(_) => 403,
            PromptdeckError::ValidationError(_) => 400,
            PromptdeckError::DatabaseError(_) => 500,
            PromptdeckError::ExternalServiceError { .. } => 502,
            PromptdeckError::NotFoundError(_) => 404,
            PromptdeckError::InternalError(_) => 500,
        }
    }
}

/// Rejection returned by the auth collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Missing, malformed, expired or otherwise invalid access token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid token, but the user is not a member of the requested organization
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl HttpStatusCode for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            AuthError::Unauthorized(_) => 401,
            AuthError::Forbidden(_) => 403,
        }
    }
}

impl From<AuthError> for PromptdeckError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized(msg) => PromptdeckError::Unauthorized(msg),
            AuthError::Forbidden(msg) => PromptdeckError::Forbidden(msg),
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for PromptdeckError {
    fn from(err: reqwest::Error) -> Self {
        PromptdeckError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for PromptdeckError {
    fn from(err: serde_json::Error) -> Self {
        PromptdeckError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PromptdeckError {
    fn from(err: std::io::Error) -> Self {
        PromptdeckError::InternalError(err.to_string())
    }
}

impl From<config::ConfigError> for PromptdeckError {
    fn from(err: config::ConfigError) -> Self {
        PromptdeckError::ConfigError(err.to_string())
    }
}

/// Reports a failed call to a third-party API.
pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> PromptdeckError {
    PromptdeckError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(AuthError::Unauthorized("x".into()).status_code(), 401);
        assert_eq!(AuthError::Forbidden("x".into()).status_code(), 403);
    }

    #[test]
    fn test_auth_error_keeps_status_when_converted() {
        let err: PromptdeckError = AuthError::Forbidden("not a member".into()).into();
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.to_string(), "Forbidden: not a member");
    }

    #[test]
    fn test_external_service_error_is_bad_gateway() {
        let err = external_service_error("Stripe", "down");
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.to_string(), "External service error: Stripe - down");
    }
}

// --- File: crates/promptdeck_stripe/src/error.rs ---
use promptdeck_common::{external_service_error, AuthError, HttpStatusCode, PromptdeckError};
use thiserror::Error;

/// Stripe-specific error types.
#[derive(Error, Debug)]
pub enum StripeError {
    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete")]
    ConfigError,
}

impl From<StripeError> for PromptdeckError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::RequestError(e) => {
                PromptdeckError::HttpError(format!("Stripe request error: {}", e))
            }
            StripeError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Stripe API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            StripeError::ParseError(e) => {
                PromptdeckError::ParseError(format!("Stripe response parse error: {}", e))
            }
            StripeError::ConfigError => PromptdeckError::ConfigError(
                "Stripe configuration missing or incomplete".to_string(),
            ),
        }
    }
}

/// Client errors reported by Stripe (bad price id, unknown customer) keep
/// their status; everything else is a bad gateway. Stripe's 401/403 mean our
/// secret key was rejected and must not read as the caller's token failing.
impl HttpStatusCode for StripeError {
    fn status_code(&self) -> u16 {
        match self {
            StripeError::RequestError(_) => 502,
            StripeError::ApiError {
                status_code: 401 | 403,
                ..
            } => 502,
            StripeError::ApiError { status_code, .. } if (400..500).contains(status_code) => {
                *status_code
            }
            StripeError::ApiError { .. } => 502,
            StripeError::ParseError(_) => 502,
            StripeError::ConfigError => 500,
        }
    }
}

/// Every way `POST /create-checkout-session` can fail, in flow order.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Missing access token")]
    MissingToken,

    #[error("Stripe secret key or price id is not configured")]
    NotConfigured,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing orgId")]
    MissingOrgId,

    #[error(transparent)]
    Authorization(#[from] AuthError),

    #[error("Customer lookup failed: {0}")]
    CustomerLookup(String),

    #[error(transparent)]
    Payment(#[from] StripeError),

    #[error("Checkout session {session_id} has no redirect URL")]
    NoCheckoutUrl { session_id: String },
}

impl HttpStatusCode for CheckoutError {
    fn status_code(&self) -> u16 {
        match self {
            CheckoutError::MissingToken => 401,
            CheckoutError::NotConfigured => 500,
            CheckoutError::InvalidBody(_) => 400,
            CheckoutError::MissingOrgId => 400,
            CheckoutError::Authorization(e) => e.status_code(),
            CheckoutError::CustomerLookup(_) => 500,
            CheckoutError::Payment(e) => e.status_code(),
            CheckoutError::NoCheckoutUrl { .. } => 502,
        }
    }
}

impl From<CheckoutError> for PromptdeckError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::MissingToken => {
                PromptdeckError::Unauthorized("Missing access token".to_string())
            }
            CheckoutError::NotConfigured => PromptdeckError::ConfigError(
                "Stripe secret key or price id is not configured".to_string(),
            ),
            CheckoutError::InvalidBody(msg) => PromptdeckError::ValidationError(msg),
            CheckoutError::MissingOrgId => {
                PromptdeckError::ValidationError("Missing orgId".to_string())
            }
            CheckoutError::Authorization(e) => e.into(),
            CheckoutError::CustomerLookup(msg) => PromptdeckError::DatabaseError(msg),
            CheckoutError::Payment(e) => e.into(),
            CheckoutError::NoCheckoutUrl { session_id } => external_service_error(
                "Stripe API",
                format!("Checkout session {} has no redirect URL", session_id),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_status_codes() {
        assert_eq!(CheckoutError::MissingToken.status_code(), 401);
        assert_eq!(CheckoutError::NotConfigured.status_code(), 500);
        assert_eq!(CheckoutError::InvalidBody("x".into()).status_code(), 400);
        assert_eq!(CheckoutError::MissingOrgId.status_code(), 400);
        assert_eq!(
            CheckoutError::Authorization(AuthError::Forbidden("x".into())).status_code(),
            403
        );
        assert_eq!(
            CheckoutError::Authorization(AuthError::Unauthorized("x".into())).status_code(),
            401
        );
        assert_eq!(CheckoutError::CustomerLookup("x".into()).status_code(), 500);
        assert_eq!(
            CheckoutError::NoCheckoutUrl {
                session_id: "cs_1".into()
            }
            .status_code(),
            502
        );
    }

    #[test]
    fn test_stripe_api_errors_keep_client_status_only() {
        let client_error = StripeError::ApiError {
            status_code: 400,
            message: "No such price".into(),
        };
        assert_eq!(CheckoutError::from(client_error).status_code(), 400);

        let server_error = StripeError::ApiError {
            status_code: 500,
            message: "boom".into(),
        };
        assert_eq!(server_error.status_code(), 502);

        for rejected_key_status in [401, 403] {
            let err = StripeError::ApiError {
                status_code: rejected_key_status,
                message: "Invalid API Key provided".into(),
            };
            assert_eq!(err.status_code(), 502);
            assert_eq!(CheckoutError::from(err).status_code(), 502);
        }
    }

    #[test]
    fn test_conversion_into_shared_error() {
        let err: PromptdeckError = CheckoutError::MissingOrgId.into();
        assert_eq!(err.status_code(), 400);

        let err: PromptdeckError =
            CheckoutError::Authorization(AuthError::Forbidden("not a member".into())).into();
        assert_eq!(err.status_code(), 403);
    }
}

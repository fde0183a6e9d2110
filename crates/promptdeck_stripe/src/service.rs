use std::sync::Arc;

use promptdeck_common::BoxFuture;
use promptdeck_config::AppConfig;

use crate::error::StripeError;
use crate::logic::{create_checkout_session, CheckoutSession, SubscriptionCheckoutParams};

/// Payment collaborator used by the checkout handler.
pub trait CheckoutSessionService: Send + Sync {
    /// Creates a subscription Checkout Session and returns it unchanged.
    fn create_subscription_checkout<'a>(
        &'a self,
        params: &'a SubscriptionCheckoutParams,
    ) -> BoxFuture<'a, CheckoutSession, StripeError>;
}

/// Stripe-backed payment service.
pub struct StripeCheckoutService {
    config: Arc<AppConfig>,
}

impl StripeCheckoutService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}

impl CheckoutSessionService for StripeCheckoutService {
    fn create_subscription_checkout<'a>(
        &'a self,
        params: &'a SubscriptionCheckoutParams,
    ) -> BoxFuture<'a, CheckoutSession, StripeError> {
        Box::pin(async move {
            let stripe_config = self
                .config
                .stripe_settings()
                .ok_or(StripeError::ConfigError)?;
            let (secret_key, _) = stripe_config.credentials().ok_or(StripeError::ConfigError)?;

            create_checkout_session(&stripe_config.api_base_url, secret_key, params).await
        })
    }
}

// --- File: crates/services/promptdeck_backend/src/service_factory.rs ---
//! Builds the concrete collaborators behind the checkout flow.
use std::sync::Arc;

use promptdeck_auth::PropelAuthValidator;
use promptdeck_common::{CustomerMappingLookup, OrgAccessValidator, PromptdeckError};
use promptdeck_config::AppConfig;
use promptdeck_db::{DbClient, OrgCustomerMappingRepository, SqlOrgCustomerMappingRepository};
use promptdeck_stripe::{CheckoutSessionService, StripeCheckoutService};
use tracing::{info, warn};

/// Production collaborators, created once at startup.
pub struct PromptdeckServiceFactory {
    auth: Arc<PropelAuthValidator>,
    customers: Arc<SqlOrgCustomerMappingRepository>,
    payments: Arc<StripeCheckoutService>,
}

impl PromptdeckServiceFactory {
    /// Connects to the database, prepares the mapping table and loads the
    /// token verifier. Any failure here stops startup.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, PromptdeckError> {
        let db_client = DbClient::new(&config).await?;
        let customers = SqlOrgCustomerMappingRepository::new(db_client);
        customers.init_schema().await?;
        info!("Customer mapping repository ready");

        let auth = PropelAuthValidator::from_config(&config.auth).await?;
        info!("Access token validator ready for issuer {}", config.auth.issuer());

        if config.stripe_settings().is_none() {
            warn!("Stripe is not configured; checkout requests will fail with 500");
        }
        let payments = StripeCheckoutService::new(config.clone());

        Ok(Self {
            auth: Arc::new(auth),
            customers: Arc::new(customers),
            payments: Arc::new(payments),
        })
    }

    pub fn auth(&self) -> Arc<dyn OrgAccessValidator> {
        self.auth.clone()
    }

    pub fn customers(&self) -> Arc<dyn CustomerMappingLookup> {
        self.customers.clone()
    }

    pub fn payments(&self) -> Arc<dyn CheckoutSessionService> {
        self.payments.clone()
    }
}

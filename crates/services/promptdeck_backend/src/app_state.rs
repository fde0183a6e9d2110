// --- File: crates/services/promptdeck_backend/src/app_state.rs ---
use std::sync::Arc;

use promptdeck_common::{CustomerMappingLookup, OrgAccessValidator};
use promptdeck_config::AppConfig;
use promptdeck_stripe::{CheckoutSessionService, CheckoutState};

use crate::service_factory::PromptdeckServiceFactory;

/// Application state shared across all routes. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub checkout: CheckoutState,
}

/// Builder for [`AppState`]; tests use it to plug in fakes.
pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    auth: Option<Arc<dyn OrgAccessValidator>>,
    customers: Option<Arc<dyn CustomerMappingLookup>>,
    payments: Option<Arc<dyn CheckoutSessionService>>,
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            auth: None,
            customers: None,
            payments: None,
        }
    }

    pub fn with_auth(mut self, auth: Arc<dyn OrgAccessValidator>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_customers(mut self, customers: Arc<dyn CustomerMappingLookup>) -> Self {
        self.customers = Some(customers);
        self
    }

    pub fn with_payments(mut self, payments: Arc<dyn CheckoutSessionService>) -> Self {
        self.payments = Some(payments);
        self
    }

    /// Returns `None` until every collaborator is set.
    pub fn build(self) -> Option<AppState> {
        let checkout = CheckoutState {
            config: self.config.clone(),
            auth: self.auth?,
            customers: self.customers?,
            payments: self.payments?,
        };
        Some(AppState {
            config: self.config,
            checkout,
        })
    }
}

impl AppState {
    pub fn builder(config: Arc<AppConfig>) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    /// State wired to the production collaborators.
    pub fn new(config: Arc<AppConfig>, factory: &PromptdeckServiceFactory) -> Self {
        let auth = factory.auth();
        let customers = factory.customers();
        let payments = factory.payments();
        Self {
            checkout: CheckoutState {
                config: config.clone(),
                auth,
                customers,
                payments,
            },
            config,
        }
    }
}

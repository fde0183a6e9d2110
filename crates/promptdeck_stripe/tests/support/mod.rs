#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use promptdeck_common::{
    AuthError, BoxFuture, BoxedError, CustomerMappingLookup, OrgAccessValidator, OrgMemberInfo,
    User, UserWithOrg,
};
use promptdeck_config::{
    AppConfig, AuthConfig, ErrorsConfig, LoggingConfig, ServerConfig, StripeConfig,
};
use promptdeck_stripe::{CheckoutSession, CheckoutSessionService, StripeError, SubscriptionCheckoutParams};

pub const PRICE_ID: &str = "price_123";
pub const SECRET_KEY: &str = "sk_test_123";
pub const VALID_TOKEN: &str = "Bearer valid-token";

pub fn app_config(stripe: Option<StripeConfig>) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
            public_url: None,
        },
        auth: AuthConfig {
            auth_url: "https://auth.example.com".to_string(),
            api_key: Some("api_key".to_string()),
            verifier_key: Some("unused".to_string()),
            issuer: None,
        },
        stripe,
        database: None,
        logging: LoggingConfig::default(),
        errors: ErrorsConfig::default(),
    }
}

pub fn stripe_config(api_base_url: &str) -> StripeConfig {
    StripeConfig {
        secret_key: Some(SECRET_KEY.to_string()),
        price_id: Some(PRICE_ID.to_string()),
        api_base_url: api_base_url.to_string(),
        settings_path: "/app/settings".to_string(),
    }
}

/// Accepts `VALID_TOKEN` for members of `org_1` only.
#[derive(Default)]
pub struct FakeValidator {
    pub calls: AtomicUsize,
}

impl OrgAccessValidator for FakeValidator {
    fn validate_access_token_and_get_user_with_org_info<'a>(
        &'a self,
        authorization_header: &'a str,
        org_id: &'a str,
    ) -> BoxFuture<'a, UserWithOrg, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if authorization_header != VALID_TOKEN {
                return Err(AuthError::Unauthorized("Access token invalid".to_string()));
            }
            if org_id != "org_1" {
                return Err(AuthError::Forbidden(format!(
                    "User is not a member of organization {}",
                    org_id
                )));
            }
            Ok(UserWithOrg {
                user: User {
                    user_id: "user_1".to_string(),
                    email: Some("ada@example.com".to_string()),
                    picture_url: None,
                },
                org_member_info: OrgMemberInfo {
                    org_id: org_id.to_string(),
                    org_name: "Acme".to_string(),
                    url_safe_org_name: "acme".to_string(),
                    user_role: "Owner".to_string(),
                    inherited_user_roles_plus_current_role: vec!["Owner".to_string()],
                    user_permissions: vec![],
                },
            })
        })
    }
}

pub enum LookupBehavior {
    Found(&'static str),
    NotFound,
    Fails,
}

pub struct FakeLookup {
    pub behavior: LookupBehavior,
    pub calls: AtomicUsize,
}

impl FakeLookup {
    pub fn new(behavior: LookupBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }
}

impl CustomerMappingLookup for FakeLookup {
    fn customer_id_for_org<'a>(&'a self, _org_id: &'a str) -> BoxFuture<'a, Option<String>, BoxedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            match self.behavior {
                LookupBehavior::Found(customer) => Ok(Some(customer.to_string())),
                LookupBehavior::NotFound => Ok(None),
                LookupBehavior::Fails => Err(BoxedError::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "database is locked",
                ))),
            }
        })
    }
}

/// Records every request and answers with a fixed session.
pub struct FakePayments {
    pub requests: Mutex<Vec<SubscriptionCheckoutParams>>,
    pub url: Option<&'static str>,
}

impl FakePayments {
    pub fn returning(url: Option<&'static str>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            url,
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<SubscriptionCheckoutParams> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl CheckoutSessionService for FakePayments {
    fn create_subscription_checkout<'a>(
        &'a self,
        params: &'a SubscriptionCheckoutParams,
    ) -> BoxFuture<'a, CheckoutSession, StripeError> {
        self.requests.lock().unwrap().push(params.clone());
        let session = CheckoutSession {
            id: "cs_test_1".to_string(),
            url: self.url.map(String::from),
        };
        Box::pin(async move { Ok(session) })
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}

// --- File: crates/promptdeck_common/src/services.rs ---
//! Collaborator traits used by the checkout flow.
//!
//! Handlers only see these traits; the backend wires concrete
//! implementations (JWT validator, SQL lookup, Stripe client) and tests
//! substitute in-memory fakes.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::error::AuthError;
use crate::models::UserWithOrg;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl BoxedError {
    pub fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        BoxedError(Box::new(err))
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Validates access tokens and org membership.
pub trait OrgAccessValidator: Send + Sync {
    /// Validates the raw `Authorization` header value and checks that the
    /// user is a member of `org_id`.
    fn validate_access_token_and_get_user_with_org_info<'a>(
        &'a self,
        authorization_header: &'a str,
        org_id: &'a str,
    ) -> BoxFuture<'a, UserWithOrg, AuthError>;
}

/// Resolves the billing customer stored for an organization.
pub trait CustomerMappingLookup: Send + Sync {
    /// Returns the Stripe customer id mapped to `org_id`, if any.
    fn customer_id_for_org<'a>(&'a self, org_id: &'a str) -> BoxFuture<'a, Option<String>, BoxedError>;
}

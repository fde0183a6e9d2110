// --- File: crates/promptdeck_stripe/src/lib.rs ---

pub mod logic;
pub mod handlers;
pub mod routes;
pub mod doc;
pub mod error;
pub mod service;

pub use routes::routes;
pub use logic::{
    CheckoutSession, CreateCheckoutSessionRequest, CreateCheckoutSessionResponse,
    SubscriptionCheckoutParams,
};
pub use handlers::CheckoutState;
pub use error::{CheckoutError, StripeError};
pub use service::{CheckoutSessionService, StripeCheckoutService};

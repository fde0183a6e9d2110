// --- File: crates/promptdeck_stripe/src/routes.rs ---

use crate::handlers::{create_checkout_session_handler, CheckoutState};
use axum::{routing::post, Router};
use std::sync::Arc;

/// Creates a router containing the checkout routes, relative to `/api`.
pub fn routes(state: CheckoutState) -> Router {
    Router::new()
        .route(
            "/create-checkout-session",
            post(create_checkout_session_handler),
        )
        .with_state(Arc::new(state))
}

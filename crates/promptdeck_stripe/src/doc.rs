// --- File: crates/promptdeck_stripe/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::logic::{CreateCheckoutSessionRequest, CreateCheckoutSessionResponse};

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::create_checkout_session_handler),
    components(schemas(CreateCheckoutSessionRequest, CreateCheckoutSessionResponse)),
    tags((name = "Billing", description = "Stripe subscription checkout")),
    modifiers(&SecurityAddon)
)]
pub struct StripeApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    Http::builder()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the auth provider"))
                        .build(),
                ),
            );
        }
    }
}

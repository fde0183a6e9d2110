// --- File: crates/promptdeck_stripe/src/logic.rs ---
use axum::http::{header, HeaderMap};
use promptdeck_common::HTTP_CLIENT;
use promptdeck_config::ServerConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::StripeError;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Path of the Checkout Sessions endpoint relative to the Stripe API base.
pub const CHECKOUT_SESSIONS_PATH: &str = "/v1/checkout/sessions";

// --- Data Structures ---

/// Body of `POST /create-checkout-session`.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCheckoutSessionRequest {
    #[serde(rename = "orgId", default)]
    #[cfg_attr(feature = "openapi", schema(example = "org_2b7c9d"))]
    pub org_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCheckoutSessionResponse {
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://checkout.stripe.com/c/pay/cs_test_a1...")
    )]
    pub url: String,
}

/// Everything Stripe needs for a single-price subscription checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionCheckoutParams {
    pub org_id: String,
    /// Existing Stripe customer; omitted from the request when `None`.
    pub customer_id: Option<String>,
    pub price_id: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// The part of a Stripe Checkout Session we care about.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

// --- Request building ---

/// Form body for `POST /v1/checkout/sessions`.
pub fn build_checkout_form(params: &SubscriptionCheckoutParams) -> Vec<(String, String)> {
    let mut form_body: Vec<(String, String)> = vec![
        ("client_reference_id".to_string(), params.org_id.clone()),
        ("line_items[0][price]".to_string(), params.price_id.clone()),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
        ("mode".to_string(), "subscription".to_string()),
        ("success_url".to_string(), params.success_url.clone()),
        ("cancel_url".to_string(), params.cancel_url.clone()),
    ];
    if let Some(customer_id) = &params.customer_id {
        form_body.push(("customer".to_string(), customer_id.clone()));
    }
    form_body
}

/// Origin of the app the user should return to after checkout.
///
/// `server.public_url` wins; otherwise the origin is rebuilt from
/// `X-Forwarded-Proto` (default `http`) and `Host`, falling back to the
/// configured bind address.
pub fn request_origin(server: &ServerConfig, headers: &HeaderMap) -> String {
    if let Some(public_url) = server.public_url.as_deref().filter(|u| !u.is_empty()) {
        return public_url.trim_end_matches('/').to_string();
    }

    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");

    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("{}://{}", proto, host),
        _ => {
            warn!("Request has no Host header, using the bind address as origin");
            format!("{}://{}:{}", proto, server.host, server.port)
        }
    }
}

/// `origin` + `path`, with exactly one slash between them.
pub fn app_url(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// --- Core Logic Function ---

/// Creates a Checkout Session through the Stripe REST API.
///
/// A missing `url` in a successful response is returned as-is; the caller
/// decides whether that is an error.
pub async fn create_checkout_session(
    api_base_url: &str,
    secret_key: &str,
    params: &SubscriptionCheckoutParams,
) -> Result<CheckoutSession, StripeError> {
    let api_url = format!(
        "{}{}",
        api_base_url.trim_end_matches('/'),
        CHECKOUT_SESSIONS_PATH
    );
    info!(
        "[Stripe Logic] Creating subscription checkout for org {} (customer: {})",
        params.org_id,
        params.customer_id.as_deref().unwrap_or("none")
    );

    let form_body = build_checkout_form(params);
    debug!("[Stripe Logic] Sending request to Stripe API: {}", api_url);

    let response = HTTP_CLIENT
        .post(&api_url)
        .basic_auth(secret_key, None::<&str>)
        .form(&form_body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;
    debug!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let session: CheckoutSession = serde_json::from_str(&body_text)?;
        info!("[Stripe Logic] Checkout Session {} created", session.id);
        Ok(session)
    } else {
        let error_message = match serde_json::from_str::<serde_json::Value>(&body_text) {
            Ok(json_body) => json_body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(&body_text)
                .to_string(),
            Err(_) => body_text,
        };
        warn!(
            "[Stripe Logic] Stripe API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

// --- File: crates/promptdeck_stripe/src/handlers.rs ---
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use promptdeck_common::{normalize_error, AuthError, CustomerMappingLookup, OrgAccessValidator};
use promptdeck_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::CheckoutError;
use crate::logic::{
    app_url, request_origin, CreateCheckoutSessionRequest, CreateCheckoutSessionResponse,
    SubscriptionCheckoutParams,
};
use crate::service::CheckoutSessionService;

// --- State for Checkout Handlers ---
#[derive(Clone)]
pub struct CheckoutState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<dyn OrgAccessValidator>,
    pub customers: Arc<dyn CustomerMappingLookup>,
    pub payments: Arc<dyn CheckoutSessionService>,
}

/// Starts a subscription checkout for an organization.
///
/// Responds with `{ "url": ... }` or a plain-text message and status.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/create-checkout-session",
    request_body = CreateCheckoutSessionRequest,
    responses(
        (status = 200, description = "Stripe Checkout Session created", body = CreateCheckoutSessionResponse),
        (status = 400, description = "Missing orgId or malformed body"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 403, description = "User is not a member of the organization"),
        (status = 500, description = "Stripe not configured or customer lookup failed"),
        (status = 502, description = "Stripe API error")
    ),
    security(("bearer_auth" = [])),
    tag = "Billing"
))]
pub async fn create_checkout_session_handler(
    State(state): State<Arc<CheckoutState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateCheckoutSessionResponse>, (StatusCode, String)> {
    match start_checkout(&state, &headers, &body).await {
        Ok(url) => Ok(Json(CreateCheckoutSessionResponse { url })),
        Err(err) => {
            let (message, status) =
                normalize_error(&err, state.config.errors.return_detailed_errors);
            Err((status, message))
        }
    }
}

/// The checkout flow; every step fails fast, nothing is retried.
///
/// The body is only decoded after the token and config checks.
pub async fn start_checkout(
    state: &CheckoutState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<String, CheckoutError> {
    // 1. Access token
    let authorization = match headers.get(header::AUTHORIZATION) {
        None => return Err(CheckoutError::MissingToken),
        Some(value) => value.to_str().map_err(|_| {
            AuthError::Unauthorized("Authorization header is not valid text".to_string())
        })?,
    };
    if authorization.trim().is_empty() {
        return Err(CheckoutError::MissingToken);
    }

    // 2. Payment configuration
    let stripe_config = state
        .config
        .stripe_settings()
        .ok_or(CheckoutError::NotConfigured)?;
    let (_, price_id) = stripe_config
        .credentials()
        .ok_or(CheckoutError::NotConfigured)?;

    // 3. Organization
    let request: CreateCheckoutSessionRequest =
        serde_json::from_slice(body).map_err(|e| CheckoutError::InvalidBody(e.to_string()))?;
    let org_id = request
        .org_id
        .filter(|id| !id.is_empty())
        .ok_or(CheckoutError::MissingOrgId)?;

    // 4. Membership
    let user = state
        .auth
        .validate_access_token_and_get_user_with_org_info(authorization, &org_id)
        .await?;
    debug!(
        "User {} authorized for org {} as {}",
        user.user.user_id, org_id, user.org_member_info.user_role
    );

    // 5. Existing customer
    let customer_id = state
        .customers
        .customer_id_for_org(&org_id)
        .await
        .map_err(|e| CheckoutError::CustomerLookup(e.to_string()))?;

    // 6. Session
    let return_url = app_url(
        &request_origin(&state.config.server, headers),
        &stripe_config.settings_path,
    );
    let params = SubscriptionCheckoutParams {
        org_id,
        customer_id,
        price_id: price_id.to_string(),
        success_url: return_url.clone(),
        cancel_url: return_url,
    };
    let session = state.payments.create_subscription_checkout(&params).await?;

    // 7. Redirect
    let url = session.url.ok_or(CheckoutError::NoCheckoutUrl {
        session_id: session.id.clone(),
    })?;
    info!(
        "Checkout session {} created for org {}",
        session.id, params.org_id
    );
    Ok(url)
}

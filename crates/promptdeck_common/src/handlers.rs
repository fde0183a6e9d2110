// --- File: crates/promptdeck_common/src/handlers.rs ---

/// Liveness check.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = String)),
    tag = "Health"
))]
pub async fn health_handler() -> &'static str {
    "ok"
}

// --- File: crates/services/promptdeck_backend/src/app.rs ---
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// The full HTTP surface: shared routes and checkout under `/api`, plus
/// Swagger UI at `/api/docs` when built with `openapi`.
pub fn build_router(state: &AppState) -> Router {
    let api_router = promptdeck_common::routes().merge(promptdeck_stripe::routes(state.checkout.clone()));

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        use promptdeck_stripe::doc::StripeApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "PromptDeck API",
                version = "0.1.0",
                description = "PromptDeck backend API docs"
            ),
            paths(promptdeck_common::handlers::health_handler),
            tags((name = "Health", description = "Liveness check")),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(StripeApiDoc::openapi());
        tracing::info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}

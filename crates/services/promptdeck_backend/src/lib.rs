// --- File: crates/services/promptdeck_backend/src/lib.rs ---
pub mod app;
pub mod app_state;
pub mod service_factory;

pub use app::build_router;
pub use app_state::AppState;
pub use service_factory::PromptdeckServiceFactory;

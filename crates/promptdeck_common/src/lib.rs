// --- File: crates/promptdeck_common/src/lib.rs ---

pub mod models;    // Shared identity and billing models
pub mod handlers;  // Health check handler
pub mod routes;    // Shared route definitions
pub mod error;     // Error handling
pub mod http;      // HTTP utilities
pub mod services;  // Collaborator traits
pub mod logging;   // Logging setup

pub use routes::routes;

pub use error::{
    AuthError,
    PromptdeckError,
    HttpStatusCode,
    external_service_error,
};

pub use http::{
    normalize_error,
    client::{HTTP_CLIENT, create_client},
};

pub use services::{BoxFuture, BoxedError, CustomerMappingLookup, OrgAccessValidator};

pub use models::{OrgCustomerMapping, OrgMemberInfo, User, UserWithOrg, DEFAULT_PICTURE_URL};

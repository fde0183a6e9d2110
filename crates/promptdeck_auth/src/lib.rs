// --- File: crates/promptdeck_auth/src/lib.rs ---
pub mod claims;
pub mod error;
pub mod metadata;
pub mod token;
pub mod validator;

pub use claims::AccessTokenClaims;
pub use error::AuthSetupError;
pub use metadata::{fetch_token_verification_metadata, TokenVerificationMetadata};
pub use token::extract_bearer_token;
pub use validator::PropelAuthValidator;

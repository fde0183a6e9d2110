//! Database integration for PromptDeck
//!
//! Provides a pooled `sqlx::Any` client and the repository that maps
//! organizations to their Stripe customers.
//!
//! # Example
//!
//! ```rust,no_run
//! use promptdeck_db::{DbClient, OrgCustomerMappingRepository, SqlOrgCustomerMappingRepository};
//!
//! async fn setup() -> Result<(), promptdeck_db::error::DbError> {
//!     let client = DbClient::from_url("sqlite:data/promptdeck.db").await?;
//!     let mappings = SqlOrgCustomerMappingRepository::new(client);
//!     mappings.init_schema().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
pub use repositories::{
    OrgCustomerMapping, OrgCustomerMappingRepository, SqlOrgCustomerMappingRepository,
};

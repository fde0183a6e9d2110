//! Repository for org to billing customer mappings
//!
//! Each organization is expected to have zero or one Stripe customer.

use crate::error::DbError;

pub use promptdeck_common::models::OrgCustomerMapping;

pub trait OrgCustomerMappingRepository {
    /// Creates `org_stripe_customer_mappings` if it does not exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Stores a mapping and returns it with `id` and `created_at` set.
    fn insert_mapping(
        &self,
        org_id: &str,
        stripe_customer_id: &str,
    ) -> impl std::future::Future<Output = Result<OrgCustomerMapping, DbError>> + Send;

    /// All mappings for `org_id`, oldest (lowest id) first.
    fn find_by_org_id(
        &self,
        org_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<OrgCustomerMapping>, DbError>> + Send;
}

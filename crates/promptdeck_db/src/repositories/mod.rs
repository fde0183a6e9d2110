//! Repository modules for database access

pub mod org_customer_mapping;
pub mod org_customer_mapping_sql;

pub use org_customer_mapping::{OrgCustomerMapping, OrgCustomerMappingRepository};
pub use org_customer_mapping_sql::SqlOrgCustomerMappingRepository;

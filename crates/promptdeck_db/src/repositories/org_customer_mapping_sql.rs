//! SQL implementation of the org customer mapping repository

use crate::error::DbError;
use crate::repositories::org_customer_mapping::{OrgCustomerMapping, OrgCustomerMappingRepository};
use crate::DbClient;
use chrono::{DateTime, NaiveDateTime, Utc};
use promptdeck_common::{BoxFuture, BoxedError, CustomerMappingLookup};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info, warn};

/// SQLite `CURRENT_TIMESTAMP` format.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct SqlOrgCustomerMappingRepository {
    db_client: DbClient,
}

impl SqlOrgCustomerMappingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

// `created_at` is stored as text; chrono types do not decode through `sqlx::Any`.
fn mapping_from_row(row: &AnyRow) -> Result<OrgCustomerMapping, DbError> {
    let created_at: Option<String> = row.try_get("created_at").ok();
    Ok(OrgCustomerMapping {
        id: row.try_get("id").ok(),
        org_id: row.try_get("org_id")?,
        stripe_customer_id: row.try_get("stripe_customer_id")?,
        created_at: created_at.as_deref().and_then(parse_timestamp),
    })
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, SQLITE_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
}

impl OrgCustomerMappingRepository for SqlOrgCustomerMappingRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing org customer mapping schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS org_stripe_customer_mappings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                org_id TEXT NOT NULL,
                stripe_customer_id TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
        "#;
        self.db_client.execute(query).await?;

        self.db_client
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_org_stripe_customer_mappings_org_id \
                 ON org_stripe_customer_mappings (org_id)",
            )
            .await?;

        info!("Org customer mapping schema initialized successfully");
        Ok(())
    }

    async fn insert_mapping(
        &self,
        org_id: &str,
        stripe_customer_id: &str,
    ) -> Result<OrgCustomerMapping, DbError> {
        debug!("Inserting customer mapping for org: {}", org_id);

        let query = r#"
            INSERT INTO org_stripe_customer_mappings (org_id, stripe_customer_id)
            VALUES ($1, $2)
            RETURNING id, org_id, stripe_customer_id, created_at
        "#;

        let row = sqlx::query(query)
            .bind(org_id)
            .bind(stripe_customer_id)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert customer mapping: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        mapping_from_row(&row)
    }

    async fn find_by_org_id(&self, org_id: &str) -> Result<Vec<OrgCustomerMapping>, DbError> {
        debug!("Finding customer mappings for org: {}", org_id);

        let query = r#"
            SELECT id, org_id, stripe_customer_id, created_at
            FROM org_stripe_customer_mappings
            WHERE org_id = $1
            ORDER BY id ASC
        "#;

        let rows = sqlx::query(query)
            .bind(org_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find customer mappings: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(mapping_from_row).collect()
    }
}

impl CustomerMappingLookup for SqlOrgCustomerMappingRepository {
    /// First mapping by id; logs a warning when an org has several.
    fn customer_id_for_org<'a>(&'a self, org_id: &'a str) -> BoxFuture<'a, Option<String>, BoxedError> {
        Box::pin(async move {
            let mappings = self.find_by_org_id(org_id).await.map_err(BoxedError::new)?;

            if mappings.len() > 1 {
                warn!(
                    "Org {} has {} customer mappings, using the oldest",
                    org_id,
                    mappings.len()
                );
            }

            Ok(mappings.into_iter().next().map(|m| m.stripe_customer_id))
        })
    }
}

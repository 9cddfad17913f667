//! PostgreSQL implementation of [`ApplicationStore`].

use admissions_core::application::{ApplicationField, ApplicationRecord};
use admissions_core::store::{ApplicationStore, StoreError};
use async_trait::async_trait;

use crate::models::application::Application;
use crate::repositories::ApplicationRepo;
use crate::DbPool;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Store backed by the `applications` table.
#[derive(Debug, Clone)]
pub struct PgApplicationStore {
    pool: DbPool,
}

impl PgApplicationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn find_by(
        &self,
        field: ApplicationField,
        value: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        let rows = match field {
            ApplicationField::Name => ApplicationRepo::list_by_name(&self.pool, value).await,
            ApplicationField::College => ApplicationRepo::list_by_college(&self.pool, value).await,
        }
        .map_err(|e| {
            tracing::error!(error = %e, field = field.as_str(), "Application query failed");
            StoreError::backend(e)
        })?;
        into_records(rows)
    }

    async fn find_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        let rows = ApplicationRepo::list(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "Application listing failed");
            StoreError::backend(e)
        })?;
        into_records(rows)
    }

    async fn insert(&self, record: &ApplicationRecord) -> Result<(), StoreError> {
        match ApplicationRepo::create(&self.pool, record).await {
            Ok(row) => {
                tracing::debug!(id = row.id, "Application row inserted");
                Ok(())
            }
            Err(e) => Err(classify_insert_error(e, record)),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::backend)
    }
}

fn into_records(rows: Vec<Application>) -> Result<Vec<ApplicationRecord>, StoreError> {
    rows.into_iter()
        .map(|row| ApplicationRecord::try_from(row).map_err(StoreError::backend))
        .collect()
}

/// Unique violations on a `uq_` constraint become [`StoreError::Duplicate`];
/// everything else is a backend failure.
fn classify_insert_error(err: sqlx::Error, record: &ApplicationRecord) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let is_unique = db_err.code().as_deref() == Some(UNIQUE_VIOLATION);
        let constraint = db_err.constraint().unwrap_or("unknown");
        if is_unique && constraint.starts_with("uq_") {
            return StoreError::Duplicate {
                name: record.name().to_string(),
                college: record.college().to_string(),
            };
        }
    }
    tracing::error!(error = %err, "Application insert failed");
    StoreError::backend(err)
}

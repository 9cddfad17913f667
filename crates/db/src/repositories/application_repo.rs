//! Repository for the `applications` table.

use admissions_core::application::ApplicationRecord;
use sqlx::PgPool;

use crate::models::application::Application;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, college, score, created_at";

/// Insert and list operations for applications.
///
/// Listings are ordered by `id`, i.e. insertion order.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        record: &ApplicationRecord,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (name, college, score)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(record.name())
            .bind(record.college())
            .bind(record.score())
            .fetch_one(pool)
            .await
    }

    /// List every application.
    pub async fn list(pool: &PgPool) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications ORDER BY id ASC");
        sqlx::query_as::<_, Application>(&query)
            .fetch_all(pool)
            .await
    }

    /// List applications submitted under an exact applicant name.
    pub async fn list_by_name(pool: &PgPool, name: &str) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications
             WHERE name = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// List applications submitted to an exact college name.
    pub async fn list_by_college(
        pool: &PgPool,
        college: &str,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications
             WHERE college = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(college)
            .fetch_all(pool)
            .await
    }
}

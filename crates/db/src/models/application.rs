//! Application row model.
//!
//! Maps to the `applications` table.

use admissions_core::application::ApplicationRecord;
use admissions_core::error::CoreError;
use sqlx::FromRow;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: DbId,
    pub name: String,
    pub college: String,
    pub score: f64,
    pub created_at: Timestamp,
}

impl TryFrom<Application> for ApplicationRecord {
    type Error = CoreError;

    fn try_from(row: Application) -> Result<Self, Self::Error> {
        ApplicationRecord::new(row.name, row.college, row.score)
    }
}

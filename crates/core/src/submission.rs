//! Submission flow: validate, guard, insert.

use crate::application::{ApplicationRecord, NewApplication};
use crate::error::CoreError;
use crate::guard::is_new_application;
use crate::store::{ApplicationStore, StoreError};

/// Message returned when an applicant re-applies to the same college.
pub const DUPLICATE_MESSAGE: &str = "Application already submitted for this college/name pair";

/// Validate `input`, reject repeat (name, college) pairs and persist the record.
///
/// A uniqueness violation raised by the store itself (two submissions racing
/// past the guard) is reported the same way as a guard rejection.
pub async fn submit_application<S: ApplicationStore + ?Sized>(
    store: &S,
    input: NewApplication,
) -> Result<ApplicationRecord, CoreError> {
    let record = input.into_record()?;

    if !is_new_application(store, record.name(), record.college()).await? {
        tracing::info!(
            name = %record.name(),
            college = %record.college(),
            "Rejected duplicate application"
        );
        return Err(CoreError::Conflict(DUPLICATE_MESSAGE.to_string()));
    }

    match store.insert(&record).await {
        Ok(()) => {}
        Err(StoreError::Duplicate { name, college }) => {
            tracing::info!(%name, %college, "Store rejected concurrent duplicate application");
            return Err(CoreError::Conflict(DUPLICATE_MESSAGE.to_string()));
        }
        Err(other) => return Err(other.into()),
    }

    tracing::info!(
        name = %record.name(),
        college = %record.college(),
        score = record.score(),
        "Application submitted"
    );
    Ok(record)
}

//! Duplicate guard: one application per (applicant, college) pair.

use crate::application::ApplicationField;
use crate::store::{ApplicationStore, StoreError};

/// Returns `true` when `applicant_name` has not yet applied to `college_name`.
///
/// Both comparisons are exact and case-sensitive. The check and the
/// subsequent insert are separate store calls; the store's uniqueness rule
/// settles the race between two concurrent submissions.
pub async fn is_new_application<S: ApplicationStore + ?Sized>(
    store: &S,
    applicant_name: &str,
    college_name: &str,
) -> Result<bool, StoreError> {
    let previous = store
        .find_by(ApplicationField::Name, applicant_name)
        .await?;

    Ok(!previous.iter().any(|app| app.college() == college_name))
}

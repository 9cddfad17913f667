//! Load records from a store and build the requested view.

use crate::aggregation::{aggregate, Aggregation, AggregationMode};
use crate::application::ApplicationField;
use crate::store::{ApplicationStore, StoreError};

/// Fetch the records `mode` needs and aggregate them.
///
/// Single-key modes query the store by equality; the `All*` modes read every
/// record. `Ok(None)` means a single-key mode matched nothing.
pub async fn load<S: ApplicationStore + ?Sized>(
    store: &S,
    mode: &AggregationMode,
) -> Result<Option<Aggregation>, StoreError> {
    let records = match mode {
        AggregationMode::AllByApplicant | AggregationMode::AllByCollege => {
            store.find_all().await?
        }
        AggregationMode::Applicant(name) => store.find_by(ApplicationField::Name, name).await?,
        AggregationMode::College(college) => {
            store.find_by(ApplicationField::College, college).await?
        }
    };

    tracing::debug!(?mode, records = records.len(), "Building aggregation view");
    Ok(aggregate(&records, mode))
}

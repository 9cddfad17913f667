//! Storage seam for application records.
//!
//! [`ApplicationStore`] is the only way the guard, the submission flow and
//! the HTTP layer reach persisted records. It is object-safe so the server
//! can hold an `Arc<dyn ApplicationStore>` and tests can swap in
//! [`InMemoryApplicationStore`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::{ApplicationField, ApplicationRecord};

/// Error returned by store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store's own uniqueness rule rejected the insert.
    #[error("Application already exists for {name} / {college}")]
    Duplicate { name: String, college: String },

    /// Connection, query or decoding failure inside the backend.
    #[error("Store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

/// Query and insert operations over stored applications.
///
/// Every listing returns records in insertion order; the aggregation
/// formatter relies on that for its tie-break.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Records whose `field` equals `value` exactly.
    async fn find_by(
        &self,
        field: ApplicationField,
        value: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError>;

    /// Every stored record.
    async fn find_all(&self) -> Result<Vec<ApplicationRecord>, StoreError>;

    /// Persist one new record.
    async fn insert(&self, record: &ApplicationRecord) -> Result<(), StoreError>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Vector-backed store with the same (name, college) uniqueness rule as the
/// database schema.
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    records: RwLock<Vec<ApplicationRecord>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`, bypassing the uniqueness rule.
    pub fn with_records(records: Vec<ApplicationRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn find_by(
        &self,
        field: ApplicationField,
        value: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| field.value_of(r) == value)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, record: &ApplicationRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let exists = records
            .iter()
            .any(|r| r.name() == record.name() && r.college() == record.college());
        if exists {
            return Err(StoreError::Duplicate {
                name: record.name().to_string(),
                college: record.college().to_string(),
            });
        }
        records.push(record.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn record(name: &str, college: &str, score: f64) -> ApplicationRecord {
        ApplicationRecord::new(name, college, score).unwrap()
    }

    #[tokio::test]
    async fn find_by_matches_exactly_and_keeps_insertion_order() {
        let store = InMemoryApplicationStore::new();
        store.insert(&record("Bob", "Yale", 70.0)).await.unwrap();
        store.insert(&record("bob", "Yale", 75.0)).await.unwrap();
        store.insert(&record("Bob", "Harvard", 95.0)).await.unwrap();

        let bobs = store.find_by(ApplicationField::Name, "Bob").await.unwrap();
        assert_eq!(bobs.len(), 2);
        assert_eq!(bobs[0].college(), "Yale");
        assert_eq!(bobs[1].college(), "Harvard");

        let yale = store
            .find_by(ApplicationField::College, "Yale")
            .await
            .unwrap();
        assert_eq!(yale.len(), 2);
    }

    #[tokio::test]
    async fn find_all_returns_everything() {
        let store = InMemoryApplicationStore::new();
        assert!(store.find_all().await.unwrap().is_empty());

        store.insert(&record("Carol", "Yale", 80.0)).await.unwrap();
        store.insert(&record("Dan", "MIT", 60.0)).await.unwrap();
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn insert_rejects_same_name_and_college() {
        let store = InMemoryApplicationStore::new();
        store.insert(&record("Alice", "MIT", 90.0)).await.unwrap();

        let result = store.insert(&record("Alice", "MIT", 40.0)).await;
        assert_matches!(result, Err(StoreError::Duplicate { name, college }) => {
            assert_eq!(name, "Alice");
            assert_eq!(college, "MIT");
        });
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn with_records_keeps_seeded_duplicates() {
        let store = InMemoryApplicationStore::with_records(vec![
            record("Dan", "MIT", 60.0),
            record("Dan", "MIT", 60.0),
        ]);
        assert_eq!(store.len().await, 2);
        assert!(!store.is_empty().await);
    }
}

//! # JSON File Store
//!
//! A record store backed by one JSON array on disk.
//!
//! ## Loading
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  first find()/all()                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OnceCell empty? ──yes──► tokio::fs::read ──► serde_json ──► cache      │
//! │       │                        │                  │                     │
//! │       no                  io error          parse error                 │
//! │       │                        └──────┬───────────┘                     │
//! │       ▼                               ▼                                 │
//! │  serve from cache              DbError::Load (not cached, next call     │
//! │                                retries the read)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concurrent first calls wait on the same load. After that the collection is
//! read-only and shared by every clone of the store.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

use super::{Record, RecordStore};
use crate::error::{DbError, DbResult};

/// File-backed record store. Cloning shares the cached collection.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    inner: Arc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    path: PathBuf,
    records: OnceCell<Vec<T>>,
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        JsonFileStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record + DeserializeOwned> JsonFileStore<T> {
    /// Creates a store for `path`. Nothing is read until the first lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            inner: Arc::new(Inner {
                path: path.into(),
                records: OnceCell::new(),
            }),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// True once the collection has been read successfully.
    pub fn is_loaded(&self) -> bool {
        self.inner.records.initialized()
    }

    async fn records(&self) -> DbResult<&[T]> {
        let records = self
            .inner
            .records
            .get_or_try_init(|| load::<T>(&self.inner.path))
            .await?;
        Ok(records.as_slice())
    }
}

async fn load<T: Record + DeserializeOwned>(path: &Path) -> DbResult<Vec<T>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DbError::load(path, e))?;

    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| DbError::load(path, e))?;

    debug!(
        path = %path.display(),
        entity = T::ENTITY,
        count = records.len(),
        "Loaded fixture collection"
    );
    Ok(records)
}

impl<T: Record + DeserializeOwned> RecordStore<T> for JsonFileStore<T> {
    async fn find(&self, id: &str) -> DbResult<T> {
        let found = self.records().await?.iter().find(|r| r.id() == id).cloned();

        found.ok_or_else(|| {
            debug!(entity = T::ENTITY, id = %id, "Record lookup missed");
            DbError::not_found(T::ENTITY, id)
        })
    }

    async fn all(&self) -> DbResult<Vec<T>> {
        Ok(self.records().await?.to_vec())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::{Car, CarCategory, Money};
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("rental-db-{}.json", Uuid::new_v4()))
    }

    fn write_temp(contents: &str) -> PathBuf {
        let path = temp_path();
        std::fs::write(&path, contents).unwrap();
        path
    }

    const CARS: &str = r#"[
        { "id": "car-1", "name": "Civic", "releaseYear": 2021, "available": true, "gasAvailable": true },
        { "id": "car-2", "name": "Golf", "releaseYear": 2019, "available": false, "gasAvailable": true }
    ]"#;

    #[tokio::test]
    async fn test_find_by_id() {
        let path = write_temp(CARS);
        let store = JsonFileStore::<Car>::new(&path);

        let car = store.find("car-2").await.unwrap();
        assert_eq!(car.name, "Golf");
        assert_eq!(car.release_year, 2019);

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let path = write_temp(CARS);
        let store = JsonFileStore::<Car>::new(&path);

        let err = store.find("car-9").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Car not found: car-9");

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_loads_once_and_caches() {
        let path = write_temp(CARS);
        let store = JsonFileStore::<Car>::new(&path);
        assert!(!store.is_loaded());

        assert_eq!(store.all().await.unwrap().len(), 2);
        assert!(store.is_loaded());

        // The file is gone, clones still answer from the cache.
        std::fs::remove_file(&path).unwrap();
        let clone = store.clone();
        assert_eq!(clone.find("car-1").await.unwrap().name, "Civic");
    }

    #[tokio::test]
    async fn test_missing_file_is_load_error_and_not_cached() {
        let path = temp_path();
        let store = JsonFileStore::<Car>::new(&path);

        let err = store.find("car-1").await.unwrap_err();
        assert!(matches!(err, DbError::Load { .. }));
        assert!(!store.is_loaded());

        std::fs::write(&path, CARS).unwrap();
        assert!(store.find("car-1").await.is_ok());

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_malformed_file_is_load_error() {
        let path = write_temp(r#"{ "id": "not-an-array" }"#);
        let store = JsonFileStore::<Car>::new(&path);

        let err = store.all().await.unwrap_err();
        assert!(matches!(err, DbError::Load { .. }));

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_category_file_with_numeric_price() {
        let path = write_temp(
            r#"[{ "id": "cat-1", "name": "SUV", "carIds": ["car-1"], "price": 37.6 }]"#,
        );
        let store = JsonFileStore::<CarCategory>::new(&path);

        let category = store.find("cat-1").await.unwrap();
        assert_eq!(category.price, Money::from_cents(3760));
        assert_eq!(category.car_ids, vec!["car-1"]);

        std::fs::remove_file(path).unwrap();
    }
}

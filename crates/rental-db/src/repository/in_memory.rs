//! # In-Memory Store
//!
//! A record store over a collection handed in at construction.

use std::sync::Arc;

use super::{Record, RecordStore};
use crate::error::{DbError, DbResult};

/// Static record store. Cloning shares the collection.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    records: Arc<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        InMemoryStore {
            records: Arc::new(records),
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> FromIterator<T> for InMemoryStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        InMemoryStore::new(iter.into_iter().collect())
    }
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn find(&self, id: &str) -> DbResult<T> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| DbError::not_found(T::ENTITY, id))
    }

    async fn all(&self) -> DbResult<Vec<T>> {
        Ok(self.records.as_ref().clone())
    }
}

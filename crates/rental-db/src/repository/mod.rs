//! # Repository Module
//!
//! Record lookup by identifier over a fixed collection.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  CarService                                                            │
//! │       │                                                                 │
//! │       │  cars.find("9f1c…")                                            │
//! │       ▼                                                                 │
//! │  RecordStore<Car>                                                      │
//! │  ├── find(&self, id)                                                   │
//! │  └── all(&self)                                                        │
//! │       │                                                                 │
//! │       ├──► JsonFileStore   reads cars.json once, then serves the cache │
//! │       └──► InMemoryStore   a Vec handed in by tests or embedders       │
//! │                                                                         │
//! │  The service is generic over RecordStore, so tests swap the backing    │
//! │  collection without touching service code.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`JsonFileStore`] - Lazily loaded, cached JSON array on disk
//! - [`InMemoryStore`] - Static collection

pub mod in_memory;
pub mod json_file;

use std::future::Future;

use rental_core::{Car, CarCategory, Customer};

use crate::error::DbResult;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

// =============================================================================
// Traits
// =============================================================================

/// An entity that can be looked up by id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in error messages ("Car", "Customer", ...).
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

/// Read-only lookup over a collection of records.
pub trait RecordStore<T: Record>: Send + Sync {
    /// Returns the record with `id`, or `DbError::NotFound`.
    fn find(&self, id: &str) -> impl Future<Output = DbResult<T>> + Send;

    /// Returns every record, in collection order.
    fn all(&self) -> impl Future<Output = DbResult<Vec<T>>> + Send;
}

// =============================================================================
// Record Implementations
// =============================================================================

impl Record for Car {
    const ENTITY: &'static str = "Car";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Customer {
    const ENTITY: &'static str = "Customer";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for CarCategory {
    const ENTITY: &'static str = "CarCategory";

    fn id(&self) -> &str {
        &self.id
    }
}

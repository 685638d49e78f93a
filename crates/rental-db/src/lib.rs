//! # rental-db: Flat-File Record Store
//!
//! This crate provides read access to the fixture "database": three JSON
//! files written by the `seed` binary.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rental Data Flow                                 │
//! │                                                                         │
//! │  seed binary ──writes──► ./database/*.json                             │
//! │                                │                                        │
//! │                                ▼                                        │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     rental-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐                  │   │
//! │  │   │   Database    │    │   Repositories     │                  │   │
//! │  │   │ (database.rs) │    │ (repository/)      │                  │   │
//! │  │   │               │    │                    │                  │   │
//! │  │   │ DbConfig      │───►│ JsonFileStore<T>   │                  │   │
//! │  │   │ fixture dir   │    │ InMemoryStore<T>   │                  │   │
//! │  │   └───────────────┘    └────────────────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                    rental-service (CarService)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`database`] - Fixture directory configuration and store handles
//! - [`repository`] - `RecordStore` trait and its implementations
//! - [`fixtures`] - Seeded fixture generation for the `seed` binary
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rental_db::{Database, DbConfig, RecordStore};
//!
//! let db = Database::open(DbConfig::new("./database"));
//! let car = db.cars().find("9f1c…").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod database;
pub mod error;
pub mod fixtures;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use database::{Database, DbConfig};
pub use error::{DbError, DbResult};
pub use repository::{InMemoryStore, JsonFileStore, Record, RecordStore};

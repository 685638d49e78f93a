//! # Store Error Types
//!
//! Error types for record store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds the file path and entity name            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RentalError (rental-service)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI prints the message and exits non-zero                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;
use thiserror::Error;

/// Record store errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// No record with the requested id.
    ///
    /// ## When This Occurs
    /// - Caller passed an unknown id
    /// - A category lists a car id that is missing from `cars.json` (stale id)
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The backing collection could not be read or parsed.
    ///
    /// ## When This Occurs
    /// - Fixture file missing or unreadable
    /// - File is not a JSON array of the expected records
    #[error("Failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    /// A fixture file could not be written (seeder only).
    #[error("Failed to write {path}: {reason}")]
    Write { path: String, reason: String },
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Load error for `path`.
    pub fn load(path: &Path, reason: impl ToString) -> Self {
        DbError::Load {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a Write error for `path`.
    pub fn write(path: &Path, reason: impl ToString) -> Self {
        DbError::Write {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for a missing record, as opposed to a broken fixture.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

/// Result type for record store operations.
pub type DbResult<T> = Result<T, DbError>;

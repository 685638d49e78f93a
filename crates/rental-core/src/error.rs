//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── CoreError        - Pricing and selection rule failures            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rental-db errors (separate crate)                                     │
//! │  └── DbError          - Missing records, unreadable fixtures           │
//! │                                                                         │
//! │  rental-service errors                                                 │
//! │  └── RentalError      - What the caller of rent() sees                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │                             DbError ─┴→ RentalError → CLI              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant reflects a data or configuration defect, never a transient
//! condition, so nothing in the workspace retries on these.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The category has no candidate cars to choose from.
    ///
    /// ## When This Occurs
    /// - A category fixture was written with `"carIds": []`
    /// - A test builds a category without cars
    #[error("Category {category_id} has no cars to choose from")]
    EmptyCategory { category_id: String },

    /// No tax bracket covers the customer's age.
    ///
    /// ## When This Occurs
    /// - Customer is younger than the first bracket (default table starts at 18)
    /// - A custom tax table leaves a gap between brackets
    #[error("No tax bracket matches age {age}")]
    NoBracketMatch { age: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any pricing work runs, so a bad request never consumes
/// randomness or touches the record store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a price that is not a decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Validation Module
//!
//! Input validation for rental requests and pricing configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field names and types in fixture / config files                   │
//! │  └── Decimal format of prices and multipliers                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Rental duration is positive                                       │
//! │  ├── Category price is not negative                                    │
//! │  └── Tax brackets are well formed                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing rules (tax table lookup, overflow checks)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::tax::Multiplier;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a rental duration.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is no upper bound. Amounts and due dates that overflow are reported
/// by the pricing engine and the calendar.
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_number_of_days;
///
/// assert!(validate_number_of_days(5).is_ok());
/// assert!(validate_number_of_days(0).is_err());
/// assert!(validate_number_of_days(-1).is_err());
/// ```
pub fn validate_number_of_days(days: i64) -> ValidationResult<()> {
    if days <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "number_of_days".to_string(),
        });
    }

    Ok(())
}

/// Validates a per-day category price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional categories)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a single tax bracket.
///
/// ## Rules
/// - `from` must not exceed `to`
/// - `then` must be at least 1.0 (a bracket never discounts)
pub fn validate_tax_bracket(from: u32, to: u32, then: Multiplier) -> ValidationResult<()> {
    if from > to {
        return Err(ValidationError::OutOfRange {
            field: "tax bracket from".to_string(),
            min: 0,
            max: i64::from(to),
        });
    }

    if then < Multiplier::ONE {
        return Err(ValidationError::OutOfRange {
            field: "tax bracket multiplier (bps)".to_string(),
            min: i64::from(Multiplier::ONE.bps()),
            max: i64::from(u32::MAX),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

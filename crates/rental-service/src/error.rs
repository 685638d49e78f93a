//! # Rental Error Types
//!
//! The error returned to callers of the rental service.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rental Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Core rules    │  │  Record store   │  │     Configuration       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  EmptyCategory  │  │  NotFound       │  │  InvalidConfig          │ │
//! │  │  NoBracketMatch │  │  Load           │  │  ConfigLoadFailed       │ │
//! │  │  Validation     │  │  Write          │  │  ConfigSaveFailed       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is retryable: every variant is a data or configuration defect.

use rental_core::CoreError;
use rental_db::DbError;
use thiserror::Error;

/// Result type alias for rental operations.
pub type RentalResult<T> = Result<T, RentalError>;

/// Every failure a rental call can surface.
#[derive(Debug, Error)]
pub enum RentalError {
    // =========================================================================
    // Domain Errors
    // =========================================================================
    /// A pricing or selection rule failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record could not be found or the fixtures could not be loaded.
    #[error(transparent)]
    Store(#[from] DbError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config values failed validation.
    #[error("Invalid rental configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<rental_core::ValidationError> for RentalError {
    fn from(err: rental_core::ValidationError) -> Self {
        RentalError::Core(CoreError::Validation(err))
    }
}

impl From<std::io::Error> for RentalError {
    fn from(err: std::io::Error) -> Self {
        RentalError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for RentalError {
    fn from(err: toml::de::Error) -> Self {
        RentalError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for RentalError {
    fn from(err: toml::ser::Error) -> Self {
        RentalError::ConfigSaveFailed(err.to_string())
    }
}

impl RentalError {
    /// Returns true if a requested id was missing from the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RentalError::Store(err) if err.is_not_found())
    }

    /// Returns true if the error comes from configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RentalError::InvalidConfig(_)
                | RentalError::ConfigLoadFailed(_)
                | RentalError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::ValidationError;

    #[test]
    fn test_conversions() {
        let err: RentalError = DbError::not_found("Car", "abc").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Car not found: abc");

        let err: RentalError = CoreError::NoBracketMatch { age: 12 }.into();
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "No tax bracket matches age 12");

        let err: RentalError = ValidationError::MustBePositive {
            field: "number_of_days".into(),
        }
        .into();
        assert!(matches!(err, RentalError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_config_errors() {
        assert!(RentalError::InvalidConfig("x".into()).is_config_error());
        assert!(!RentalError::Core(CoreError::NoBracketMatch { age: 1 }).is_config_error());
    }
}

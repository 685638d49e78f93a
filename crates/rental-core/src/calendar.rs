//! # Due Date Calendar
//!
//! Calendar-day arithmetic and the long pt-BR date printed on receipts.
//!
//! The start date is always passed in; reading the wall clock belongs to the
//! service layer.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rental_core::calendar::{due_date, format_long_date};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
//! let due = due_date(start, 5).unwrap();
//! assert_eq!(format_long_date(due), "19 de março de 2024");
//! ```

use chrono::{Days, Locale, NaiveDate, NaiveTime};

use crate::error::{CoreResult, ValidationError};
use crate::validation::validate_number_of_days;

/// `%-d` drops the leading zero: "5 de abril", not "05 de abril".
const LONG_DATE_FORMAT: &str = "%-d de %B de %Y";

/// Returns `start` plus `number_of_days` calendar days.
pub fn due_date(start: NaiveDate, number_of_days: i64) -> CoreResult<NaiveDate> {
    validate_number_of_days(number_of_days)?;

    let days = u64::try_from(number_of_days).map_err(|_| ValidationError::MustBePositive {
        field: "number_of_days".to_string(),
    })?;

    start.checked_add_days(Days::new(days)).ok_or_else(|| {
        ValidationError::InvalidFormat {
            field: "due date".to_string(),
            reason: format!("{} + {} days is out of range", start, number_of_days),
        }
        .into()
    })
}

/// Formats `date` as a long pt-BR date with its first letter capitalized.
pub fn format_long_date(date: NaiveDate) -> String {
    let text = date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(LONG_DATE_FORMAT, Locale::pt_BR)
        .to_string();

    capitalize_first(&text)
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Tax Table
//!
//! Age-bracket price multipliers.
//!
//! ## Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer age: 20                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────┬──────────┬──────────┐                                     │
//! │  │ 18 – 25  │ 26 – 30  │ 31 – 100 │   ordered, first match wins         │
//! │  │  × 1.1   │  × 1.5   │  × 1.3   │                                     │
//! │  └────▲─────┴──────────┴──────────┘                                     │
//! │       └── match → 1.1                                                   │
//! │                                                                         │
//! │  Age 17 → no bracket → CoreError::NoBracketMatch                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is plain configuration. It is passed into the pricing engine by
//! value, so tests and config files can swap it without touching pricing code.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{parse_decimal, to_scaled_integer};
use crate::validation::{validate_tax_bracket, ValidationResult};

// =============================================================================
// Multiplier
// =============================================================================

/// A price multiplier in basis points (1 bp = 0.0001).
///
/// `13000` bps is `× 1.3`. Fixture and config files write it as a decimal
/// number (`1.3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Leaves the price unchanged.
    pub const ONE: Multiplier = Multiplier(10_000);

    /// Creates a multiplier from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Multiplier(bps)
    }

    /// Parses a decimal multiplier such as `"1.3"`.
    ///
    /// ```rust
    /// use rental_core::tax::Multiplier;
    ///
    /// assert_eq!(Multiplier::parse("1.3").unwrap().bps(), 13000);
    /// assert_eq!(Multiplier::parse("1.05").unwrap().bps(), 10500);
    /// assert!(Multiplier::parse("-1").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Self> {
        parse_decimal(text)
            .and_then(Multiplier::from_decimal)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "multiplier".to_string(),
                reason: format!("'{}' is not a non-negative decimal", text),
            })
    }

    /// Rounds `value` half-up to whole basis points. `None` if negative or
    /// too large.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        to_scaled_integer(value, 4)
            .and_then(|bps| u32::try_from(bps).ok())
            .map(Multiplier)
    }

    /// Returns the multiplier as an exact decimal (`1.3`, not `1.3000`).
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4).normalize()
    }

    /// Returns the multiplier in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the multiplier as a float (for display only).
    #[inline]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 10_000.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Multiplier::from_decimal(value).ok_or_else(|| {
            serde::de::Error::custom(format!("multiplier {} is negative or too large", value))
        })
    }
}

// =============================================================================
// Tax Bracket
// =============================================================================

/// An inclusive age range mapped to a price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub from: u32,
    pub to: u32,
    pub then: Multiplier,
}

impl TaxBracket {
    pub const fn new(from: u32, to: u32, then: Multiplier) -> Self {
        TaxBracket { from, to, then }
    }

    /// True when `from ≤ age ≤ to`.
    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        self.from <= age && age <= self.to
    }
}

// =============================================================================
// Tax Table
// =============================================================================

/// Ordered list of tax brackets. The first bracket containing an age wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxTable(Vec<TaxBracket>);

impl TaxTable {
    /// Creates a table from brackets, keeping their order.
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        TaxTable(brackets)
    }

    /// Returns the brackets in lookup order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.0
    }

    /// Returns the multiplier of the first bracket covering `age`.
    ///
    /// ```rust
    /// use rental_core::tax::{Multiplier, TaxBracket, TaxTable};
    ///
    /// let table = TaxTable::new(vec![TaxBracket::new(40, 50, Multiplier::from_bps(13000))]);
    /// assert_eq!(table.multiplier_for_age(45).unwrap().bps(), 13000);
    /// assert!(table.multiplier_for_age(39).is_err());
    /// ```
    pub fn multiplier_for_age(&self, age: u32) -> CoreResult<Multiplier> {
        self.0
            .iter()
            .find(|bracket| bracket.contains(age))
            .map(|bracket| bracket.then)
            .ok_or(CoreError::NoBracketMatch { age })
    }

    /// Checks every bracket. Overlaps and gaps are allowed.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.0.is_empty() {
            return Err(ValidationError::Required {
                field: "tax_brackets".to_string(),
            });
        }

        self.0
            .iter()
            .try_for_each(|b| validate_tax_bracket(b.from, b.to, b.then))
    }
}

/// The standard table: young drivers pay 10%, 26–30 pay 50%, 31–100 pay 30%.
impl Default for TaxTable {
    fn default() -> Self {
        TaxTable(vec![
            TaxBracket::new(18, 25, Multiplier::from_bps(11_000)),
            TaxBracket::new(26, 30, Multiplier::from_bps(15_000)),
            TaxBracket::new(31, 100, Multiplier::from_bps(13_000)),
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

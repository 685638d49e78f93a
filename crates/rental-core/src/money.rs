//! # Money Module
//!
//! Provides the `Money` type and the `CurrencyFormat` used on receipts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    37.6 × 5 × 1.3 = 244.39999999999998  ❌ WRONG!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents × Basis Points                             │
//! │    3760 × 5 × 13000 / 10000 = 24440 cents                               │
//! │    Exact, and rounding happens exactly once                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fixture files carry prices as decimals (`37.6` or `"37.60"`). They are read
//! as `rust_decimal::Decimal`, rounded half away from zero to the cent, and
//! only then turned into an integer.
//!
//! ## Usage
//! ```rust
//! use rental_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::from_cents(24440);
//! assert_eq!(price.to_string(), "244.40");
//! assert_eq!(CurrencyFormat::default().format(price), "R$ 244,40");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative price can be read from a fixture so that
///   validation can reject it with a proper error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: written as a decimal string (`"37.60"`), read from either a
///   JSON number or a decimal string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_cents(3760); // 37.60
    /// assert_eq!(price.cents(), 3760);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"37.6"`, `"-5.505"` or `"1.5e-7"`.
    ///
    /// Digits past the second decimal place are rounded half-up.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// assert_eq!(Money::parse("37.6").unwrap().cents(), 3760);
    /// assert_eq!(Money::parse("0.125").unwrap().cents(), 13);
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Self> {
        let invalid = || ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' is not a decimal amount", text),
        };

        let value = parse_decimal(text).ok_or_else(invalid)?;
        Money::from_decimal(value).ok_or_else(invalid)
    }

    /// Rounds `value` half-up to the cent. `None` if it does not fit.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Decimal::new(376, 1); // 37.6
    /// assert_eq!(Money::from_decimal(price).unwrap().cents(), 3760);
    /// ```
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        to_scaled_integer(value, 2).map(Money)
    }

    /// Returns the amount as a decimal in currency units.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole currency units portion (truncated toward zero).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal with two places, no symbol: `244.40`, `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts a JSON/TOML number or a decimal string.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::from_decimal(value).ok_or_else(|| {
            serde::de::Error::custom(format!("price {} is out of range", value))
        })
    }
}

// =============================================================================
// Decimal Parsing
// =============================================================================

/// Plain (`37.6`) or scientific (`1.5e-7`) decimal text.
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Rounds `value` half away from zero to `dp` places and returns it as an
/// integer count of `10^-dp` units.
pub(crate) fn to_scaled_integer(value: Decimal, dp: u32) -> Option<i64> {
    let factor = Decimal::from(10_i64.checked_pow(dp)?);

    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(factor)?
        .to_i64()
}

// =============================================================================
// Currency Format
// =============================================================================

/// Locale configuration for rendering amounts on a receipt.
///
/// Defaults to Brazilian Real: `R$ 1.234,50`. The gap after the symbol is a
/// regular space (U+0020). Browser `Intl` pt-BR formatting emits a no-break
/// space (U+00A0) there, so compare receipts from the two after normalizing
/// that character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount, separated by one space.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Separator between units and cents.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Separator between groups of three unit digits.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,
}

fn default_symbol() -> String {
    "R$".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_thousands_separator() -> char {
    '.'
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: default_symbol(),
            decimal_separator: default_decimal_separator(),
            thousands_separator: default_thousands_separator(),
        }
    }
}

impl CurrencyFormat {
    /// Renders `amount` as localized currency text.
    ///
    /// ```rust
    /// use rental_core::money::{CurrencyFormat, Money};
    ///
    /// let brl = CurrencyFormat::default();
    /// assert_eq!(brl.format(Money::from_cents(20680)), "R$ 206,80");
    /// assert_eq!(brl.format(Money::from_cents(123450)), "R$ 1.234,50");
    /// assert_eq!(brl.format(Money::from_cents(-550)), "-R$ 5,50");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let units = amount.units().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, c) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(c);
        }

        format!(
            "{}{} {}{}{:02}",
            sign,
            self.symbol,
            grouped,
            self.decimal_separator,
            amount.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Pricing Engine
//!
//! Turns a category price, a duration and a customer's age into an amount.
//!
//! ## Formula
//! ```text
//! amount = price/day × days × multiplier(age)
//!
//! In integers:  (price_cents × days × bps + 5000) / 10000
//!                                        └──┬──┘
//!                              round half-up to the cent, once
//!
//! 37.60 × 5 × 1.3  →  3760 × 5 × 13000 = 244_400_000
//!                     (244_400_000 + 5000) / 10000 = 24440  →  R$ 244,40
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{CurrencyFormat, Money};
use crate::tax::{Multiplier, TaxTable};
use crate::types::{CarCategory, Customer};
use crate::validation::{validate_number_of_days, validate_price};

/// A priced rental, before a car is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub amount: Money,
    pub formatted: String,
    pub multiplier: Multiplier,
}

/// Age-adjusted pricing over a replaceable tax table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingEngine {
    taxes: TaxTable,
    currency: CurrencyFormat,
}

impl PricingEngine {
    pub fn new(taxes: TaxTable, currency: CurrencyFormat) -> Self {
        PricingEngine { taxes, currency }
    }

    /// Returns the tax table in use.
    pub fn taxes(&self) -> &TaxTable {
        &self.taxes
    }

    /// Returns a copy of this engine using `taxes` instead.
    pub fn with_taxes(mut self, taxes: TaxTable) -> Self {
        self.taxes = taxes;
        self
    }

    /// Computes `price × days × multiplier(age)`, rounded half-up to the cent.
    ///
    /// ## Errors
    /// - `Validation` when `number_of_days ≤ 0` or the price is negative
    /// - `NoBracketMatch` when no bracket covers the customer's age
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{CarCategory, Customer, Money};
    /// use rental_core::pricing::PricingEngine;
    ///
    /// let category = CarCategory {
    ///     id: "c1".into(),
    ///     name: "Hatch".into(),
    ///     car_ids: vec![],
    ///     price: Money::from_cents(3760),
    /// };
    /// let customer = Customer { id: "u1".into(), name: "Ana".into(), age: 20 };
    ///
    /// let amount = PricingEngine::default().compute_amount(&category, &customer, 5).unwrap();
    /// assert_eq!(amount.cents(), 20680);
    /// ```
    pub fn compute_amount(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: i64,
    ) -> CoreResult<Money> {
        self.price(category, customer, number_of_days)
            .map(|(amount, _)| amount)
    }

    /// Renders an amount with the configured currency format.
    pub fn format_amount(&self, amount: Money) -> String {
        self.currency.format(amount)
    }

    /// Computes and formats in one step.
    pub fn quote(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: i64,
    ) -> CoreResult<Quote> {
        let (amount, multiplier) = self.price(category, customer, number_of_days)?;
        Ok(Quote {
            amount,
            formatted: self.format_amount(amount),
            multiplier,
        })
    }

    /// Validates the request, picks the bracket once, and scales the price.
    fn price(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: i64,
    ) -> CoreResult<(Money, Multiplier)> {
        validate_number_of_days(number_of_days)?;
        validate_price(category.price)?;

        let multiplier = self.taxes.multiplier_for_age(customer.age)?;
        let amount = scale(category.price, number_of_days, multiplier)?;
        Ok((amount, multiplier))
    }
}

fn scale(price: Money, days: i64, multiplier: Multiplier) -> CoreResult<Money> {
    let out_of_range = || -> CoreError {
        ValidationError::OutOfRange {
            field: "amount (cents)".to_string(),
            min: 0,
            max: i64::MAX,
        }
        .into()
    };

    // Non-negative inputs, so adding half the divisor rounds half-up.
    let cents = i128::from(price.cents())
        .checked_mul(i128::from(days))
        .and_then(|v| v.checked_mul(i128::from(multiplier.bps())))
        .and_then(|v| v.checked_add(5_000))
        .map(|v| v / 10_000)
        .ok_or_else(out_of_range)?;

    i64::try_from(cents)
        .map(Money::from_cents)
        .map_err(|_| out_of_range())
}

// =============================================================================
// Unit Tests
// =============================================================================

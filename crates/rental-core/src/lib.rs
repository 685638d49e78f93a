//! # rental-core: Pure Pricing Logic
//!
//! This crate is the **heart** of the rental service. It contains the pricing
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rental Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rental-cli (apps/)                           │   │
//! │  │        rent ──► quote ──► list                                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rental-service                               │   │
//! │  │    CarService: pick car, price it, build the receipt            │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐   ┌───────────▼───────────────────┐   │
//! │  │ ★ rental-core (THIS CRATE) ★│   │ rental-db                     │   │
//! │  │  types   money   tax        │   │  JSON record stores           │   │
//! │  │  pricing calendar validation│   │  seed binary                  │   │
//! │  └─────────────────────────────┘   └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Fixture entities (Car, CarCategory, Customer) and Transaction
//! - [`money`] - Money in cents and the receipt currency format
//! - [`tax`] - Age-bracket multipliers
//! - [`pricing`] - The pricing engine
//! - [`calendar`] - Due date arithmetic and long-date formatting
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; clock and RNG live upstream
//! 2. **No I/O**: file system and network access are FORBIDDEN here
//! 3. **Integer Money**: cents × basis points, rounded half-up exactly once
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{CarCategory, Customer, Money, PricingEngine};
//! use rental_core::tax::{Multiplier, TaxBracket, TaxTable};
//!
//! let engine = PricingEngine::default()
//!     .with_taxes(TaxTable::new(vec![TaxBracket::new(40, 50, Multiplier::from_bps(13000))]));
//!
//! let category = CarCategory {
//!     id: "c1".into(),
//!     name: "Hatch".into(),
//!     car_ids: vec!["car-1".into()],
//!     price: Money::parse("37.6").unwrap(),
//! };
//! let customer = Customer { id: "u1".into(), name: "Ana".into(), age: 50 };
//!
//! let amount = engine.compute_amount(&category, &customer, 5).unwrap();
//! assert_eq!(engine.format_amount(amount), "R$ 244,40");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod error;
pub mod money;
pub mod pricing;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormat, Money};
pub use pricing::{PricingEngine, Quote};
pub use tax::{Multiplier, TaxBracket, TaxTable};
pub use types::*;

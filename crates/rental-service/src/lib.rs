//! # rental-service: Car Rental Orchestration
//!
//! Picks a car from a category, prices the rental and builds the
//! customer-facing receipt.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rental Service Architecture                        │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  CarService (Main Orchestrator)                  │  │
//! │  │                                                                  │  │
//! │  │  rent(customer, category, days) ──► Transaction                  │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ RandomSource   │  │ RecordStore    │  │  PricingEngine         │    │
//! │  │                │  │                │  │                        │    │
//! │  │ Uniform draw   │  │ Car lookup by  │  │ price × days × tax     │    │
//! │  │ over carIds    │  │ id (rental-db) │  │ (rental-core)          │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  Clock: today() for the due date. RentalConfig: TOML + environment.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`service`] - `CarService`: selection, pricing, rental
//! - [`clock`] - Injectable source of "today"
//! - [`random`] - Injectable uniform index draws
//! - [`config`] - Rental configuration (fixture dir, currency, tax table)
//! - [`error`] - Rental error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rental_db::Database;
//! use rental_service::{CarService, RentalConfig};
//!
//! let config = RentalConfig::load(None)?;
//! let db = Database::open(config.db_config());
//! let service = CarService::new(db.cars()).with_pricing(config.pricing_engine());
//!
//! let customer = db.customers().find(&customer_id).await?;
//! let category = db.categories().find(&category_id).await?;
//! let receipt = service.rent(&customer, &category, 5).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod config;
pub mod error;
pub mod random;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DatabaseSettings, PricingSettings, RentalConfig};
pub use error::{RentalError, RentalResult};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use service::CarService;

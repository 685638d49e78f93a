//! # Car Service
//!
//! Picks a car for a category, prices the rental and builds the receipt.
//!
//! ## Rental Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rent(customer, category, days)                                         │
//! │       │                                                                 │
//! │       ├── validate days > 0, price ≥ 0 ──────────► InvalidInput         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve_available_car(category)                                       │
//! │       ├── pick_candidate_id: RandomSource → carIds[i] ─► EmptyCategory  │
//! │       └── RecordStore::find(id) ─────────────────────► NotFound / Load  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PricingEngine::compute_amount ──────────────────► NoBracketMatch       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Clock::today() + days → "19 de março de 2024"                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Transaction { customer, car, dueDate, amount }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No step retries. The first failure is returned to the caller.

use std::sync::Arc;
use tracing::{debug, info};

use rental_core::calendar::{due_date, format_long_date};
use rental_core::validation::{validate_number_of_days, validate_price};
use rental_core::{
    Car, CarCategory, CoreError, Customer, Money, PricingEngine, Quote, TaxTable, Transaction,
};
use rental_db::RecordStore;

use crate::clock::{Clock, SystemClock};
use crate::error::RentalResult;
use crate::random::{RandomSource, ThreadRandom};

/// The rental service over a car store `S`.
///
/// ## Usage
/// ```rust,ignore
/// let service = CarService::new(db.cars())
///     .with_taxes(config.pricing.tax_table())
///     .with_clock(Arc::new(FixedClock(date)));
///
/// let receipt = service.rent(&customer, &category, 5).await?;
/// ```
#[derive(Debug)]
pub struct CarService<S> {
    cars: S,
    pricing: PricingEngine,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl<S: RecordStore<Car>> CarService<S> {
    /// Creates a service with the default tax table, wall clock and thread RNG.
    pub fn new(cars: S) -> Self {
        CarService {
            cars,
            pricing: PricingEngine::default(),
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRandom),
        }
    }

    pub fn with_pricing(mut self, pricing: PricingEngine) -> Self {
        self.pricing = pricing;
        self
    }

    /// Replaces the tax table, keeping the currency format.
    pub fn with_taxes(mut self, taxes: TaxTable) -> Self {
        self.pricing = self.pricing.with_taxes(taxes);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    pub fn cars(&self) -> &S {
        &self.cars
    }

    // =========================================================================
    // Availability Selector
    // =========================================================================

    /// Draws one candidate car id uniformly from the category.
    ///
    /// Draws are independent: the same id can come back on every call.
    /// A draw outside `[0, len)` from a custom random source wraps around.
    pub fn pick_candidate_id<'a>(&self, category: &'a CarCategory) -> RentalResult<&'a str> {
        let len = category.car_ids.len();
        if len == 0 {
            return Err(CoreError::EmptyCategory {
                category_id: category.id.clone(),
            }
            .into());
        }

        let index = self.random.index_below(len) % len;
        debug!(category_id = %category.id, index, candidates = len, "Picked candidate car");

        Ok(category.car_ids[index].as_str())
    }

    /// Picks a candidate id and resolves it in the car store.
    ///
    /// ## Errors
    /// - `EmptyCategory` when the category has no cars
    /// - `NotFound` when the picked id is missing from the store (stale id)
    /// - `Load` when the car fixtures cannot be read
    pub async fn resolve_available_car(&self, category: &CarCategory) -> RentalResult<Car> {
        let car_id = self.pick_candidate_id(category)?;
        Ok(self.cars.find(car_id).await?)
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// `price × days × multiplier(age)`, rounded half-up to the cent.
    pub fn compute_amount(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: i64,
    ) -> RentalResult<Money> {
        Ok(self
            .pricing
            .compute_amount(category, customer, number_of_days)?)
    }

    /// Prices a rental without picking a car.
    pub fn quote(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: i64,
    ) -> RentalResult<Quote> {
        Ok(self.pricing.quote(category, customer, number_of_days)?)
    }

    // =========================================================================
    // Rental Orchestrator
    // =========================================================================

    /// Rents a car from `category` to `customer` for `number_of_days`.
    ///
    /// The due date is today (per the injected clock) plus `number_of_days`
    /// calendar days, written as a long pt-BR date with a capital first letter.
    pub async fn rent(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: i64,
    ) -> RentalResult<Transaction> {
        validate_number_of_days(number_of_days)?;
        validate_price(category.price)?;

        let car = self.resolve_available_car(category).await?;
        let amount = self.compute_amount(category, customer, number_of_days)?;

        let today = self.clock.today();
        let due = due_date(today, number_of_days)?;

        info!(
            customer_id = %customer.id,
            category_id = %category.id,
            car_id = %car.id,
            days = number_of_days,
            %amount,
            %due,
            "Rental priced"
        );

        Ok(Transaction {
            customer: customer.clone(),
            car,
            due_date: format_long_date(due),
            amount: self.pricing.format_amount(amount),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::RentalError;
    use crate::random::{SeededRandom, SequenceRandom};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rental_core::{Multiplier, TaxBracket, ValidationError};
    use rental_db::{DbError, DbResult, InMemoryStore};
    use std::sync::Mutex;

    // -------------------------------------------------------------------------
    // Fixtures
    // -------------------------------------------------------------------------

    fn valid_car() -> Car {
        Car {
            id: "8a6b2a2c-3c44-4f5e-9a1e-4e1b0d2f6c11".to_string(),
            name: "Civic".to_string(),
            release_year: 2021,
            available: true,
            gas_available: true,
        }
    }

    fn valid_category() -> CarCategory {
        CarCategory {
            id: "0d4e5b1c-9a7f-4c39-8f0e-2b6a1d3c5e77".to_string(),
            name: "Sedan".to_string(),
            car_ids: vec![
                "8a6b2a2c-3c44-4f5e-9a1e-4e1b0d2f6c11".to_string(),
                "f3c1d7a0-5b2e-4d8a-b6c9-7e0f1a2b3c4d".to_string(),
                "1b2c3d4e-5f60-4718-92a3-b4c5d6e7f809".to_string(),
            ],
            price: Money::from_cents(4599),
        }
    }

    fn valid_customer() -> Customer {
        Customer {
            id: "c9e8d7f6-a5b4-4c3d-8e2f-1a0b9c8d7e6f".to_string(),
            name: "Ana Souza".to_string(),
            age: 30,
        }
    }

    fn service_with(cars: Vec<Car>) -> CarService<InMemoryStore<Car>> {
        CarService::new(InMemoryStore::new(cars))
    }

    /// Car store that records every id it is asked for.
    #[derive(Debug, Default)]
    struct RecordingStore {
        inner: Vec<Car>,
        lookups: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        fn lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }
    }

    impl RecordStore<Car> for RecordingStore {
        async fn find(&self, id: &str) -> DbResult<Car> {
            self.lookups.lock().unwrap().push(id.to_string());
            self.inner
                .iter()
                .find(|car| car.id == id)
                .cloned()
                .ok_or_else(|| DbError::not_found("Car", id))
        }

        async fn all(&self) -> DbResult<Vec<Car>> {
            Ok(self.inner.clone())
        }
    }

    // -------------------------------------------------------------------------
    // Availability Selector
    // -------------------------------------------------------------------------

    #[test]
    fn test_picks_first_id_when_random_returns_zero() {
        let random = Arc::new(SequenceRandom::fixed(0));
        let service = service_with(vec![]).with_random(random.clone());
        let category = valid_category();

        let picked = service.pick_candidate_id(&category).unwrap();

        assert_eq!(picked, category.car_ids[0]);
        assert_eq!(random.draws(), 1);
    }

    #[test]
    fn test_picks_scripted_index() {
        let service = service_with(vec![]).with_random(Arc::new(SequenceRandom::new([2, 1])));
        let category = valid_category();

        assert_eq!(service.pick_candidate_id(&category).unwrap(), category.car_ids[2]);
        assert_eq!(service.pick_candidate_id(&category).unwrap(), category.car_ids[1]);
    }

    #[test]
    fn test_out_of_range_draw_wraps() {
        let service = service_with(vec![]).with_random(Arc::new(SequenceRandom::fixed(4)));
        let category = valid_category();

        assert_eq!(service.pick_candidate_id(&category).unwrap(), category.car_ids[1]);
    }

    #[test]
    fn test_empty_category_fails_without_drawing() {
        let random = Arc::new(SequenceRandom::fixed(0));
        let service = service_with(vec![]).with_random(random.clone());
        let category = CarCategory {
            car_ids: vec![],
            ..valid_category()
        };

        let err = service.pick_candidate_id(&category).unwrap_err();

        assert!(matches!(
            err,
            RentalError::Core(CoreError::EmptyCategory { ref category_id }) if *category_id == category.id
        ));
        assert_eq!(random.draws(), 0);
    }

    proptest! {
        #[test]
        fn prop_pick_is_member_of_car_ids(
            ids in prop::collection::vec("[a-z0-9]{1,12}", 1..20),
            seed in any::<u64>(),
        ) {
            let service = service_with(vec![]).with_random(Arc::new(SeededRandom::new(seed)));
            let category = CarCategory { car_ids: ids.clone(), ..valid_category() };

            let picked = service.pick_candidate_id(&category).unwrap();
            prop_assert!(ids.iter().any(|id| id == picked));
        }
    }

    #[tokio::test]
    async fn test_resolves_the_only_car_in_category() {
        let car = valid_car();
        let store = RecordingStore {
            inner: vec![car.clone()],
            ..Default::default()
        };
        let service = CarService::new(store);
        let category = CarCategory {
            car_ids: vec![car.id.clone()],
            ..valid_category()
        };

        let result = service.resolve_available_car(&category).await.unwrap();

        assert_eq!(result, car);
        assert_eq!(service.cars().lookups(), vec![car.id.clone()]);
    }

    #[tokio::test]
    async fn test_stale_car_id_is_not_found() {
        let service = service_with(vec![valid_car()]).with_random(Arc::new(SequenceRandom::fixed(1)));

        let err = service.resolve_available_car(&valid_category()).await.unwrap_err();

        assert!(err.is_not_found());
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    #[test]
    fn test_final_amount_with_replaced_tax_table() {
        let service = service_with(vec![]).with_taxes(TaxTable::new(vec![TaxBracket::new(
            40,
            50,
            Multiplier::from_bps(13000),
        )]));
        let customer = Customer {
            age: 50,
            ..valid_customer()
        };
        let category = CarCategory {
            price: Money::parse("37.6").unwrap(),
            ..valid_category()
        };

        let amount = service.compute_amount(&category, &customer, 5).unwrap();

        assert_eq!(amount.cents(), 24440);
        assert_eq!(service.pricing().format_amount(amount), "R$ 244,40");
    }

    #[test]
    fn test_default_table_multiplier_for_45() {
        let service = service_with(vec![]);
        let multiplier = service.pricing().taxes().multiplier_for_age(45).unwrap();
        assert_eq!(multiplier, Multiplier::from_bps(13000));
    }

    #[test]
    fn test_quote() {
        let service = service_with(vec![]);
        let customer = Customer {
            age: 20,
            ..valid_customer()
        };
        let category = CarCategory {
            price: Money::parse("37.6").unwrap(),
            ..valid_category()
        };

        let quote = service.quote(&category, &customer, 5).unwrap();
        assert_eq!(quote.formatted, "R$ 206,80");
    }

    // -------------------------------------------------------------------------
    // Rental Orchestrator
    // -------------------------------------------------------------------------

    fn march_14_service(cars: Vec<Car>) -> CarService<InMemoryStore<Car>> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        service_with(cars).with_clock(Arc::new(FixedClock(today)))
    }

    #[tokio::test]
    async fn test_rent_returns_transaction_receipt() {
        let car = valid_car();
        let service = march_14_service(vec![car.clone()]);
        let category = CarCategory {
            price: Money::parse("37.6").unwrap(),
            car_ids: vec![car.id.clone()],
            ..valid_category()
        };
        let customer = Customer {
            age: 20,
            ..valid_customer()
        };

        let result = service.rent(&customer, &category, 5).await.unwrap();

        let expected = Transaction {
            customer: customer.clone(),
            car,
            due_date: "19 de março de 2024".to_string(),
            amount: "R$ 206,80".to_string(),
        };
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_rent_rejects_non_positive_days_before_drawing() {
        let random = Arc::new(SequenceRandom::fixed(0));
        let service = march_14_service(vec![valid_car()]).with_random(random.clone());

        for days in [0, -5] {
            let err = service
                .rent(&valid_customer(), &valid_category(), days)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                RentalError::Core(CoreError::Validation(ValidationError::MustBePositive { .. }))
            ));
        }
        assert_eq!(random.draws(), 0);
    }

    #[tokio::test]
    async fn test_rent_accepts_rentals_longer_than_ten_years() {
        let car = valid_car();
        let service = march_14_service(vec![car.clone()]);
        let category = CarCategory {
            price: Money::parse("37.6").unwrap(),
            car_ids: vec![car.id.clone()],
            ..valid_category()
        };
        let customer = Customer {
            age: 20,
            ..valid_customer()
        };

        let result = service.rent(&customer, &category, 3651).await.unwrap();

        assert_eq!(result.due_date, "13 de março de 2034");
        assert_eq!(result.amount, "R$ 151.005,36");
    }

    #[tokio::test]
    async fn test_rent_rejects_negative_price() {
        let service = march_14_service(vec![valid_car()]);
        let category = CarCategory {
            price: Money::from_cents(-1),
            ..valid_category()
        };

        let err = service.rent(&valid_customer(), &category, 2).await.unwrap_err();
        assert!(matches!(err, RentalError::Core(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rent_propagates_empty_category() {
        let service = march_14_service(vec![valid_car()]);
        let category = CarCategory {
            car_ids: vec![],
            ..valid_category()
        };

        let err = service.rent(&valid_customer(), &category, 2).await.unwrap_err();
        assert!(matches!(err, RentalError::Core(CoreError::EmptyCategory { .. })));
    }

    #[tokio::test]
    async fn test_rent_propagates_unmatched_age() {
        let car = valid_car();
        let service = march_14_service(vec![car.clone()]);
        let category = CarCategory {
            car_ids: vec![car.id],
            ..valid_category()
        };
        let minor = Customer {
            age: 16,
            ..valid_customer()
        };

        let err = service.rent(&minor, &category, 2).await.unwrap_err();
        assert!(matches!(err, RentalError::Core(CoreError::NoBracketMatch { age: 16 })));
    }

    #[tokio::test]
    async fn test_rent_propagates_store_load_error() {
        let store = rental_db::JsonFileStore::<Car>::new(
            std::env::temp_dir().join("rental-service-no-such-file.json"),
        );
        let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let service = CarService::new(store).with_clock(Arc::new(FixedClock(today)));

        let err = service
            .rent(&valid_customer(), &valid_category(), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, RentalError::Store(DbError::Load { .. })));
    }
}

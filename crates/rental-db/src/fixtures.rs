//! # Fixture Generation
//!
//! Random cars, customers and one category for the `seed` binary.
//!
//! Every value, ids included, is drawn from the generator passed in, so a
//! seeded `StdRng` writes byte-identical files on every run.
//!
//! ```text
//! count = 2
//!
//! cars.json          [car A, car B]            release year: last 10 years
//! customers.json     [customer X, customer Y]  age: 18 - 50
//! carCategory.json   [{ carIds: [A, B] }]      price: 20.00 - 100.00 / day
//! ```

use rand::Rng;
use rental_core::{Car, CarCategory, Customer, Money};
use uuid::{Builder, Uuid};

use crate::database::{Database, DbConfig};
use crate::error::DbResult;

/// Youngest generated customer.
pub const MIN_AGE: u32 = 18;
/// Oldest generated customer.
pub const MAX_AGE: u32 = 50;
/// Cheapest generated daily price, in cents.
pub const MIN_PRICE_CENTS: i64 = 2_000;
/// Most expensive generated daily price, in cents.
pub const MAX_PRICE_CENTS: i64 = 10_000;

const VEHICLE_TYPES: &[&str] = &[
    "Sedan",
    "Hatchback",
    "SUV",
    "Minivan",
    "Pickup",
    "Coupe",
    "Convertible",
    "Wagon",
];

const MODELS: &[&str] = &[
    "Civic", "Corolla", "Golf", "Onix", "HB20", "Kwid", "Compass", "Renegade", "Hilux", "Ranger",
    "Mustang", "Camaro", "Fusion", "Cruze", "Polo", "Argo", "Tracker", "Creta", "Kicks", "Sandero",
];

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Felipe", "Gabriela", "Heitor", "Isabela", "João",
    "Larissa", "Marcos", "Natália", "Otávio", "Paula", "Rafael",
];

const LAST_NAMES: &[&str] = &[
    "Silva", "Souza", "Oliveira", "Santos", "Pereira", "Lima", "Carvalho", "Ferreira", "Rodrigues",
    "Almeida", "Costa", "Gomes",
];

/// One generated fixture database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    pub cars: Vec<Car>,
    pub customers: Vec<Customer>,
    pub category: CarCategory,
}

impl FixtureSet {
    /// Generates `count` cars, `count` customers and a category holding
    /// every car.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, current_year: i32) -> Self {
        let cars: Vec<Car> = (0..count)
            .map(|_| generate_car(rng, current_year))
            .collect();
        let customers = (0..count).map(|_| generate_customer(rng)).collect();
        let category = generate_category(rng, &cars);

        FixtureSet {
            cars,
            customers,
            category,
        }
    }

    /// Writes the set to the three fixture files under `config`.
    pub async fn write(&self, config: &DbConfig) -> DbResult<()> {
        Database::write_fixtures(
            config,
            &self.cars,
            &self.customers,
            std::slice::from_ref(&self.category),
        )
        .await
    }
}

/// A version 4 UUID built from `rng` instead of the OS generator.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let id: Uuid = Builder::from_random_bytes(rng.random()).into_uuid();
    id.to_string()
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

pub fn generate_car<R: Rng + ?Sized>(rng: &mut R, current_year: i32) -> Car {
    Car {
        id: random_id(rng),
        name: pick(rng, MODELS).to_string(),
        release_year: current_year - rng.random_range(0..10),
        available: true,
        gas_available: true,
    }
}

pub fn generate_customer<R: Rng + ?Sized>(rng: &mut R) -> Customer {
    Customer {
        id: random_id(rng),
        name: format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
        age: rng.random_range(MIN_AGE..=MAX_AGE),
    }
}

pub fn generate_category<R: Rng + ?Sized>(rng: &mut R, cars: &[Car]) -> CarCategory {
    CarCategory {
        id: random_id(rng),
        name: pick(rng, VEHICLE_TYPES).to_string(),
        car_ids: cars.iter().map(|car| car.id.clone()).collect(),
        price: Money::from_cents(rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RecordStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64, count: usize) -> FixtureSet {
        FixtureSet::generate(&mut StdRng::seed_from_u64(seed), count, 2026)
    }

    #[test]
    fn test_same_seed_same_fixtures() {
        let first = seeded(42, 5);
        let second = seeded(42, 5);

        assert_eq!(first, second);
        assert_eq!(first.category.car_ids, second.category.car_ids);
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(seeded(1, 3).cars, seeded(2, 3).cars);
    }

    #[test]
    fn test_ids_are_unique_v4_uuids() {
        let set = seeded(7, 20);

        let mut ids: Vec<&str> = set
            .cars
            .iter()
            .map(|c| c.id.as_str())
            .chain(set.customers.iter().map(|c| c.id.as_str()))
            .chain(std::iter::once(set.category.id.as_str()))
            .collect();
        for id in &ids {
            assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
        }

        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_generation_rules() {
        let set = seeded(99, 50);

        assert_eq!(set.cars.len(), 50);
        assert_eq!(set.customers.len(), 50);

        for customer in &set.customers {
            assert!((MIN_AGE..=MAX_AGE).contains(&customer.age));
            assert!(customer.name.contains(' '));
        }
        for car in &set.cars {
            assert!((2017..=2026).contains(&car.release_year));
            assert!(car.available && car.gas_available);
        }

        let cents = set.category.price.cents();
        assert!((MIN_PRICE_CENTS..=MAX_PRICE_CENTS).contains(&cents));

        let car_ids: Vec<String> = set.cars.iter().map(|c| c.id.clone()).collect();
        assert_eq!(set.category.car_ids, car_ids);
    }

    #[test]
    fn test_zero_count_gives_empty_category() {
        let set = seeded(3, 0);
        assert!(set.cars.is_empty());
        assert!(set.category.is_empty());
    }

    #[tokio::test]
    async fn test_write_puts_customers_in_customers_file() {
        let dir = std::env::temp_dir().join(format!("rental-fixtures-{}", Uuid::new_v4()));
        let config = DbConfig::new(&dir);
        let set = seeded(42, 3);

        set.write(&config).await.unwrap();

        let db = Database::open(config);
        assert_eq!(db.customers().all().await.unwrap(), set.customers);
        assert_eq!(db.cars().all().await.unwrap(), set.cars);
        assert_eq!(db.categories().all().await.unwrap(), vec![set.category.clone()]);

        let _ = std::fs::remove_dir_all(dir);
    }
}

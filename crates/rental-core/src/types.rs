//! # Domain Types
//!
//! Fixture entities and the rental receipt.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CarCategory   │   │       Car       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  carIds ────────┼──►│  releaseYear    │   │  age            │       │
//! │  │  price (/day)   │   │  available      │   └────────┬────────┘       │
//! │  └────────┬────────┘   │  gasAvailable   │            │                │
//! │           │            └────────┬────────┘            │                │
//! │           └────────────┬────────┴─────────────────────┘                │
//! │                        ▼                                                │
//! │              ┌─────────────────┐                                        │
//! │              │   Transaction   │  customer, car, dueDate, amount        │
//! │              └─────────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names on disk are camelCase, exactly as the seeder writes them.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Car
// =============================================================================

/// A rentable car.
///
/// `available` is carried as data only; car selection does not filter on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique identifier (UUID v4 text from the seeder).
    pub id: String,

    /// Model name shown on the receipt.
    pub name: String,

    pub release_year: i32,

    pub available: bool,

    pub gas_available: bool,
}

// =============================================================================
// Car Category
// =============================================================================

/// A class of cars sharing a daily price and a pool of candidate cars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    pub id: String,

    pub name: String,

    /// Candidate car ids, in fixture order. Every id must resolve in the car store.
    pub car_ids: Vec<String>,

    /// Base rate per day.
    pub price: Money,
}

impl CarCategory {
    /// Returns the candidate at `index`, if any.
    #[inline]
    pub fn candidate(&self, index: usize) -> Option<&str> {
        self.car_ids.get(index).map(String::as_str)
    }

    /// Checks if the category has no candidate cars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.car_ids.is_empty()
    }
}

// =============================================================================
// Customer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,

    pub name: String,

    /// Age in whole years; selects the tax bracket.
    pub age: u32,
}

// =============================================================================
// Transaction
// =============================================================================

/// The receipt of a completed rental decision.
///
/// Uses snapshot pattern: customer and car are copied in as they were at the
/// time of the rental. `due_date` and `amount` are already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer: Customer,
    pub car: Car,
    /// Long-form localized date, first letter capitalized.
    pub due_date: String,
    /// Localized currency text, e.g. `R$ 206,80`.
    pub amount: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_fixture_shape() {
        let json = r#"{
            "id": "c1",
            "name": "Hatchback",
            "carIds": ["a", "b"],
            "price": "37.60"
        }"#;
        let category: CarCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.car_ids, vec!["a", "b"]);
        assert_eq!(category.price, Money::from_cents(3760));
        assert_eq!(category.candidate(1), Some("b"));
        assert_eq!(category.candidate(2), None);
        assert!(!category.is_empty());
    }

    #[test]
    fn test_car_fixture_shape() {
        let json = r#"{
            "id": "a",
            "name": "Civic",
            "releaseYear": 2021,
            "available": true,
            "gasAvailable": false
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.release_year, 2021);
        assert!(!car.gas_available);

        let written = serde_json::to_value(&car).unwrap();
        assert!(written.get("releaseYear").is_some());
        assert!(written.get("gasAvailable").is_some());
    }

    #[test]
    fn test_transaction_serializes_camel_case() {
        let tx = Transaction {
            customer: Customer {
                id: "u1".to_string(),
                name: "Ana".to_string(),
                age: 20,
            },
            car: Car {
                id: "a".to_string(),
                name: "Civic".to_string(),
                release_year: 2021,
                available: true,
                gas_available: true,
            },
            due_date: "19 de março de 2024".to_string(),
            amount: "R$ 206,80".to_string(),
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["dueDate"], "19 de março de 2024");
        assert_eq!(value["amount"], "R$ 206,80");
    }
}

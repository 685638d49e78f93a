//! # Fixture Database
//!
//! The flat-file "database": one directory, three JSON collections.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fixture Directory                                  │
//! │                                                                         │
//! │  DbConfig::new("./database")                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ./database/                                                           │
//! │  ├── cars.json         ──► Database::cars()       JsonFileStore<Car>   │
//! │  ├── customers.json    ──► Database::customers()  JsonFileStore<…>     │
//! │  └── carCategory.json  ──► Database::categories() JsonFileStore<…>     │
//! │                                                                         │
//! │  Each store loads its file on first lookup and caches it. The handles  │
//! │  returned by Database share that cache.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rental_core::{Car, CarCategory, Customer};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::repository::JsonFileStore;

// =============================================================================
// Configuration
// =============================================================================

/// Fixture directory configuration.
///
/// ## Example
/// ```rust
/// use rental_db::DbConfig;
///
/// let config = DbConfig::new("./database").cars_file("fleet.json");
/// assert!(config.cars_path().ends_with("fleet.json"));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Directory holding the fixture files.
    pub dir: PathBuf,

    /// Default: `cars.json`
    pub cars_file: String,

    /// Default: `customers.json`
    pub customers_file: String,

    /// Default: `carCategory.json`
    pub categories_file: String,
}

impl DbConfig {
    /// Creates a configuration for `dir` with the standard file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DbConfig {
            dir: dir.into(),
            cars_file: "cars.json".to_string(),
            customers_file: "customers.json".to_string(),
            categories_file: "carCategory.json".to_string(),
        }
    }

    /// Sets the cars file name.
    pub fn cars_file(mut self, name: impl Into<String>) -> Self {
        self.cars_file = name.into();
        self
    }

    /// Sets the customers file name.
    pub fn customers_file(mut self, name: impl Into<String>) -> Self {
        self.customers_file = name.into();
        self
    }

    /// Sets the categories file name.
    pub fn categories_file(mut self, name: impl Into<String>) -> Self {
        self.categories_file = name.into();
        self
    }

    pub fn cars_path(&self) -> PathBuf {
        self.dir.join(&self.cars_file)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.dir.join(&self.customers_file)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.dir.join(&self.categories_file)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new("./database")
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle over the three fixture collections.
#[derive(Debug, Clone)]
pub struct Database {
    config: DbConfig,
    cars: JsonFileStore<Car>,
    customers: JsonFileStore<Customer>,
    categories: JsonFileStore<CarCategory>,
}

impl Database {
    /// Opens the fixture directory. No file is read until the first lookup.
    pub fn open(config: DbConfig) -> Self {
        info!(dir = %config.dir.display(), "Opening fixture database");

        Database {
            cars: JsonFileStore::new(config.cars_path()),
            customers: JsonFileStore::new(config.customers_path()),
            categories: JsonFileStore::new(config.categories_path()),
            config,
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Returns the car store.
    pub fn cars(&self) -> JsonFileStore<Car> {
        self.cars.clone()
    }

    /// Returns the customer store.
    pub fn customers(&self) -> JsonFileStore<Customer> {
        self.customers.clone()
    }

    /// Returns the category store.
    pub fn categories(&self) -> JsonFileStore<CarCategory> {
        self.categories.clone()
    }

    /// Writes the three collections, creating the directory if needed.
    ///
    /// Existing files are replaced. Stores already handed out keep whatever
    /// they cached before.
    pub async fn write_fixtures(
        config: &DbConfig,
        cars: &[Car],
        customers: &[Customer],
        categories: &[CarCategory],
    ) -> DbResult<()> {
        tokio::fs::create_dir_all(&config.dir)
            .await
            .map_err(|e| DbError::write(&config.dir, e))?;

        write_collection(&config.cars_path(), cars).await?;
        write_collection(&config.customers_path(), customers).await?;
        write_collection(&config.categories_path(), categories).await?;

        info!(
            dir = %config.dir.display(),
            cars = cars.len(),
            customers = customers.len(),
            categories = categories.len(),
            "Fixtures written"
        );
        Ok(())
    }
}

async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> DbResult<()> {
    let json = serde_json::to_vec_pretty(records).map_err(|e| DbError::write(path, e))?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| DbError::write(path, e))
}

// =============================================================================
// Unit Tests
// =============================================================================

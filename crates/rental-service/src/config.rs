//! # Rental Configuration
//!
//! Where the fixtures live and how amounts are priced and printed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RENTAL_DATABASE_DIR=/srv/rental/database                           │
//! │     RENTAL_CURRENCY_SYMBOL=US$                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/pricing/rental.toml (Linux)                              │
//! │     ~/Library/Application Support/com.rental.pricing/rental.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ./database, R$ currency, the standard tax table                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rental.toml
//! [database]
//! dir = "./database"
//! cars_file = "cars.json"
//! customers_file = "customers.json"
//! categories_file = "carCategory.json"
//!
//! [pricing.currency]
//! symbol = "R$"
//! decimal_separator = ","
//! thousands_separator = "."
//!
//! [[pricing.tax_brackets]]
//! from = 18
//! to = 25
//! then = 1.1
//!
//! [[pricing.tax_brackets]]
//! from = 26
//! to = 30
//! then = 1.5
//!
//! [[pricing.tax_brackets]]
//! from = 31
//! to = 100
//! then = 1.3
//! ```

use rental_core::{CurrencyFormat, PricingEngine, TaxTable};
use rental_db::DbConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{RentalError, RentalResult};

// =============================================================================
// Database Settings
// =============================================================================

/// Location of the fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_cars_file")]
    pub cars_file: String,

    #[serde(default = "default_customers_file")]
    pub customers_file: String,

    #[serde(default = "default_categories_file")]
    pub categories_file: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from("./database")
}

fn default_cars_file() -> String {
    "cars.json".to_string()
}

fn default_customers_file() -> String {
    "customers.json".to_string()
}

fn default_categories_file() -> String {
    "carCategory.json".to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            dir: default_dir(),
            cars_file: default_cars_file(),
            customers_file: default_customers_file(),
            categories_file: default_categories_file(),
        }
    }
}

// =============================================================================
// Pricing Settings
// =============================================================================

/// Receipt currency and the age-bracket tax table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// First matching bracket wins.
    #[serde(default)]
    pub tax_brackets: TaxTable,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete rental configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub pricing: PricingSettings,
}

impl RentalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (rental.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error. A missing
    /// file at the default location is not.
    pub fn load(config_path: Option<PathBuf>) -> RentalResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                info!(?path, "Loading rental config from file");
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    RentalError::ConfigLoadFailed(format!("{}: {}", path.display(), e))
                })?;
                config = toml::from_str(&contents)?;
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading rental config from file");
                    let contents = std::fs::read_to_string(&path)?;
                    config = toml::from_str(&contents)?;
                }
                path => debug!(?path, "Config file not found, using defaults"),
            },
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load rental config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> RentalResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| RentalError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| RentalError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| RentalError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Rental config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RentalResult<()> {
        if self.database.dir.as_os_str().is_empty() {
            return Err(RentalError::InvalidConfig(
                "database.dir must not be empty".into(),
            ));
        }

        let files = [
            &self.database.cars_file,
            &self.database.customers_file,
            &self.database.categories_file,
        ];
        if files.iter().any(|name| name.is_empty()) {
            return Err(RentalError::InvalidConfig(
                "database file names must not be empty".into(),
            ));
        }

        let currency = &self.pricing.currency;
        if currency.symbol.trim().is_empty() {
            return Err(RentalError::InvalidConfig(
                "pricing.currency.symbol must not be empty".into(),
            ));
        }
        if currency.decimal_separator == currency.thousands_separator {
            return Err(RentalError::InvalidConfig(format!(
                "decimal and thousands separators must differ, both are '{}'",
                currency.decimal_separator
            )));
        }

        self.pricing
            .tax_brackets
            .validate()
            .map_err(|e| RentalError::InvalidConfig(format!("pricing.tax_brackets: {}", e)))
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = var("RENTAL_DATABASE_DIR") {
            debug!(dir = %dir, "Overriding database dir from environment");
            self.database.dir = PathBuf::from(dir);
        }

        if let Some(symbol) = var("RENTAL_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.pricing.currency.symbol = symbol;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rental", "pricing")
            .map(|dirs| dirs.config_dir().join("rental.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Record store configuration for [`rental_db::Database::open`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database.dir)
            .cars_file(&self.database.cars_file)
            .customers_file(&self.database.customers_file)
            .categories_file(&self.database.categories_file)
    }

    /// Pricing engine built from the configured table and currency.
    pub fn pricing_engine(&self) -> PricingEngine {
        PricingEngine::new(
            self.pricing.tax_brackets.clone(),
            self.pricing.currency.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::{Money, Multiplier, TaxBracket};
    use std::collections::HashMap;
    use uuid::Uuid;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rental-config-{}-{}", Uuid::new_v4(), name))
    }

    #[test]
    fn test_default_config() {
        let config = RentalConfig::default();
        assert_eq!(config.database.dir, PathBuf::from("./database"));
        assert_eq!(config.database.categories_file, "carCategory.json");
        assert_eq!(config.pricing.currency.symbol, "R$");
        assert_eq!(config.pricing.tax_brackets, TaxTable::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RentalConfig::default();

        config.pricing.currency.symbol = " ".into();
        assert!(config.validate().is_err());

        config.pricing.currency.symbol = "R$".into();
        config.pricing.currency.thousands_separator = ',';
        assert!(config.validate().is_err());

        config.pricing.currency.thousands_separator = '.';
        config.pricing.tax_brackets = TaxTable::new(vec![]);
        assert!(config.validate().unwrap_err().is_config_error());

        config.pricing.tax_brackets =
            TaxTable::new(vec![TaxBracket::new(30, 20, Multiplier::ONE)]);
        assert!(config.validate().is_err());

        config.pricing.tax_brackets = TaxTable::default();
        config.database.dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RentalConfig = toml::from_str(
            r#"
            [pricing.currency]
            symbol = "US$"
            decimal_separator = "."
            thousands_separator = ","

            [[pricing.tax_brackets]]
            from = 40
            to = 50
            then = 1.3
            "#,
        )
        .unwrap();

        assert_eq!(config.database, DatabaseSettings::default());
        assert_eq!(config.pricing.currency.symbol, "US$");
        assert_eq!(
            config.pricing.tax_brackets.brackets(),
            &[TaxBracket::new(40, 50, Multiplier::from_bps(13000))]
        );

        let engine = config.pricing_engine();
        assert_eq!(engine.format_amount(Money::from_cents(123450)), "US$ 1,234.50");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RENTAL_DATABASE_DIR", "/srv/rental"),
            ("RENTAL_CURRENCY_SYMBOL", "BRL"),
        ]
        .into_iter()
        .collect();

        let mut config = RentalConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database.dir, PathBuf::from("/srv/rental"));
        assert_eq!(config.pricing.currency.symbol, "BRL");
    }

    #[test]
    fn test_db_config() {
        let mut config = RentalConfig::default();
        config.database.dir = PathBuf::from("/tmp/fixtures");
        config.database.cars_file = "fleet.json".into();

        let db = config.db_config();
        assert_eq!(db.cars_path(), PathBuf::from("/tmp/fixtures/fleet.json"));
        assert_eq!(
            db.categories_path(),
            PathBuf::from("/tmp/fixtures/carCategory.json")
        );
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("rental.toml");
        let mut config = RentalConfig::default();
        config.database.dir = PathBuf::from("/data/rental");

        config.save(Some(path.clone())).unwrap();
        let loaded = RentalConfig::load(Some(path.clone())).unwrap();

        assert_eq!(loaded.pricing, config.pricing);
        assert_eq!(loaded.database.cars_file, "cars.json");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let err = RentalConfig::load(Some(temp_path("missing.toml"))).unwrap_err();
        assert!(matches!(err, RentalError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_malformed_file_fails() {
        let path = temp_path("bad.toml");
        std::fs::write(&path, "[pricing\nsymbol = ").unwrap();

        let err = RentalConfig::load(Some(path.clone())).unwrap_err();
        assert!(err.is_config_error());

        assert_eq!(
            RentalConfig::load_or_default(Some(path.clone())).pricing,
            PricingSettings::default()
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&RentalConfig::default()).unwrap();
        assert!(toml_str.contains("[database]"));
        assert!(toml_str.contains("[[pricing.tax_brackets]]"));
    }
}

//! Argument parsing and the command handlers.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use rental_core::{CarCategory, Customer, Quote, Transaction};
use rental_db::{Database, RecordStore};
use rental_service::{CarService, RentalConfig, SeededRandom};
use serde::Serialize;

pub type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "rental")]
#[command(about = "Car rental pricing: quotes and receipts from JSON fixtures.")]
pub struct CommandLine {
    /// Config file (default: platform config dir, rental.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixture directory, overrides the config file and RENTAL_DATABASE_DIR
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rent a car from a category and print the receipt
    #[command(alias = "r")]
    Rent {
        #[command(flatten)]
        request: RentalRequest,

        /// Seed for the car draw, for reproducible receipts
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Price a rental without picking a car
    #[command(alias = "q")]
    Quote {
        #[command(flatten)]
        request: RentalRequest,
    },
    /// List customers and car categories
    #[command(alias = "l")]
    List,
}

#[derive(Debug, Clone, Args)]
pub struct RentalRequest {
    /// Customer id
    #[arg(long)]
    pub customer: String,

    /// Car category id
    #[arg(long)]
    pub category: String,

    /// Rental duration in days
    #[arg(long, allow_negative_numbers = true)]
    pub days: i64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Everything in the fixture database except the cars.
#[derive(Debug, Serialize)]
pub struct Listing {
    pub customers: Vec<Customer>,
    pub categories: Vec<CarCategory>,
}

/// Runs the parsed command and returns its JSON output.
pub async fn run(cli: CommandLine) -> CliResult<String> {
    let mut config = RentalConfig::load(cli.config)?;
    if let Some(dir) = cli.database {
        config.database.dir = dir;
    }
    let db = Database::open(config.db_config());

    match cli.command {
        Commands::Rent { request, seed } => {
            let receipt = rent(&config, &db, &request, seed).await?;
            Ok(serde_json::to_string_pretty(&receipt)?)
        }
        Commands::Quote { request } => {
            let quote = quote(&config, &db, &request).await?;
            Ok(serde_json::to_string_pretty(&quote)?)
        }
        Commands::List => {
            let listing = list(&db).await?;
            Ok(serde_json::to_string_pretty(&listing)?)
        }
    }
}

async fn load_request(db: &Database, request: &RentalRequest) -> CliResult<(Customer, CarCategory)> {
    let customer = db.customers().find(&request.customer).await?;
    let category = db.categories().find(&request.category).await?;
    Ok((customer, category))
}

pub async fn rent(
    config: &RentalConfig,
    db: &Database,
    request: &RentalRequest,
    seed: Option<u64>,
) -> CliResult<Transaction> {
    let (customer, category) = load_request(db, request).await?;

    let mut service = CarService::new(db.cars()).with_pricing(config.pricing_engine());
    if let Some(seed) = seed {
        service = service.with_random(Arc::new(SeededRandom::new(seed)));
    }

    Ok(service.rent(&customer, &category, request.days).await?)
}

pub async fn quote(
    config: &RentalConfig,
    db: &Database,
    request: &RentalRequest,
) -> CliResult<Quote> {
    let (customer, category) = load_request(db, request).await?;
    let service = CarService::new(db.cars()).with_pricing(config.pricing_engine());

    Ok(service.quote(&category, &customer, request.days)?)
}

pub async fn list(db: &Database) -> CliResult<Listing> {
    Ok(Listing {
        customers: db.customers().all().await?,
        categories: db.categories().all().await?,
    })
}

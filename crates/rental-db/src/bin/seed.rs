//! # Seed Data Generator
//!
//! Writes a fresh fixture database for development and demos.
//!
//! ## Usage
//! ```bash
//! # Two cars, two customers, one category in ./database (default)
//! cargo run -p rental-db --bin seed
//!
//! # Bigger fleet, reproducible output
//! cargo run -p rental-db --bin seed -- --count 20 --seed 42
//!
//! # Different directory
//! cargo run -p rental-db --bin seed -- --dir ./data
//! ```
//!
//! ## Generated Data
//! - One category holding every generated car, price 20.00 - 100.00 per day
//! - `count` cars: model name, release year within the last 10 years,
//!   `available` and `gasAvailable` set
//! - `count` customers: full name, age 18 - 50

use chrono::{Datelike, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rental_db::fixtures::FixtureSet;
use rental_db::DbConfig;
use tracing_subscriber::EnvFilter;

/// Rental fixture generator.
#[derive(Debug, Parser)]
#[command(name = "seed", about = "Writes cars, customers and a car category as JSON fixtures")]
struct Args {
    /// Directory to write the fixture files into.
    #[arg(short, long, default_value = "./database")]
    dir: String,

    /// Number of cars and of customers to generate.
    #[arg(short, long, default_value_t = 2)]
    count: usize,

    /// RNG seed for reproducible fixtures.
    #[arg(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("🌱 Rental Fixture Generator");
    println!("===========================");
    println!("Directory: {}", args.dir);
    println!("Count:     {}", args.count);
    println!();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let current_year = Utc::now().year();
    let set = FixtureSet::generate(&mut rng, args.count, current_year);

    let config = DbConfig::new(&args.dir);
    set.write(&config).await?;

    println!("✓ {} cars      → {}", set.cars.len(), config.cars_path().display());
    println!("✓ {} customers → {}", set.customers.len(), config.customers_path().display());
    println!(
        "✓ 1 category    → {} ({}, {} per day)",
        config.categories_path().display(),
        set.category.name,
        set.category.price
    );
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

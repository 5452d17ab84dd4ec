//! Loads the built-in reference catalogue into PostgreSQL
//!
//! Existing seeds and locations are replaced in a single transaction.

use anyhow::{bail, Context};
use seed_advisor::{db::postgres, Config};
use shared::catalogue::{default_locations, default_seeds};
use shared::{validate_location, validate_seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    seed_advisor::init_tracing("seed_catalogue=info,seed_advisor=info,sqlx=warn");

    dotenvy::dotenv().ok();
    let config = Config::load()?;

    let seeds = default_seeds();
    let locations = default_locations();

    for seed in &seeds {
        if let Err(msg) = validate_seed(seed) {
            bail!("Seed {:?} is invalid: {}", seed.name, msg);
        }
    }
    for location in &locations {
        if let Err(msg) = validate_location(location) {
            bail!("Location {:?} is invalid: {}", location.name, msg);
        }
    }

    tracing::info!("Connecting to database...");
    let pool = postgres::connect(&config.database)
        .await
        .context("Failed to connect to the database")?;

    postgres::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let (seed_count, location_count) = postgres::replace_catalogue(&pool, &seeds, &locations)
        .await
        .context("Failed to load the catalogue")?;

    tracing::info!("Inserted {} seeds", seed_count);
    tracing::info!("Inserted {} locations", location_count);
    tracing::info!("Database seeded successfully");

    pool.close().await;
    Ok(())
}

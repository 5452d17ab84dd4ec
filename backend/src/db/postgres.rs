//! PostgreSQL access to the `seeds` and `locations` tables

use std::time::Duration;

use rust_decimal::Decimal;
use shared::{GpsCoordinates, Location, RainfallType, Seed, TemperatureRange};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Open a connection pool
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[derive(Debug, FromRow)]
struct SeedRow {
    id: Uuid,
    name: String,
    rainfall_requirement: String,
    description: String,
    growing_season: String,
    water_requirement: String,
    expected_yield: String,
    suitable_regions: Vec<String>,
    climate_zone: String,
    soil_type: Vec<String>,
    planting_time: String,
    harvest_time: String,
}

#[derive(Debug, FromRow)]
struct LocationRow {
    id: Uuid,
    name: String,
    region: String,
    country: String,
    rainfall_pattern: String,
    annual_rainfall_mm: i32,
    rainy_season: String,
    climate_zone: String,
    temperature_min: Decimal,
    temperature_max: Decimal,
    temperature_average: Decimal,
    soil_type: Vec<String>,
    latitude: Option<Decimal>,
    longitude: Option<Decimal>,
}

fn parse_rainfall(value: &str, record: &str, id: Uuid) -> AppResult<RainfallType> {
    value.parse().map_err(|_| {
        AppError::CorruptRecord(format!("{} {} has rainfall type {:?}", record, id, value))
    })
}

impl TryFrom<SeedRow> for Seed {
    type Error = AppError;

    fn try_from(row: SeedRow) -> AppResult<Self> {
        Ok(Seed {
            rainfall_requirement: parse_rainfall(&row.rainfall_requirement, "seed", row.id)?,
            id: row.id,
            name: row.name,
            description: row.description,
            growing_season: row.growing_season,
            water_requirement: row.water_requirement,
            expected_yield: row.expected_yield,
            suitable_regions: row.suitable_regions,
            climate_zone: row.climate_zone,
            soil_type: row.soil_type,
            planting_time: row.planting_time,
            harvest_time: row.harvest_time,
        })
    }
}

impl TryFrom<LocationRow> for Location {
    type Error = AppError;

    fn try_from(row: LocationRow) -> AppResult<Self> {
        let coordinates = match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Some(GpsCoordinates::new(latitude, longitude)),
            _ => None,
        };

        Ok(Location {
            rainfall_pattern: parse_rainfall(&row.rainfall_pattern, "location", row.id)?,
            id: row.id,
            name: row.name,
            region: row.region,
            country: row.country,
            annual_rainfall: row.annual_rainfall_mm,
            rainy_season: row.rainy_season,
            climate_zone: row.climate_zone,
            temperature: TemperatureRange::new(
                row.temperature_min,
                row.temperature_max,
                row.temperature_average,
            ),
            soil_type: row.soil_type,
            coordinates,
        })
    }
}

const SEED_COLUMNS: &str = r#"
    id, name, rainfall_requirement, description, growing_season, water_requirement,
    expected_yield, suitable_regions, climate_zone, soil_type, planting_time, harvest_time
"#;

const LOCATION_COLUMNS: &str = r#"
    id, name, region, country, rainfall_pattern, annual_rainfall_mm, rainy_season,
    climate_zone, temperature_min, temperature_max, temperature_average, soil_type,
    latitude, longitude
"#;

/// All seeds in catalogue order
pub async fn fetch_seeds(pool: &PgPool) -> AppResult<Vec<Seed>> {
    let rows = sqlx::query_as::<_, SeedRow>(&format!(
        "SELECT {} FROM seeds ORDER BY sort_order ASC, name ASC",
        SEED_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Seed::try_from).collect()
}

/// All locations in catalogue order
pub async fn fetch_locations(pool: &PgPool) -> AppResult<Vec<Location>> {
    let rows = sqlx::query_as::<_, LocationRow>(&format!(
        "SELECT {} FROM locations ORDER BY sort_order ASC, name ASC",
        LOCATION_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Location::try_from).collect()
}

/// A single location by id
pub async fn fetch_location(pool: &PgPool, id: Uuid) -> AppResult<Option<Location>> {
    let row = sqlx::query_as::<_, LocationRow>(&format!(
        "SELECT {} FROM locations WHERE id = $1",
        LOCATION_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Location::try_from).transpose()
}

/// Replace the whole catalogue in one transaction, returning the inserted counts
pub async fn replace_catalogue(
    pool: &PgPool,
    seeds: &[Seed],
    locations: &[Location],
) -> AppResult<(usize, usize)> {
    let mut tx = pool.begin().await?;

    // Clear existing data
    sqlx::query("DELETE FROM seeds").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM locations").execute(&mut *tx).await?;

    for (position, seed) in seeds.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO seeds (id, sort_order, name, rainfall_requirement, description,
                               growing_season, water_requirement, expected_yield,
                               suitable_regions, climate_zone, soil_type, planting_time,
                               harvest_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(seed.id)
        .bind(position as i32)
        .bind(&seed.name)
        .bind(seed.rainfall_requirement.as_str())
        .bind(&seed.description)
        .bind(&seed.growing_season)
        .bind(&seed.water_requirement)
        .bind(&seed.expected_yield)
        .bind(&seed.suitable_regions)
        .bind(&seed.climate_zone)
        .bind(&seed.soil_type)
        .bind(&seed.planting_time)
        .bind(&seed.harvest_time)
        .execute(&mut *tx)
        .await?;
    }

    for (position, location) in locations.iter().enumerate() {
        let (latitude, longitude) = match &location.coordinates {
            Some(c) => (Some(c.latitude), Some(c.longitude)),
            None => (None, None),
        };

        sqlx::query(
            r#"
            INSERT INTO locations (id, sort_order, name, region, country, rainfall_pattern,
                                   annual_rainfall_mm, rainy_season, climate_zone,
                                   temperature_min, temperature_max, temperature_average,
                                   soil_type, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(location.id)
        .bind(position as i32)
        .bind(&location.name)
        .bind(&location.region)
        .bind(&location.country)
        .bind(location.rainfall_pattern.as_str())
        .bind(location.annual_rainfall)
        .bind(&location.rainy_season)
        .bind(&location.climate_zone)
        .bind(location.temperature.min)
        .bind(location.temperature.max)
        .bind(location.temperature.average)
        .bind(&location.soil_type)
        .bind(latitude)
        .bind(longitude)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok((seeds.len(), locations.len()))
}

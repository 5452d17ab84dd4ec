//! Catalogue store
//!
//! The server constructs one [`CatalogueStore`] at startup, hands it to the
//! handlers through `AppState` and closes it on shutdown. Handlers only ever
//! read from it.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use shared::{Location, Seed};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::{CatalogueSource, Config};
use crate::error::AppResult;

pub use memory::MemoryCatalogue;

/// Read-only access to seeds and locations
#[derive(Clone)]
pub enum CatalogueStore {
    Postgres(PgPool),
    Memory(Arc<MemoryCatalogue>),
}

impl CatalogueStore {
    /// Open the store selected by `catalogue.source`
    pub async fn connect(config: &Config) -> AppResult<Self> {
        match config.catalogue.source {
            CatalogueSource::Postgres => {
                tracing::info!("Connecting to database...");
                let pool = postgres::connect(&config.database).await?;
                tracing::info!("Database connection established");
                Ok(CatalogueStore::Postgres(pool))
            }
            CatalogueSource::Memory => {
                tracing::info!("Serving the built-in reference catalogue from memory");
                Ok(Self::reference())
            }
        }
    }

    /// In-memory store holding the built-in reference catalogue
    pub fn reference() -> Self {
        CatalogueStore::Memory(Arc::new(MemoryCatalogue::reference()))
    }

    pub fn source(&self) -> CatalogueSource {
        match self {
            CatalogueStore::Postgres(_) => CatalogueSource::Postgres,
            CatalogueStore::Memory(_) => CatalogueSource::Memory,
        }
    }

    /// Full scan of the seed catalogue
    pub async fn list_seeds(&self) -> AppResult<Vec<Seed>> {
        match self {
            CatalogueStore::Postgres(pool) => postgres::fetch_seeds(pool).await,
            CatalogueStore::Memory(catalogue) => Ok(catalogue.seeds().to_vec()),
        }
    }

    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        match self {
            CatalogueStore::Postgres(pool) => postgres::fetch_locations(pool).await,
            CatalogueStore::Memory(catalogue) => Ok(catalogue.locations().to_vec()),
        }
    }

    /// Look a location up by its identifier; malformed ids are simply not found
    pub async fn get_location(&self, id: &str) -> AppResult<Option<Location>> {
        let Ok(id) = id.parse::<Uuid>() else {
            tracing::debug!(location_id = %id, "Location id is not a UUID");
            return Ok(None);
        };

        match self {
            CatalogueStore::Postgres(pool) => postgres::fetch_location(pool, id).await,
            CatalogueStore::Memory(catalogue) => Ok(catalogue.location(id).cloned()),
        }
    }

    /// Whether the backing store answers
    pub async fn ping(&self) -> bool {
        match self {
            CatalogueStore::Postgres(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            CatalogueStore::Memory(_) => true,
        }
    }

    /// Release pooled connections
    pub async fn close(&self) {
        if let CatalogueStore::Postgres(pool) = self {
            tracing::info!("Closing database connections");
            pool.close().await;
        }
    }
}

//! Catalogue browsing service

use shared::{Location, RainfallType, Seed};

use crate::db::CatalogueStore;
use crate::error::{AppError, AppResult};

/// Read access to seeds and locations for the listing endpoints
#[derive(Clone)]
pub struct CatalogueService {
    store: CatalogueStore,
}

impl CatalogueService {
    /// Create a new CatalogueService instance
    pub fn new(store: CatalogueStore) -> Self {
        Self { store }
    }

    /// List seeds, optionally only those with the given rainfall requirement
    pub async fn list_seeds(&self, rainfall: Option<RainfallType>) -> AppResult<Vec<Seed>> {
        let mut seeds = self.store.list_seeds().await?;
        if let Some(rainfall) = rainfall {
            seeds.retain(|seed| seed.rainfall_requirement == rainfall);
        }
        Ok(seeds)
    }

    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        self.store.list_locations().await
    }

    /// Get a location or fail with NotFound
    pub async fn get_location(&self, location_id: &str) -> AppResult<Location> {
        self.store
            .get_location(location_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location".to_string()))
    }
}

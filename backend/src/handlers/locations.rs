//! Location HTTP handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use shared::Location;

use crate::error::AppResult;
use crate::services::CatalogueService;
use crate::AppState;

#[derive(Serialize)]
pub struct LocationListResponse {
    pub locations: Vec<Location>,
    pub count: usize,
}

/// List all locations
pub async fn list_locations(State(state): State<AppState>) -> AppResult<Json<LocationListResponse>> {
    let service = CatalogueService::new(state.store);
    let locations = service.list_locations().await?;

    Ok(Json(LocationListResponse {
        count: locations.len(),
        locations,
    }))
}

/// Get a specific location
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> AppResult<Json<Location>> {
    let service = CatalogueService::new(state.store);
    Ok(Json(service.get_location(&location_id).await?))
}

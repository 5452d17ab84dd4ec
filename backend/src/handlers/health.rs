//! Health check handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::CatalogueSource;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalogue: CatalogueSource,
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Check store connectivity
    let db_status = match state.store.source() {
        CatalogueSource::Memory => "not_used",
        CatalogueSource::Postgres if state.store.ping().await => "connected",
        CatalogueSource::Postgres => "disconnected",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalogue: state.store.source(),
        database: db_status.to_string(),
        timestamp: Utc::now(),
    })
}

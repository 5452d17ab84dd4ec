//! Seed catalogue and suggestion HTTP handlers

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{Seed, SuggestSeedsRequest};

use crate::error::{AppError, AppResult};
use crate::services::{CatalogueService, SuggestionService};
use crate::AppState;

/// Query parameters for listing seeds
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedListQuery {
    pub rainfall_type: Option<String>,
}

#[derive(Serialize)]
pub struct SeedListResponse {
    pub seeds: Vec<Seed>,
    pub count: usize,
}

/// List the seed catalogue
pub async fn list_seeds(
    State(state): State<AppState>,
    Query(query): Query<SeedListQuery>,
) -> AppResult<Json<SeedListResponse>> {
    let rainfall = query
        .rainfall_type
        .as_deref()
        .map(shared::parse_rainfall_type)
        .transpose()
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

    let service = CatalogueService::new(state.store);
    let seeds = service.list_seeds(rainfall).await?;

    Ok(Json(SeedListResponse {
        count: seeds.len(),
        seeds,
    }))
}

/// Suggest seeds for a location or rainfall type, best match first
///
/// Unreadable bodies are answered with the same 400 error body as invalid
/// fields.
pub async fn suggest_seeds(
    State(state): State<AppState>,
    payload: Result<Json<SuggestSeedsRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let service = SuggestionService::new(state.store);
    let batch = service.prepare(request).await?;

    let body = batch.response(&state.config.scoring);
    tracing::info!(
        rainfall = %body.rainfall_type,
        count = body.count,
        "Seed suggestions computed"
    );

    Ok(Json(body).into_response())
}

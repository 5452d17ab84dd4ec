//! Route definitions for the Seed Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/seeds", seed_routes())
        .nest("/locations", location_routes())
}

/// Seed catalogue and suggestion routes
fn seed_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_seeds))
        .route("/suggest", post(handlers::suggest_seeds))
}

/// Location routes
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_locations))
        .route("/:location_id", get(handlers::get_location))
}

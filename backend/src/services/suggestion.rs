//! Seed suggestion service
//!
//! Resolves a validated request against the store, then hands the catalogue
//! snapshot to the recommender.

use shared::{ResolvedQuery, ScoringRules, Seed, SuggestSeedsRequest, SuggestionResponse};

use crate::db::CatalogueStore;
use crate::error::AppResult;

#[derive(Clone)]
pub struct SuggestionService {
    store: CatalogueStore,
}

/// Everything needed to score one request, owned so the response can borrow it
#[derive(Debug)]
pub struct SuggestionBatch {
    pub query: ResolvedQuery,
    pub catalogue: Vec<Seed>,
}

impl SuggestionBatch {
    /// Score the snapshot and build the response body
    pub fn response<'a>(&'a self, rules: &ScoringRules) -> SuggestionResponse<'a> {
        self.query.respond(rules, &self.catalogue)
    }
}

impl SuggestionService {
    pub fn new(store: CatalogueStore) -> Self {
        Self { store }
    }

    /// Validate the request, resolve its location and load the seed snapshot
    pub async fn prepare(&self, request: SuggestSeedsRequest) -> AppResult<SuggestionBatch> {
        let query = request.into_query()?;

        let found = match query.location_id() {
            Some(location_id) => {
                let found = self.store.get_location(location_id).await?;
                if found.is_none() {
                    tracing::debug!(location_id, "Location not found, using requested rainfall type");
                }
                found
            }
            None => None,
        };

        let query = query.resolve(found)?;
        let catalogue = self.store.list_seeds().await?;

        tracing::debug!(
            rainfall = %query.rainfall,
            location = query.location.as_ref().map(|l| l.name.as_str()),
            catalogue_size = catalogue.len(),
            "Scoring seed catalogue"
        );

        Ok(SuggestionBatch { query, catalogue })
    }
}

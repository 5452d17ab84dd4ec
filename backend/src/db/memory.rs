//! In-memory catalogue

use shared::catalogue::{default_locations, default_seeds};
use shared::{Location, Seed};
use uuid::Uuid;

/// Immutable seed and location lists held for the life of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogue {
    seeds: Vec<Seed>,
    locations: Vec<Location>,
}

impl MemoryCatalogue {
    pub fn new(seeds: Vec<Seed>, locations: Vec<Location>) -> Self {
        Self { seeds, locations }
    }

    /// The built-in reference catalogue
    pub fn reference() -> Self {
        Self::new(default_seeds(), default_locations())
    }

    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: Uuid) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }
}

//! Seed catalogue models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::RainfallType;

/// A catalogued crop or cultivar with its agronomic metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub id: Uuid,
    pub name: String,
    pub rainfall_requirement: RainfallType,
    pub description: String,
    pub growing_season: String,
    pub water_requirement: String,
    #[serde(rename = "yield")]
    pub expected_yield: String,
    #[serde(default)]
    pub suitable_regions: Vec<String>,
    pub climate_zone: String,
    #[serde(default)]
    pub soil_type: Vec<String>,
    pub planting_time: String,
    pub harvest_time: String,
}

impl Seed {
    /// Whether the region is listed among the seed's suitable regions
    pub fn suits_region(&self, region: &str) -> bool {
        self.suitable_regions.iter().any(|r| r == region)
    }

    /// Soil types shared with `soils`, in the seed's own order
    pub fn common_soil_types<'a>(&'a self, soils: &[String]) -> Vec<&'a str> {
        self.soil_type
            .iter()
            .filter(|soil| soils.contains(soil))
            .map(String::as_str)
            .collect()
    }
}

//! Location models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{GpsCoordinates, RainfallType, TemperatureRange};

/// A catalogued place with climate and soil metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub region: String,
    pub country: String,
    pub rainfall_pattern: RainfallType,
    /// Annual rainfall in millimetres
    pub annual_rainfall: i32,
    pub rainy_season: String,
    pub climate_zone: String,
    pub temperature: TemperatureRange,
    #[serde(default)]
    pub soil_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GpsCoordinates>,
}

//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary rainfall classification shared by seeds and locations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RainfallType {
    High,
    Low,
}

impl RainfallType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RainfallType::High => "high",
            RainfallType::Low => "low",
        }
    }
}

impl std::fmt::Display for RainfallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not exactly `high` or `low`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rainfall type: {0:?}")]
pub struct ParseRainfallTypeError(pub String);

impl std::str::FromStr for RainfallType {
    type Err = ParseRainfallTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(RainfallType::High),
            "low" => Ok(RainfallType::Low),
            other => Err(ParseRainfallTypeError(other.to_string())),
        }
    }
}

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Temperature summary in degrees Celsius
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRange {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average: Decimal,
}

impl TemperatureRange {
    pub fn new(min: Decimal, max: Decimal, average: Decimal) -> Self {
        Self { min, max, average }
    }
}

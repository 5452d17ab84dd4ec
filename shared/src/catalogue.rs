//! Built-in reference catalogue
//!
//! Ten seeds and six Indian locations loaded by `seed-catalogue` and served
//! directly when the backend runs with the in-memory catalogue. Identifiers
//! are fixed so repeated loads produce the same ids.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Location, Seed};
use crate::types::{GpsCoordinates, RainfallType, TemperatureRange};

const SEED_ID_BASE: u128 = 0x5eed_0000_0000_4000_8000_0000_0000_0000;
const LOCATION_ID_BASE: u128 = 0x10c0_0000_0000_4000_8000_0000_0000_0000;

fn seed_id(n: u128) -> Uuid {
    Uuid::from_u128(SEED_ID_BASE + n)
}

fn location_id(n: u128) -> Uuid {
    Uuid::from_u128(LOCATION_ID_BASE + n)
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn temperature(min: i64, max: i64, average: i64) -> TemperatureRange {
    TemperatureRange::new(Decimal::from(min), Decimal::from(max), Decimal::from(average))
}

/// Coordinates given with four decimal places
fn coordinates(latitude: i64, longitude: i64) -> Option<GpsCoordinates> {
    Some(GpsCoordinates::new(
        Decimal::new(latitude, 4),
        Decimal::new(longitude, 4),
    ))
}

/// Reference seeds, high-rainfall crops first
pub fn default_seeds() -> Vec<Seed> {
    vec![
        Seed {
            id: seed_id(1),
            name: "Rice (Paddy)".into(),
            rainfall_requirement: RainfallType::High,
            description: "Staple crop that thrives in waterlogged conditions and high rainfall areas.".into(),
            growing_season: "3-4 months (Kharif season)".into(),
            water_requirement: "High - 1200-1500mm annually".into(),
            expected_yield: "2.5-4.5 tons per hectare".into(),
            suitable_regions: list(&["Coastal Andhra", "Tamil Nadu", "Kerala", "West Bengal", "Assam"]),
            climate_zone: "Tropical Wet".into(),
            soil_type: list(&["Clay", "Loamy", "Alluvial"]),
            planting_time: "June-July".into(),
            harvest_time: "October-November".into(),
        },
        Seed {
            id: seed_id(2),
            name: "Sugarcane".into(),
            rainfall_requirement: RainfallType::High,
            description: "Tropical grass that requires substantial water throughout its growing period.".into(),
            growing_season: "10-12 months".into(),
            water_requirement: "Very High - 1500-2500mm annually".into(),
            expected_yield: "60-80 tons per hectare".into(),
            suitable_regions: list(&["Uttar Pradesh", "Maharashtra", "Tamil Nadu", "Karnataka"]),
            climate_zone: "Tropical Semi-Arid".into(),
            soil_type: list(&["Loamy", "Black Cotton", "Alluvial"]),
            planting_time: "February-March".into(),
            harvest_time: "December-January".into(),
        },
        Seed {
            id: seed_id(3),
            name: "Banana".into(),
            rainfall_requirement: RainfallType::High,
            description: "Tropical fruit crop that needs consistent moisture for optimal growth.".into(),
            growing_season: "9-12 months".into(),
            water_requirement: "High - 1200-1500mm annually with good distribution".into(),
            expected_yield: "30-40 tons per hectare".into(),
            suitable_regions: list(&["Kerala", "Tamil Nadu", "Maharashtra", "Gujarat"]),
            climate_zone: "Tropical Wet".into(),
            soil_type: list(&["Loamy", "Laterite", "Alluvial"]),
            planting_time: "June-July".into(),
            harvest_time: "12-15 months after planting".into(),
        },
        Seed {
            id: seed_id(4),
            name: "Coconut".into(),
            rainfall_requirement: RainfallType::High,
            description: "Tropical palm tree that requires high humidity and rainfall.".into(),
            growing_season: "Perennial - starts bearing in 6-8 years".into(),
            water_requirement: "High - 1500-2000mm annually".into(),
            expected_yield: "50-100 nuts per tree per year".into(),
            suitable_regions: list(&["Kerala", "Tamil Nadu", "Karnataka", "Andhra Pradesh"]),
            climate_zone: "Tropical Wet".into(),
            soil_type: list(&["Sandy Loam", "Laterite", "Alluvial"]),
            planting_time: "Monsoon season".into(),
            harvest_time: "Throughout the year".into(),
        },
        Seed {
            id: seed_id(5),
            name: "Taro (Colocasia)".into(),
            rainfall_requirement: RainfallType::High,
            description: "Root crop that grows well in wet, humid conditions.".into(),
            growing_season: "6-8 months".into(),
            water_requirement: "High - prefers waterlogged soil".into(),
            expected_yield: "15-25 tons per hectare".into(),
            suitable_regions: list(&["West Bengal", "Bihar", "Odisha", "Assam"]),
            climate_zone: "Tropical Wet".into(),
            soil_type: list(&["Clay Loam", "Alluvial"]),
            planting_time: "April-May".into(),
            harvest_time: "October-November".into(),
        },
        Seed {
            id: seed_id(6),
            name: "Millet (Pearl Millet)".into(),
            rainfall_requirement: RainfallType::Low,
            description: "Drought-resistant cereal crop ideal for arid and semi-arid regions.".into(),
            growing_season: "2.5-3 months".into(),
            water_requirement: "Low - 300-500mm annually".into(),
            expected_yield: "0.8-1.5 tons per hectare".into(),
            suitable_regions: list(&["Rajasthan", "Gujarat", "Maharashtra", "Karnataka"]),
            climate_zone: "Arid".into(),
            soil_type: list(&["Sandy", "Black Cotton", "Loamy"]),
            planting_time: "June-July".into(),
            harvest_time: "September-October".into(),
        },
        Seed {
            id: seed_id(7),
            name: "Sorghum".into(),
            rainfall_requirement: RainfallType::Low,
            description: "Drought-tolerant grain crop suitable for dry farming.".into(),
            growing_season: "3-4 months".into(),
            water_requirement: "Low - 400-600mm annually".into(),
            expected_yield: "1-2.5 tons per hectare".into(),
            suitable_regions: list(&["Maharashtra", "Karnataka", "Andhra Pradesh", "Madhya Pradesh"]),
            climate_zone: "Semi-Arid".into(),
            soil_type: list(&["Black Cotton", "Loamy", "Clay"]),
            planting_time: "June-July".into(),
            harvest_time: "October-November".into(),
        },
        Seed {
            id: seed_id(8),
            name: "Chickpea (Gram)".into(),
            rainfall_requirement: RainfallType::Low,
            description: "Pulse crop with excellent drought tolerance.".into(),
            growing_season: "3-4 months (Rabi season)".into(),
            water_requirement: "Low - 300-400mm annually".into(),
            expected_yield: "0.8-1.2 tons per hectare".into(),
            suitable_regions: list(&["Madhya Pradesh", "Maharashtra", "Rajasthan", "Uttar Pradesh"]),
            climate_zone: "Semi-Arid".into(),
            soil_type: list(&["Black Cotton", "Loamy", "Alluvial"]),
            planting_time: "October-November".into(),
            harvest_time: "February-March".into(),
        },
        Seed {
            id: seed_id(9),
            name: "Pigeon Pea (Tur Dal)".into(),
            rainfall_requirement: RainfallType::Low,
            description: "Drought-resistant legume that thrives in low rainfall conditions.".into(),
            growing_season: "5-6 months".into(),
            water_requirement: "Low - 400-600mm annually".into(),
            expected_yield: "1-1.8 tons per hectare".into(),
            suitable_regions: list(&["Maharashtra", "Uttar Pradesh", "Madhya Pradesh", "Gujarat"]),
            climate_zone: "Semi-Arid".into(),
            soil_type: list(&["Black Cotton", "Loamy"]),
            planting_time: "June-July".into(),
            harvest_time: "December-January".into(),
        },
        Seed {
            id: seed_id(10),
            name: "Castor".into(),
            rainfall_requirement: RainfallType::Low,
            description: "Oilseed crop with high drought tolerance.".into(),
            growing_season: "4-5 months".into(),
            water_requirement: "Low - 300-500mm annually".into(),
            expected_yield: "1-2 tons per hectare".into(),
            suitable_regions: list(&["Gujarat", "Rajasthan", "Andhra Pradesh", "Karnataka"]),
            climate_zone: "Arid".into(),
            soil_type: list(&["Black Cotton", "Sandy Loam"]),
            planting_time: "July-August".into(),
            harvest_time: "December-January".into(),
        },
    ]
}

/// Reference locations, high-rainfall places first
pub fn default_locations() -> Vec<Location> {
    vec![
        Location {
            id: location_id(1),
            name: "Kochi".into(),
            region: "Kerala".into(),
            country: "India".into(),
            rainfall_pattern: RainfallType::High,
            annual_rainfall: 3000,
            rainy_season: "June-September (Southwest Monsoon)".into(),
            climate_zone: "Tropical Wet".into(),
            temperature: temperature(20, 33, 27),
            soil_type: list(&["Laterite", "Sandy Loam"]),
            coordinates: coordinates(99312, 762673),
        },
        Location {
            id: location_id(2),
            name: "Mumbai".into(),
            region: "Maharashtra".into(),
            country: "India".into(),
            rainfall_pattern: RainfallType::High,
            annual_rainfall: 2200,
            rainy_season: "June-September (Southwest Monsoon)".into(),
            climate_zone: "Tropical Wet".into(),
            temperature: temperature(20, 33, 27),
            soil_type: list(&["Alluvial", "Black Cotton"]),
            coordinates: coordinates(190760, 728777),
        },
        Location {
            id: location_id(3),
            name: "Guwahati".into(),
            region: "Assam".into(),
            country: "India".into(),
            rainfall_pattern: RainfallType::High,
            annual_rainfall: 1800,
            rainy_season: "May-September (Monsoon)".into(),
            climate_zone: "Humid Subtropical".into(),
            temperature: temperature(15, 32, 24),
            soil_type: list(&["Alluvial", "Clay Loam"]),
            coordinates: coordinates(261445, 917362),
        },
        Location {
            id: location_id(4),
            name: "Jaipur".into(),
            region: "Rajasthan".into(),
            country: "India".into(),
            rainfall_pattern: RainfallType::Low,
            annual_rainfall: 650,
            rainy_season: "July-September (Limited Monsoon)".into(),
            climate_zone: "Arid".into(),
            temperature: temperature(15, 41, 28),
            soil_type: list(&["Sandy", "Loamy"]),
            coordinates: coordinates(269124, 757873),
        },
        Location {
            id: location_id(5),
            name: "Ahmedabad".into(),
            region: "Gujarat".into(),
            country: "India".into(),
            rainfall_pattern: RainfallType::Low,
            annual_rainfall: 750,
            rainy_season: "June-September (Southwest Monsoon)".into(),
            climate_zone: "Semi-Arid".into(),
            temperature: temperature(19, 42, 30),
            soil_type: list(&["Black Cotton", "Sandy Loam"]),
            coordinates: coordinates(230225, 725714),
        },
        Location {
            id: location_id(6),
            name: "Hyderabad".into(),
            region: "Telangana".into(),
            country: "India".into(),
            rainfall_pattern: RainfallType::Low,
            annual_rainfall: 800,
            rainy_season: "June-October (Southwest Monsoon)".into(),
            climate_zone: "Semi-Arid".into(),
            temperature: temperature(20, 39, 29),
            soil_type: list(&["Red Soil", "Black Cotton"]),
            coordinates: coordinates(173850, 784867),
        },
    ]
}

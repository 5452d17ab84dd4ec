//! WebAssembly module for the Seed Advisor
//!
//! Provides client-side computation for:
//! - Seed suggestions over a catalogue already fetched from the API
//! - Rainfall type and temperature window checks

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::{Location, RainfallType, ScoringRules, Seed};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Suggest seeds from JSON inputs, returning the suggestions as JSON
///
/// `location_json` may be omitted to score on rainfall alone.
#[wasm_bindgen]
pub fn suggest_seeds(
    rainfall_type: &str,
    location_json: Option<String>,
    catalogue_json: &str,
) -> Result<String, JsValue> {
    suggest_seeds_json(rainfall_type, location_json.as_deref(), catalogue_json)
        .map_err(|e| JsValue::from_str(&e))
}

/// Whether the string is a valid rainfall type
#[wasm_bindgen]
pub fn is_valid_rainfall_type(value: &str) -> bool {
    value.parse::<RainfallType>().is_ok()
}

/// Whether an average temperature earns the temperature bonus
#[wasm_bindgen]
pub fn is_suitable_temperature(average_celsius: f64) -> bool {
    Decimal::try_from(average_celsius)
        .map(|average| ScoringRules::default().is_suitable_temperature(average))
        .unwrap_or(false)
}

fn suggest_seeds_json(
    rainfall_type: &str,
    location_json: Option<&str>,
    catalogue_json: &str,
) -> Result<String, String> {
    let rainfall: RainfallType = rainfall_type
        .parse()
        .map_err(|e| format!("Invalid rainfall type: {}", e))?;
    let location: Option<Location> = location_json
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e| format!("Invalid location JSON: {}", e))?;
    let catalogue: Vec<Seed> = serde_json::from_str(catalogue_json)
        .map_err(|e| format!("Invalid catalogue JSON: {}", e))?;

    let suggestions = shared::recommend(rainfall, location.as_ref(), &catalogue);
    serde_json::to_string(&suggestions).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalogue::{default_locations, default_seeds};

    #[test]
    fn test_suggest_without_location() {
        let catalogue = serde_json::to_string(&default_seeds()).unwrap();
        let json = suggest_seeds_json("low", None, &catalogue).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let suggestions = value.as_array().unwrap();
        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.iter().all(|s| s["matchScore"] == 70));
        assert!(suggestions.iter().all(|s| s["location"].is_null()));
    }

    #[test]
    fn test_suggest_with_location() {
        let catalogue = serde_json::to_string(&default_seeds()).unwrap();
        let kochi = serde_json::to_string(&default_locations()[0]).unwrap();
        let json = suggest_seeds_json("high", Some(&kochi), &catalogue).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let names: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["seed"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Rice (Paddy)", "Banana", "Coconut", "Taro (Colocasia)", "Sugarcane"]
        );
        assert_eq!(value[0]["matchScore"], 100);
        assert_eq!(value[4]["matchScore"], 75);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(suggest_seeds_json("medium", None, "[]").is_err());
        assert!(suggest_seeds_json("high", Some("{"), "[]").is_err());
        assert!(suggest_seeds_json("high", None, "not json").is_err());
    }

    #[test]
    fn test_rainfall_type_check() {
        assert!(is_valid_rainfall_type("high"));
        assert!(is_valid_rainfall_type("low"));
        assert!(!is_valid_rainfall_type("moderate"));
    }

    #[test]
    fn test_temperature_window() {
        assert!(is_suitable_temperature(20.0));
        assert!(is_suitable_temperature(27.5));
        assert!(!is_suitable_temperature(30.5));
        assert!(!is_suitable_temperature(f64::NAN));
    }
}

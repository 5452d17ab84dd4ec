//! Validation utilities for catalogue records
//!
//! The loader runs these before writing reference data so that the
//! recommender only ever sees well-formed seeds and locations.

use rust_decimal::Decimal;

use crate::models::{Location, Seed};
use crate::types::{GpsCoordinates, RainfallType, TemperatureRange};

// ============================================================================
// Record Validations
// ============================================================================

/// Validate a seed record
pub fn validate_seed(seed: &Seed) -> Result<(), &'static str> {
    if seed.name.trim().is_empty() {
        return Err("Seed name cannot be empty");
    }
    if seed.climate_zone.trim().is_empty() {
        return Err("Seed climate zone cannot be empty");
    }
    Ok(())
}

/// Validate a location record
pub fn validate_location(location: &Location) -> Result<(), &'static str> {
    if location.name.trim().is_empty() {
        return Err("Location name cannot be empty");
    }
    if location.region.trim().is_empty() {
        return Err("Location region cannot be empty");
    }
    if location.annual_rainfall < 0 {
        return Err("Annual rainfall cannot be negative");
    }
    validate_temperature(&location.temperature)?;
    if let Some(coordinates) = &location.coordinates {
        validate_coordinates(coordinates)?;
    }
    Ok(())
}

// ============================================================================
// Field Validations
// ============================================================================

/// Validate that min <= average <= max
pub fn validate_temperature(temperature: &TemperatureRange) -> Result<(), &'static str> {
    if temperature.min > temperature.average || temperature.average > temperature.max {
        return Err("Temperature must satisfy min <= average <= max");
    }
    Ok(())
}

/// Validate latitude in [-90, 90] and longitude in [-180, 180]
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if coordinates.latitude < Decimal::from(-90) || coordinates.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if coordinates.longitude < Decimal::from(-180) || coordinates.longitude > Decimal::from(180)
    {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Parse a rainfall type, accepting only `high` or `low`
pub fn parse_rainfall_type(value: &str) -> Result<RainfallType, &'static str> {
    value
        .parse()
        .map_err(|_| "Rainfall type must be \"high\" or \"low\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{default_locations, default_seeds};

    #[test]
    fn test_reference_catalogue_is_valid() {
        for seed in default_seeds() {
            assert!(validate_seed(&seed).is_ok(), "{}", seed.name);
        }
        for location in default_locations() {
            assert!(validate_location(&location).is_ok(), "{}", location.name);
        }
    }

    #[test]
    fn test_temperature_ordering() {
        let ok = TemperatureRange::new(Decimal::from(15), Decimal::from(41), Decimal::from(28));
        assert!(validate_temperature(&ok).is_ok());

        let inverted =
            TemperatureRange::new(Decimal::from(30), Decimal::from(20), Decimal::from(25));
        assert!(validate_temperature(&inverted).is_err());

        let flat = TemperatureRange::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        assert!(validate_temperature(&flat).is_ok());
    }

    #[test]
    fn test_coordinate_bounds() {
        let kochi = GpsCoordinates::new(Decimal::new(99312, 4), Decimal::new(762673, 4));
        assert!(validate_coordinates(&kochi).is_ok());

        let north_pole = GpsCoordinates::new(Decimal::from(90), Decimal::from(-180));
        assert!(validate_coordinates(&north_pole).is_ok());

        let bad_lat = GpsCoordinates::new(Decimal::new(905, 1), Decimal::ZERO);
        assert!(validate_coordinates(&bad_lat).is_err());

        let bad_lon = GpsCoordinates::new(Decimal::ZERO, Decimal::from(181));
        assert!(validate_coordinates(&bad_lon).is_err());
    }

    #[test]
    fn test_negative_rainfall_rejected() {
        let mut location = default_locations().remove(0);
        location.annual_rainfall = -1;
        assert_eq!(
            validate_location(&location),
            Err("Annual rainfall cannot be negative")
        );
    }

    #[test]
    fn test_blank_seed_name_rejected() {
        let mut seed = default_seeds().remove(0);
        seed.name = "   ".to_string();
        assert!(validate_seed(&seed).is_err());
    }

    #[test]
    fn test_parse_rainfall_type() {
        assert_eq!(parse_rainfall_type("high"), Ok(RainfallType::High));
        assert_eq!(parse_rainfall_type("low"), Ok(RainfallType::Low));
        assert!(parse_rainfall_type("High").is_err());
        assert!(parse_rainfall_type("").is_err());
    }
}

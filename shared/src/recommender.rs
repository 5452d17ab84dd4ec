//! Seed recommender
//!
//! Filters the catalogue by rainfall requirement and scores every remaining
//! seed against an optional location with fixed additive bonuses:
//!
//! | Rule | Points |
//! |------|--------|
//! | rainfall match (always) | 70 |
//! | location region listed in suitable regions | +15 |
//! | identical climate zone | +10 |
//! | at least one shared soil type | +5 |
//! | location average temperature within 20-30 °C | +5 |
//!
//! Scores are clamped to 100 and the result is sorted best-first. Seeds with
//! equal scores keep their catalogue order.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Location, Seed, Suggestion};
use crate::types::RainfallType;

/// Point values and thresholds used by the recommender
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub base_score: u32,
    pub region_bonus: u32,
    pub climate_bonus: u32,
    pub soil_bonus: u32,
    pub temperature_bonus: u32,
    /// Lower bound of the suitable average temperature, inclusive
    pub temperature_min: Decimal,
    /// Upper bound of the suitable average temperature, inclusive
    pub temperature_max: Decimal,
    pub max_score: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_score: 70,
            region_bonus: 15,
            climate_bonus: 10,
            soil_bonus: 5,
            temperature_bonus: 5,
            temperature_min: Decimal::from(20),
            temperature_max: Decimal::from(30),
            max_score: 100,
        }
    }
}

/// Recommend seeds with the default scoring rules
pub fn recommend<'a>(
    target: RainfallType,
    location: Option<&'a Location>,
    catalogue: &'a [Seed],
) -> Vec<Suggestion<'a>> {
    ScoringRules::default().recommend(target, location, catalogue)
}

impl ScoringRules {
    /// Score every seed whose rainfall requirement equals `target`, best first
    pub fn recommend<'a>(
        &self,
        target: RainfallType,
        location: Option<&'a Location>,
        catalogue: &'a [Seed],
    ) -> Vec<Suggestion<'a>> {
        let mut suggestions: Vec<Suggestion<'a>> = catalogue
            .iter()
            .filter(|seed| seed.rainfall_requirement == target)
            .map(|seed| self.score(target, seed, location))
            .collect();

        // sort_by is stable, ties keep catalogue order
        suggestions.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        suggestions
    }

    /// Score a single seed that already matched the rainfall filter
    pub fn score<'a>(
        &self,
        target: RainfallType,
        seed: &'a Seed,
        location: Option<&'a Location>,
    ) -> Suggestion<'a> {
        let mut score = self.base_score;
        let mut reasons = vec![format!("Matches {} rainfall requirements", target)];

        if let Some(location) = location {
            if seed.suits_region(&location.region) {
                score = score.saturating_add(self.region_bonus);
                reasons.push(format!("Well-suited for {} region", location.region));
            }

            if seed.climate_zone == location.climate_zone {
                score = score.saturating_add(self.climate_bonus);
                reasons.push(format!(
                    "Perfect climate zone match: {}",
                    location.climate_zone
                ));
            }

            let common_soils = seed.common_soil_types(&location.soil_type);
            if !common_soils.is_empty() {
                score = score.saturating_add(self.soil_bonus);
                reasons.push(format!(
                    "Compatible soil types: {}",
                    common_soils.join(", ")
                ));
            }

            if self.is_suitable_temperature(location.temperature.average) {
                score = score.saturating_add(self.temperature_bonus);
                reasons.push("Suitable temperature range".to_string());
            }
        }

        Suggestion {
            seed,
            location,
            match_score: score.min(self.max_score),
            reasons,
        }
    }

    /// Whether an average temperature falls inside the suitable window
    pub fn is_suitable_temperature(&self, average: Decimal) -> bool {
        average >= self.temperature_min && average <= self.temperature_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TemperatureRange;
    use uuid::Uuid;

    fn seed(name: &str, rainfall: RainfallType) -> Seed {
        Seed {
            id: Uuid::new_v4(),
            name: name.to_string(),
            rainfall_requirement: rainfall,
            description: String::new(),
            growing_season: String::new(),
            water_requirement: String::new(),
            expected_yield: String::new(),
            suitable_regions: vec!["Kerala".to_string()],
            climate_zone: "Tropical Wet".to_string(),
            soil_type: vec!["Laterite".to_string()],
            planting_time: String::new(),
            harvest_time: String::new(),
        }
    }

    fn location(region: &str, zone: &str, soils: &[&str], average: i64) -> Location {
        Location {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            region: region.to_string(),
            country: "India".to_string(),
            rainfall_pattern: RainfallType::High,
            annual_rainfall: 2000,
            rainy_season: String::new(),
            climate_zone: zone.to_string(),
            temperature: TemperatureRange::new(
                Decimal::from(average - 5),
                Decimal::from(average + 5),
                Decimal::from(average),
            ),
            soil_type: soils.iter().map(|s| s.to_string()).collect(),
            coordinates: None,
        }
    }

    #[test]
    fn test_all_bonuses_fire() {
        let catalogue = vec![seed("Banana", RainfallType::High)];
        let kerala = location("Kerala", "Tropical Wet", &["Laterite", "Sandy Loam"], 27);

        let result = recommend(RainfallType::High, Some(&kerala), &catalogue);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].match_score, 100);
        assert_eq!(
            result[0].reasons,
            vec![
                "Matches high rainfall requirements",
                "Well-suited for Kerala region",
                "Perfect climate zone match: Tropical Wet",
                "Compatible soil types: Laterite",
                "Suitable temperature range",
            ]
        );
    }

    #[test]
    fn test_no_bonus_fires() {
        let catalogue = vec![seed("Banana", RainfallType::High)];
        let mumbai = location("Mumbai", "Tropical Dry", &["Sand"], 15);

        let result = recommend(RainfallType::High, Some(&mumbai), &catalogue);

        assert_eq!(result[0].match_score, 70);
        assert_eq!(result[0].reasons, vec!["Matches high rainfall requirements"]);
        assert_eq!(result[0].location, Some(&mumbai));
    }

    #[test]
    fn test_without_location_scores_base() {
        let catalogue = vec![seed("Rice", RainfallType::High), seed("Millet", RainfallType::Low)];

        let result = recommend(RainfallType::High, None, &catalogue);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].seed.name, "Rice");
        assert_eq!(result[0].match_score, 70);
        assert!(result[0].location.is_none());
    }

    #[test]
    fn test_unmatched_rainfall_yields_empty() {
        let catalogue = vec![seed("Rice", RainfallType::High)];
        assert!(recommend(RainfallType::Low, None, &catalogue).is_empty());
    }

    #[test]
    fn test_temperature_window_inclusive() {
        let rules = ScoringRules::default();
        assert!(rules.is_suitable_temperature(Decimal::from(20)));
        assert!(rules.is_suitable_temperature(Decimal::from(30)));
        assert!(!rules.is_suitable_temperature(Decimal::new(199, 1)));
        assert!(!rules.is_suitable_temperature(Decimal::new(301, 1)));
    }

    #[test]
    fn test_soil_intersection_keeps_seed_order() {
        let mut banana = seed("Banana", RainfallType::High);
        banana.soil_type = vec!["Loamy".into(), "Laterite".into(), "Alluvial".into()];
        let catalogue = vec![banana];
        let loc = location("Assam", "Humid", &["Alluvial", "Loamy"], 10);

        let result = recommend(RainfallType::High, Some(&loc), &catalogue);

        assert_eq!(result[0].match_score, 75);
        assert_eq!(result[0].reasons[1], "Compatible soil types: Loamy, Alluvial");
    }

    #[test]
    fn test_empty_sets_contribute_nothing() {
        let mut bare = seed("Bare", RainfallType::High);
        bare.suitable_regions.clear();
        bare.soil_type.clear();
        let catalogue = vec![bare];
        let loc = location("Kerala", "Arid", &["Laterite"], 10);

        let result = recommend(RainfallType::High, Some(&loc), &catalogue);
        assert_eq!(result[0].match_score, 70);
    }

    #[test]
    fn test_clamped_to_max_score() {
        let rules = ScoringRules {
            region_bonus: 40,
            ..ScoringRules::default()
        };
        let catalogue = vec![seed("Banana", RainfallType::High)];
        let kerala = location("Kerala", "Tropical Wet", &["Laterite"], 25);

        let result = rules.recommend(RainfallType::High, Some(&kerala), &catalogue);
        assert_eq!(result[0].match_score, 100);
        assert_eq!(result[0].reasons.len(), 5);
    }

    #[test]
    fn test_ties_keep_catalogue_order() {
        let mut other = seed("Other", RainfallType::High);
        other.suitable_regions = vec!["Goa".into()];
        let catalogue = vec![
            seed("First", RainfallType::High),
            other,
            seed("Second", RainfallType::High),
            seed("Third", RainfallType::High),
        ];
        let kerala = location("Kerala", "Arid", &[], 10);

        let names: Vec<&str> = recommend(RainfallType::High, Some(&kerala), &catalogue)
            .iter()
            .map(|s| s.seed.name.as_str())
            .collect();

        assert_eq!(names, vec!["First", "Second", "Third", "Other"]);
    }
}

//! Seed suggestion models and request resolution

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Location, Seed};
use crate::recommender::ScoringRules;
use crate::types::RainfallType;

/// A scored pairing of one seed with the location it was scored against
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion<'a> {
    pub seed: &'a Seed,
    /// `None` when the request carried no resolvable location
    pub location: Option<&'a Location>,
    pub match_score: u32,
    /// Reasons in the order the scoring rules fired
    pub reasons: Vec<String>,
}

/// Raw body of a suggestion request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSeedsRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub rainfall_type: Option<String>,
}

/// Read any JSON scalar as text, so `{"rainfallType": 5}` fails validation
/// instead of failing to parse. `null` reads as absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarText)
        }
    }

    deserializer.deserialize_any(ScalarText)
}

/// Rejections raised while turning a request into a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("Either location or rainfallType must be provided")]
    MissingCriteria,

    #[error("Invalid rainfall type. Must be \"high\" or \"low\".")]
    InvalidRainfallType,
}

impl InvalidRequest {
    /// Request field the rejection refers to
    pub fn field(&self) -> &'static str {
        match self {
            InvalidRequest::MissingCriteria => "location",
            InvalidRequest::InvalidRainfallType => "rainfallType",
        }
    }
}

/// A suggestion request that has passed boundary validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionQuery {
    /// Look the location up; its rainfall pattern wins when it exists
    ByLocation {
        location_id: String,
        fallback_rainfall: Option<String>,
    },
    ByRainfall(RainfallType),
}

/// Query with the effective rainfall type settled
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub rainfall: RainfallType,
    pub location: Option<Location>,
}

/// Response body of a suggestion request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse<'a> {
    pub suggestions: Vec<Suggestion<'a>>,
    pub count: usize,
    pub location: Option<&'a Location>,
    pub rainfall_type: RainfallType,
}

impl SuggestSeedsRequest {
    /// Validate the request shape
    pub fn into_query(self) -> Result<SuggestionQuery, InvalidRequest> {
        let location = self.location.filter(|l| !l.is_empty());
        let rainfall = self.rainfall_type.filter(|r| !r.is_empty());

        match (location, rainfall) {
            (None, None) => Err(InvalidRequest::MissingCriteria),
            (Some(location_id), fallback_rainfall) => Ok(SuggestionQuery::ByLocation {
                location_id,
                fallback_rainfall,
            }),
            (None, Some(rainfall)) => parse_rainfall(&rainfall).map(SuggestionQuery::ByRainfall),
        }
    }
}

impl SuggestionQuery {
    /// Identifier to look up before resolving, if any
    pub fn location_id(&self) -> Option<&str> {
        match self {
            SuggestionQuery::ByLocation { location_id, .. } => Some(location_id),
            SuggestionQuery::ByRainfall(_) => None,
        }
    }

    /// Settle the effective rainfall type given the looked-up location
    pub fn resolve(self, found: Option<Location>) -> Result<ResolvedQuery, InvalidRequest> {
        match self {
            SuggestionQuery::ByRainfall(rainfall) => Ok(ResolvedQuery {
                rainfall,
                location: None,
            }),
            SuggestionQuery::ByLocation {
                fallback_rainfall, ..
            } => match found {
                Some(location) => Ok(ResolvedQuery {
                    rainfall: location.rainfall_pattern,
                    location: Some(location),
                }),
                None => {
                    let raw = fallback_rainfall.ok_or(InvalidRequest::InvalidRainfallType)?;
                    let rainfall = parse_rainfall(&raw)?;
                    Ok(ResolvedQuery {
                        rainfall,
                        location: None,
                    })
                }
            },
        }
    }
}

impl ResolvedQuery {
    /// Score the catalogue and build the response body
    pub fn respond<'a>(&'a self, rules: &ScoringRules, catalogue: &'a [Seed]) -> SuggestionResponse<'a> {
        let suggestions = rules.recommend(self.rainfall, self.location.as_ref(), catalogue);

        SuggestionResponse {
            count: suggestions.len(),
            suggestions,
            location: self.location.as_ref(),
            rainfall_type: self.rainfall,
        }
    }
}

fn parse_rainfall(raw: &str) -> Result<RainfallType, InvalidRequest> {
    raw.parse().map_err(|_| InvalidRequest::InvalidRainfallType)
}

use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A point of interest returned by the places provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    pub location: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_reference: Option<String>,
}

impl Place {
    /// True if any of the place's category tags appears in `categories`.
    pub fn has_any_type(&self, categories: &[&str]) -> bool {
        self.types.iter().any(|t| categories.contains(&t.as_str()))
    }
}

/// User preference flags affecting candidate scores.
///
/// Flags left out of the request default to false; unknown flags in the
/// request body are ignored rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub scenic: bool,
    #[serde(default)]
    pub cultural: bool,
    #[serde(default)]
    pub food: bool,
    #[serde(default)]
    pub prefer_parks: bool,
    #[serde(default)]
    pub urban_explorer: bool,
    #[serde(default)]
    pub water_stops: bool,
}

/// A place annotated with its computed score and distance from the
/// query origin, ready to be returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPlace {
    #[serde(flatten)]
    pub place: Place,
    /// Distance from the query origin, rounded to 2 decimals
    pub distance_miles: f64,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

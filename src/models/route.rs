use crate::models::{Coordinates, Preferences, ScoredPlace};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct SuggestPlacesRequest {
    pub location: Option<Coordinates>,
    #[serde(default)]
    pub distance_miles: Option<f64>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl SuggestPlacesRequest {
    pub fn validate(&self) -> Result<(), String> {
        let location = self.location.ok_or("Missing location")?;
        Coordinates::new(location.lat, location.lng)?;
        if let Some(distance) = self.distance_miles {
            if distance <= 0.0 {
                return Err("distance_miles must be positive".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestPlacesResponse {
    pub places: Vec<ScoredPlace>,
    /// Unique candidates found across all category queries, before
    /// truncation to the top results
    pub total_found: usize,
}

/// A place the user picked for their route. Only the location is
/// interpreted; every other field round-trips untouched so the caller
/// gets back the same records it sent, reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedPlace {
    pub location: Coordinates,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRouteRequest {
    pub start: Option<Coordinates>,
    #[serde(default)]
    pub selected_places: Vec<SelectedPlace>,
    #[serde(default)]
    #[allow(dead_code)]
    pub preferences: Preferences,
}

impl GenerateRouteRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.start.is_none() || self.selected_places.is_empty() {
            return Err("Missing start or selected_places".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RouteSummary {
    /// Total loop distance in miles, rounded to 1 decimal
    pub distance_miles: f64,
    /// Selected places in provider-optimized visiting order
    pub optimized_order: Vec<SelectedPlace>,
    pub google_maps_url: String,
    pub estimated_time_minutes: u32,
}

use crate::error::{AppError, Result};
use crate::models::Coordinates;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

#[derive(Debug, Clone)]
pub struct DirectionsRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    /// Intermediate stops in caller order; empty for out-and-back routes
    pub waypoints: Vec<Coordinates>,
    pub optimize_waypoints: bool,
}

/// A walking route as returned by the directions provider.
#[derive(Debug, Clone)]
pub struct DirectionsRoute {
    /// Distance of each route leg in meters
    pub leg_distances_meters: Vec<f64>,
    /// Optimized visiting order as indices into the request waypoints,
    /// absent when the provider did not reorder
    pub waypoint_order: Option<Vec<usize>>,
}

impl DirectionsRoute {
    pub fn total_distance_meters(&self) -> f64 {
        self.leg_distances_meters.iter().sum()
    }
}

/// Capability consumed by the route builder. `Ok(None)` means the
/// provider answered but found no usable route, which is distinct from
/// a transport or provider failure.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn route(&self, request: &DirectionsRequest) -> Result<Option<DirectionsRoute>>;
}

#[derive(Clone)]
pub struct GoogleDirectionsClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleDirectionsClient {
    pub fn new(api_key: Option<String>) -> Self {
        GoogleDirectionsClient {
            client: Client::new(),
            api_key,
            base_url: DIRECTIONS_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        GoogleDirectionsClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(AppError::Configuration)
    }
}

fn format_coordinates(c: &Coordinates) -> String {
    format!("{},{}", c.lat, c.lng)
}

#[async_trait]
impl DirectionsProvider for GoogleDirectionsClient {
    async fn route(&self, request: &DirectionsRequest) -> Result<Option<DirectionsRoute>> {
        let api_key = self.api_key()?;

        let mut query: Vec<(&str, String)> = vec![
            ("origin", format_coordinates(&request.origin)),
            ("destination", format_coordinates(&request.destination)),
            ("mode", "walking".to_string()),
            ("avoid", "highways".to_string()),
            ("units", "imperial".to_string()),
            ("key", api_key.to_string()),
        ];

        if !request.waypoints.is_empty() {
            let joined = request
                .waypoints
                .iter()
                .map(format_coordinates)
                .collect::<Vec<_>>()
                .join("|");
            let value = if request.optimize_waypoints {
                format!("optimize:true|{}", joined)
            } else {
                joined
            };
            query.push(("waypoints", value));
        }

        tracing::debug!(
            waypoints = request.waypoints.len(),
            optimize = request.optimize_waypoints,
            "Directions request: {} waypoints, optimize={}",
            request.waypoints.len(), request.optimize_waypoints
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::DirectionsApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: DirectionsApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Failed to parse response: {}", e)))?;

        if body.status == "ZERO_RESULTS" || body.routes.is_empty() {
            tracing::warn!(
                waypoints = request.waypoints.len(),
                "Directions provider returned no routes"
            );
            return Ok(None);
        }

        if body.status != "OK" {
            return Err(AppError::DirectionsApi(format!(
                "Provider status: {}",
                body.status
            )));
        }

        let route = &body.routes[0];
        let leg_distances_meters: Vec<f64> =
            route.legs.iter().map(|leg| leg.distance.value).collect();

        tracing::debug!(
            legs = leg_distances_meters.len(),
            distance_m = %format!("{:.0}", leg_distances_meters.iter().sum::<f64>()),
            "Directions response: {} legs",
            leg_distances_meters.len()
        );

        Ok(Some(DirectionsRoute {
            leg_distances_meters,
            waypoint_order: route.waypoint_order.clone(),
        }))
    }
}

// Directions API response types

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    #[serde(default)]
    routes: Vec<ApiRoute>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    legs: Vec<ApiLeg>,
    waypoint_order: Option<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    distance: ApiDistance,
}

#[derive(Debug, Deserialize)]
struct ApiDistance {
    /// Meters
    value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_without_key_is_configuration_error() {
        let client = GoogleDirectionsClient::new(None);
        let request = DirectionsRequest {
            origin: Coordinates::new(40.7128, -74.0060).unwrap(),
            destination: Coordinates::new(40.7128, -74.0060).unwrap(),
            waypoints: vec![],
            optimize_waypoints: false,
        };
        let result = tokio_test::block_on(client.route(&request));
        assert!(matches!(result, Err(AppError::Configuration)));
    }

    #[test]
    fn test_response_parsing() {
        let body: DirectionsApiResponse = serde_json::from_value(json!({
            "status": "OK",
            "routes": [{
                "legs": [
                    {"distance": {"value": 1200.0, "text": "0.7 mi"}},
                    {"distance": {"value": 800.0, "text": "0.5 mi"}}
                ],
                "waypoint_order": [1, 0]
            }]
        }))
        .unwrap();

        assert_eq!(body.status, "OK");
        assert_eq!(body.routes[0].legs.len(), 2);
        assert_eq!(body.routes[0].waypoint_order, Some(vec![1, 0]));
    }

    #[test]
    fn test_total_distance() {
        let route = DirectionsRoute {
            leg_distances_meters: vec![1200.0, 800.0, 500.0],
            waypoint_order: None,
        };
        assert_eq!(route.total_distance_meters(), 2500.0);
    }

    #[test]
    fn test_format_coordinates() {
        let c = Coordinates::new(40.7128, -74.006).unwrap();
        assert_eq!(format_coordinates(&c), "40.7128,-74.006");
    }
}

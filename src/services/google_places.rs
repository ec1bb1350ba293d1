use crate::constants::PHOTO_MAX_WIDTH;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Place};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const PLACES_NEARBY_BASE_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const PLACE_PHOTO_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";

/// Capability consumed by the discovery pipeline: given a location and a
/// search category, return candidate places. Individual calls may fail;
/// the caller is expected to tolerate per-category failures.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    async fn search_nearby(
        &self,
        location: &Coordinates,
        radius_meters: f64,
        category: &str,
    ) -> Result<Vec<Place>>;

    /// Build a displayable photo URL from a provider photo reference.
    fn photo_url(&self, photo_reference: &str) -> String;
}

#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GooglePlacesClient {
    pub fn new(api_key: Option<String>) -> Self {
        GooglePlacesClient {
            client: Client::new(),
            api_key,
            base_url: PLACES_NEARBY_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        GooglePlacesClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(AppError::Configuration)
    }
}

#[async_trait]
impl PlaceProvider for GooglePlacesClient {
    async fn search_nearby(
        &self,
        location: &Coordinates,
        radius_meters: f64,
        category: &str,
    ) -> Result<Vec<Place>> {
        let api_key = self.api_key()?;

        tracing::debug!(
            lat = location.lat,
            lng = location.lng,
            radius_m = radius_meters,
            category = category,
            "Places nearby search: ({:.4}, {:.4}), {:.0}m, {}",
            location.lat, location.lng, radius_meters, category
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("location", format!("{},{}", location.lat, location.lng)),
                ("radius", format!("{:.0}", radius_meters)),
                ("type", category.to_string()),
                ("key", api_key.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::PlacesApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Failed to parse response: {}", e)))?;

        if body.status != "OK" && body.status != "ZERO_RESULTS" {
            return Err(AppError::PlacesApi(format!(
                "Provider status: {}",
                body.status
            )));
        }

        let places: Vec<Place> = body
            .results
            .into_iter()
            .filter_map(ProviderPlace::into_place)
            .collect();

        tracing::debug!(
            category = category,
            count = places.len(),
            "Places nearby search returned {} results for {}",
            places.len(), category
        );

        Ok(places)
    }

    fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{}?maxwidth={}&photo_reference={}&key={}",
            PLACE_PHOTO_BASE_URL,
            PHOTO_MAX_WIDTH,
            urlencoding::encode(photo_reference),
            self.api_key.as_deref().unwrap_or_default()
        )
    }
}

// Provider API response types

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<ProviderPlace>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ProviderPlace {
    place_id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    rating: Option<f64>,
    #[serde(default)]
    user_ratings_total: u32,
    vicinity: Option<String>,
    geometry: ProviderGeometry,
    #[serde(default)]
    photos: Vec<ProviderPhoto>,
}

#[derive(Debug, Deserialize)]
struct ProviderGeometry {
    location: ProviderLocation,
}

#[derive(Debug, Deserialize)]
struct ProviderLocation {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct ProviderPhoto {
    photo_reference: Option<String>,
}

impl ProviderPlace {
    /// Convert a raw provider record, dropping results without an id,
    /// a name, or a valid location.
    fn into_place(self) -> Option<Place> {
        let id = self.place_id?;
        let name = self.name?;
        let location =
            Coordinates::new(self.geometry.location.lat, self.geometry.location.lng).ok()?;
        let photo_reference = self
            .photos
            .into_iter()
            .next()
            .and_then(|p| p.photo_reference);

        Some(Place {
            id,
            name,
            types: self.types,
            rating: self.rating,
            user_ratings_total: self.user_ratings_total,
            vicinity: self.vicinity,
            location,
            photo_reference,
        })
    }
}

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use wanderloop::models::{Coordinates, Place};
use wanderloop::services::google_directions::{
    DirectionsProvider, DirectionsRequest, DirectionsRoute,
};
use wanderloop::services::google_places::PlaceProvider;
use wanderloop::{AppError, Result};

/// Create a test place
#[allow(dead_code)]
pub fn create_test_place(id: &str, name: &str, types: &[&str], lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        rating: Some(4.0),
        user_ratings_total: 150,
        vicinity: Some(format!("Near {}", name)),
        location: Coordinates::new(lat, lng).unwrap(),
        photo_reference: None,
    }
}

/// In-memory stand-in for the places provider. Categories map to canned
/// results; categories listed in `failing` return an upstream error.
/// Queried categories are recorded for assertions.
pub struct MockPlaceProvider {
    pub results: HashMap<String, Vec<Place>>,
    pub failing: Vec<String>,
    pub queried: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockPlaceProvider {
    pub fn new() -> Self {
        MockPlaceProvider {
            results: HashMap::new(),
            failing: Vec::new(),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn with_results(mut self, category: &str, places: Vec<Place>) -> Self {
        self.results.insert(category.to_string(), places);
        self
    }

    pub fn with_failure(mut self, category: &str) -> Self {
        self.failing.push(category.to_string());
        self
    }

    pub fn queried_categories(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaceProvider for MockPlaceProvider {
    async fn search_nearby(
        &self,
        _location: &Coordinates,
        _radius_meters: f64,
        category: &str,
    ) -> Result<Vec<Place>> {
        self.queried.lock().unwrap().push(category.to_string());

        if self.failing.iter().any(|c| c == category) {
            return Err(AppError::PlacesApi(format!(
                "simulated outage for {}",
                category
            )));
        }

        Ok(self.results.get(category).cloned().unwrap_or_default())
    }

    fn photo_url(&self, photo_reference: &str) -> String {
        format!("https://photos.test/{}", photo_reference)
    }
}

/// Directions provider returning a canned route (or `None` for the
/// no-route case). Requests are captured for assertions.
pub struct MockDirectionsProvider {
    pub route: Option<DirectionsRoute>,
    pub fail: bool,
    pub requests: Mutex<Vec<DirectionsRequest>>,
}

#[allow(dead_code)]
impl MockDirectionsProvider {
    pub fn returning(route: DirectionsRoute) -> Self {
        MockDirectionsProvider {
            route: Some(route),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn no_route() -> Self {
        MockDirectionsProvider {
            route: None,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        MockDirectionsProvider {
            route: None,
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> Option<DirectionsRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DirectionsProvider for MockDirectionsProvider {
    async fn route(&self, request: &DirectionsRequest) -> Result<Option<DirectionsRoute>> {
        self.requests.lock().unwrap().push(request.clone());

        if self.fail {
            return Err(AppError::DirectionsApi("simulated outage".to_string()));
        }

        Ok(self.route.clone())
    }
}

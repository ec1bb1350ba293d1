use crate::constants::{METERS_PER_MILE, WALKING_MINUTES_PER_MILE};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, RouteSummary, SelectedPlace};
use crate::services::google_directions::{DirectionsProvider, DirectionsRequest};
use std::collections::HashSet;
use std::sync::Arc;

const MAPS_DIR_BASE_URL: &str = "https://www.google.com/maps/dir/";

pub struct RouteBuilder {
    directions: Arc<dyn DirectionsProvider>,
}

impl RouteBuilder {
    pub fn new(directions: Arc<dyn DirectionsProvider>) -> Self {
        RouteBuilder { directions }
    }

    /// Build a closed walking loop from `start` through the selected
    /// places and back.
    ///
    /// With two or more places the provider is asked to optimize the
    /// waypoint order and the returned indices are reconciled against
    /// the input list. A single place becomes an out-and-back route
    /// with no waypoints and no reordering.
    pub async fn build_loop(
        &self,
        start: Coordinates,
        selected_places: &[SelectedPlace],
    ) -> Result<RouteSummary> {
        if selected_places.is_empty() {
            return Err(AppError::InvalidRequest(
                "Missing start or selected_places".to_string(),
            ));
        }

        let single_place = selected_places.len() == 1;

        let request = if single_place {
            DirectionsRequest {
                origin: start,
                destination: selected_places[0].location,
                waypoints: vec![],
                optimize_waypoints: false,
            }
        } else {
            DirectionsRequest {
                origin: start,
                destination: start,
                waypoints: selected_places.iter().map(|p| p.location).collect(),
                optimize_waypoints: true,
            }
        };

        let route = self
            .directions
            .route(&request)
            .await?
            .ok_or(AppError::NoRouteFound)?;

        let distance_miles =
            (route.total_distance_meters() / METERS_PER_MILE * 10.0).round() / 10.0;

        let optimized_order = if single_place {
            // No waypoints were sent, so any order the provider reports
            // is meaningless here
            selected_places.to_vec()
        } else {
            reorder(selected_places, route.waypoint_order.as_deref())
        };

        let google_maps_url = build_maps_url(&start, &optimized_order);
        let estimated_time_minutes = (distance_miles * WALKING_MINUTES_PER_MILE) as u32;

        tracing::info!(
            places = optimized_order.len(),
            distance_miles = distance_miles,
            "Built loop route: {} places, {:.1} miles",
            optimized_order.len(), distance_miles
        );

        Ok(RouteSummary {
            distance_miles,
            optimized_order,
            google_maps_url,
            estimated_time_minutes,
        })
    }
}

/// Apply the provider's optimized waypoint order. Falls back to the
/// input order when the provider omits it or the indices don't form a
/// usable permutation.
fn reorder(places: &[SelectedPlace], order: Option<&[usize]>) -> Vec<SelectedPlace> {
    match order {
        Some(indices) if indices.len() == places.len() => {
            let mut seen = HashSet::new();
            let reordered: Vec<SelectedPlace> = indices
                .iter()
                .filter(|&&i| seen.insert(i))
                .filter_map(|&i| places.get(i).cloned())
                .collect();
            if reordered.len() == places.len() {
                reordered
            } else {
                places.to_vec()
            }
        }
        _ => places.to_vec(),
    }
}

fn format_coordinates(c: &Coordinates) -> String {
    format!("{},{}", format_axis(c.lat), format_axis(c.lng))
}

// Whole-number axes keep a trailing `.0` so `-74.0` never collapses to `-74`
// in the shared URL
fn format_axis(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Shareable directions link. Destination always equals origin: even
/// for an out-and-back route the lone stop rides in `waypoints` rather
/// than replacing the destination. Downstream consumers depend on this
/// exact shape; keep it as-is.
fn build_maps_url(start: &Coordinates, ordered: &[SelectedPlace]) -> String {
    let origin = format_coordinates(start);
    let waypoints = ordered
        .iter()
        .map(|p| format_coordinates(&p.location))
        .collect::<Vec<_>>()
        .join("|");

    format!(
        "{}?api=1&origin={}&destination={}&waypoints={}&travelmode=walking",
        MAPS_DIR_BASE_URL, origin, origin, waypoints
    )
}

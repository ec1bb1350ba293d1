use crate::error::{AppError, Result};
use crate::models::{SuggestPlacesRequest, SuggestPlacesResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /places/suggest
/// Score and rank points of interest near a location
pub async fn suggest_places(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SuggestPlacesRequest>,
) -> Result<Json<SuggestPlacesResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    // validate() guarantees location is present
    let origin = request
        .location
        .ok_or_else(|| AppError::InvalidRequest("Missing location".to_string()))?;
    let radius_miles = request
        .distance_miles
        .unwrap_or(state.default_search_radius_miles);

    tracing::info!(
        lat = origin.lat,
        lng = origin.lng,
        radius_miles = radius_miles,
        "Suggest places request: ({:.4}, {:.4}), {:.1} miles",
        origin.lat, origin.lng, radius_miles
    );

    let result = state
        .discovery
        .suggest(&origin, radius_miles, &request.preferences)
        .await?;

    Ok(Json(SuggestPlacesResponse {
        places: result.places,
        total_found: result.total_found,
    }))
}

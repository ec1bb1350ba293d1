use crate::error::{AppError, Result};
use crate::models::{GenerateRouteRequest, RouteSummary};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/generate
/// Construct a walking loop through the selected places
pub async fn generate_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRouteRequest>,
) -> Result<Json<RouteSummary>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    let start = request
        .start
        .ok_or_else(|| AppError::InvalidRequest("Missing start or selected_places".to_string()))?;

    tracing::info!(
        lat = start.lat,
        lng = start.lng,
        places = request.selected_places.len(),
        "Generate route request: ({:.4}, {:.4}), {} places",
        start.lat, start.lng, request.selected_places.len()
    );

    let summary = state
        .route_builder
        .build_loop(start, &request.selected_places)
        .await?;

    Ok(Json(summary))
}

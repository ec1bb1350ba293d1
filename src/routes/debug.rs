use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if the service is up and configured
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "checks": {
            "places_api_key": if state.places_key_configured { "ok" } else { "missing" },
            "directions_api_key": if state.directions_key_configured { "ok" } else { "missing" },
        }
    }))
}

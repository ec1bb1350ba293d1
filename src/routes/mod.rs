pub mod debug;
pub mod suggest;
pub mod trip;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Permissive CORS so browser clients on any origin can call the API;
    // the layer also answers preflight OPTIONS requests
    Router::new()
        .route("/places/suggest", post(suggest::suggest_places))
        .route("/routes/generate", post(trip::generate_route))
        .route("/debug/health", get(debug::health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

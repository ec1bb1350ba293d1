use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API key not configured")]
    Configuration,

    #[error("Places API error: {0}")]
    PlacesApi(String),

    #[error("Directions API error: {0}")]
    DirectionsApi(String),

    #[error("No route found")]
    NoRouteFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::Configuration => {
                // Fixed message: never echo which credential is missing
                tracing::error!("Provider API key missing from configuration");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "API key not configured".to_string(),
                )
            }
            AppError::PlacesApi(ref e) => {
                tracing::error!("Places API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Places service error".to_string())
            }
            AppError::DirectionsApi(ref e) => {
                tracing::error!("Directions API error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Routing service error".to_string(),
                )
            }
            AppError::NoRouteFound => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No route found".to_string(),
            ),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.clone())
            }
        };

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

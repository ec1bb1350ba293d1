use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wanderloop::config::Config;
use wanderloop::services::discovery::DiscoveryService;
use wanderloop::services::google_directions::{DirectionsProvider, GoogleDirectionsClient};
use wanderloop::services::google_places::{GooglePlacesClient, PlaceProvider};
use wanderloop::services::route_builder::RouteBuilder;
use wanderloop::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wanderloop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Wanderloop API server");
    if config.places_api_key.is_none() {
        tracing::warn!("Places API key not configured; suggestion requests will fail");
    }
    if config.directions_api_key.is_none() {
        tracing::warn!("Directions API key not configured; route requests will fail");
    }

    // Initialize services
    let place_provider: Arc<dyn PlaceProvider> =
        Arc::new(GooglePlacesClient::new(config.places_api_key.clone()));
    let directions_provider: Arc<dyn DirectionsProvider> = Arc::new(GoogleDirectionsClient::new(
        config.directions_api_key.clone(),
    ));

    let discovery = DiscoveryService::new(place_provider, config.scoring_strategy);
    let route_builder = RouteBuilder::new(directions_provider);

    // Create application state
    let state = Arc::new(AppState {
        discovery,
        route_builder,
        default_search_radius_miles: config.default_search_radius_miles,
        places_key_configured: config.places_api_key.is_some(),
        directions_key_configured: config.directions_api_key.is_some(),
    });

    // Build router with request tracing; CORS is applied inside the router
    let app = Router::new()
        .nest("/api/v1", wanderloop::routes::create_router(state))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::discovery::DiscoveryService;
use services::route_builder::RouteBuilder;

// App state for sharing across the application
pub struct AppState {
    pub discovery: DiscoveryService,
    pub route_builder: RouteBuilder,
    pub default_search_radius_miles: f64,
    pub places_key_configured: bool,
    pub directions_key_configured: bool,
}

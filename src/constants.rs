//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geometry ---

/// Earth's mean radius in miles, for haversine distance.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;
/// Conversion factor between meters and statute miles.
pub const METERS_PER_MILE: f64 = 1609.34;

// --- Discovery defaults and limits ---

/// Search radius used when the request omits `distance_miles`.
/// Overridden by `DEFAULT_SEARCH_RADIUS_MILES`.
pub const DEFAULT_SEARCH_RADIUS_MILES: f64 = 3.0;
/// Suggestions are truncated to this many top-scored places.
pub const MAX_SUGGESTED_PLACES: usize = 15;
/// Width requested for provider photo thumbnails.
pub const PHOTO_MAX_WIDTH: u32 = 400;

// --- Route estimation ---

/// Fixed walking pace assumption used for the time estimate.
pub const WALKING_MINUTES_PER_MILE: f64 = 15.0;

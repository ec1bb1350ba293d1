use super::{PlaceScoringStrategy, ScoringContext};
use crate::constants::METERS_PER_MILE;
use crate::models::{Place, Preferences};

/// Popularity multiplier tiers by review count, evaluated high to low.
const POPULARITY_TIERS: &[(u32, f64)] = &[
    (10_000, 5.0),
    (2_000, 3.0),
    (500, 2.0),
    (100, 1.3),
];

/// Multiplicative category adjustments. Each group applies at most once;
/// order is irrelevant since multiplication commutes.
const CATEGORY_MULTIPLIERS: &[(&[&str], f64)] = &[
    (&["tourist_attraction", "landmark", "monument"], 3.0),
    (&["park"], 1.2),
    (&["natural_feature", "scenic_point"], 1.2),
    // Generic food stops rank below actual attractions
    (&["cafe", "restaurant"], 0.5),
];

const PARKS_CATEGORIES: &[&str] = &["park"];
const URBAN_CATEGORIES: &[&str] = &["museum", "art_gallery", "historical"];

const PREFERENCE_MULTIPLIER: f64 = 1.5;

const DEFAULT_RATING: f64 = 3.0;
const DEFAULT_REVIEW_COUNT: u32 = 1;

/// Fraction of the score shaved off at the edge of the search radius.
const DISTANCE_PENALTY_WEIGHT: f64 = 0.3;
/// Distance penalty never reduces a score below half.
const DISTANCE_PENALTY_FLOOR: f64 = 0.5;

const BASE_CATEGORY_GROUPS: &[&[&str]] = &[
    &["tourist_attraction", "museum", "park", "landmark"],
    &["point_of_interest", "natural_feature"],
];

const WATER_STOP_CATEGORIES: &[&str] = &["cafe", "restaurant"];

/// Popularity-tiered multiplicative scoring with a distance penalty,
/// used by the route-aware suggestion flow.
pub struct TieredStrategy;

impl PlaceScoringStrategy for TieredStrategy {
    fn score(&self, place: &Place, context: &ScoringContext) -> f64 {
        let rating = place.rating.unwrap_or(DEFAULT_RATING);
        let review_count = if place.user_ratings_total > 0 {
            place.user_ratings_total
        } else {
            DEFAULT_REVIEW_COUNT
        };

        let mut score = rating * popularity_multiplier(review_count);

        for (categories, multiplier) in CATEGORY_MULTIPLIERS {
            if place.has_any_type(categories) {
                score *= multiplier;
            }
        }

        if context.preferences.prefer_parks && place.has_any_type(PARKS_CATEGORIES) {
            score *= PREFERENCE_MULTIPLIER;
        }
        if context.preferences.urban_explorer && place.has_any_type(URBAN_CATEGORIES) {
            score *= PREFERENCE_MULTIPLIER;
        }

        score * distance_factor(place, context)
    }

    fn categories(&self, preferences: &Preferences) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> =
            BASE_CATEGORY_GROUPS.iter().flat_map(|g| g.iter().copied()).collect();
        if preferences.water_stops {
            categories.extend_from_slice(WATER_STOP_CATEGORIES);
        }
        categories
    }
}

fn popularity_multiplier(review_count: u32) -> f64 {
    for (threshold, multiplier) in POPULARITY_TIERS {
        if review_count >= *threshold {
            return *multiplier;
        }
    }
    1.0
}

/// Down-weight places far from the origin relative to the search radius.
/// A non-positive radius disables the penalty.
fn distance_factor(place: &Place, context: &ScoringContext) -> f64 {
    if context.radius_meters <= 0.0 {
        return 1.0;
    }

    let distance_meters = context.origin.distance_miles_to(&place.location) * METERS_PER_MILE;
    (1.0 - (distance_meters / context.radius_meters) * DISTANCE_PENALTY_WEIGHT)
        .max(DISTANCE_PENALTY_FLOOR)
}

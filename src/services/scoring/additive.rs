use super::{PlaceScoringStrategy, ScoringContext};
use crate::models::{Place, Preferences};

/// Flat bonus points per category tag. Bonuses from multiple matching
/// tags all add; there is no cap.
const CATEGORY_BONUSES: &[(&str, f64)] = &[
    ("tourist_attraction", 15.0),
    ("museum", 12.0),
    ("art_gallery", 12.0),
    ("park", 10.0),
    ("cafe", 8.0),
    ("restaurant", 6.0),
    ("point_of_interest", 5.0),
];

/// Review count at which the reliability multiplier saturates.
const REVIEW_RELIABILITY_CAP: f64 = 100.0;

const SCENIC_CATEGORIES: &[&str] = &["park", "natural_feature", "tourist_attraction"];
const CULTURAL_CATEGORIES: &[&str] = &["museum", "art_gallery", "library"];
const FOOD_CATEGORIES: &[&str] = &["cafe", "restaurant", "bakery"];

const PREFERENCE_MULTIPLIER: f64 = 1.3;

const SEARCH_CATEGORIES: &[&str] = &[
    "tourist_attraction",
    "park",
    "museum",
    "art_gallery",
    "cafe",
    "restaurant",
    "point_of_interest",
];

/// Additive-weighted scoring: rating-based base score, flat category
/// bonuses, then compounding preference multipliers.
pub struct AdditiveStrategy;

impl PlaceScoringStrategy for AdditiveStrategy {
    fn score(&self, place: &Place, context: &ScoringContext) -> f64 {
        let mut score = 0.0;

        // More reviews make the rating more reliable, up to a cap.
        // Past the cap only the rating itself matters.
        if let Some(rating) = place.rating {
            if rating > 0.0 && place.user_ratings_total > 0 {
                let reliability =
                    (f64::from(place.user_ratings_total) / REVIEW_RELIABILITY_CAP).min(1.0);
                score += rating * reliability * 20.0;
            }
        }

        for (category, bonus) in CATEGORY_BONUSES {
            if place.types.iter().any(|t| t == category) {
                score += bonus;
            }
        }

        score *= preference_multiplier(place, context.preferences);

        (score * 100.0).round() / 100.0
    }

    fn categories(&self, _preferences: &Preferences) -> Vec<&'static str> {
        SEARCH_CATEGORIES.to_vec()
    }
}

fn preference_multiplier(place: &Place, preferences: &Preferences) -> f64 {
    let mut multiplier = 1.0;
    if preferences.scenic && place.has_any_type(SCENIC_CATEGORIES) {
        multiplier *= PREFERENCE_MULTIPLIER;
    }
    if preferences.cultural && place.has_any_type(CULTURAL_CATEGORIES) {
        multiplier *= PREFERENCE_MULTIPLIER;
    }
    if preferences.food && place.has_any_type(FOOD_CATEGORIES) {
        multiplier *= PREFERENCE_MULTIPLIER;
    }
    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn place(types: &[&str], rating: Option<f64>, reviews: u32) -> Place {
        Place {
            id: "test".to_string(),
            name: "Test Place".to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            rating,
            user_ratings_total: reviews,
            vicinity: None,
            location: Coordinates::new(40.7128, -74.0060).unwrap(),
            photo_reference: None,
        }
    }

    fn score(place: &Place, preferences: &Preferences) -> f64 {
        let origin = Coordinates::new(40.7128, -74.0060).unwrap();
        let context = ScoringContext {
            origin: &origin,
            radius_meters: 4828.0,
            preferences,
        };
        AdditiveStrategy.score(place, &context)
    }

    #[test]
    fn test_cultural_museum_fixture() {
        // 4.5 * (50/100) * 20 + 12 = 57, then * 1.3 = 74.1
        let place = place(&["museum"], Some(4.5), 50);
        let prefs = Preferences {
            cultural: true,
            ..Default::default()
        };
        assert_eq!(score(&place, &prefs), 74.1);
    }

    #[test]
    fn test_missing_rating_scores_bonuses_only() {
        let place = place(&["park"], None, 500);
        assert_eq!(score(&place, &Preferences::default()), 10.0);
    }

    #[test]
    fn test_zero_reviews_scores_bonuses_only() {
        let place = place(&["cafe"], Some(4.8), 0);
        assert_eq!(score(&place, &Preferences::default()), 8.0);
    }

    #[test]
    fn test_reliability_caps_at_100_reviews() {
        let at_cap = place(&[], Some(4.0), 100);
        let far_past_cap = place(&[], Some(4.0), 100_000);
        assert_eq!(
            score(&at_cap, &Preferences::default()),
            score(&far_past_cap, &Preferences::default())
        );
        assert_eq!(score(&at_cap, &Preferences::default()), 80.0);
    }

    #[test]
    fn test_multiple_category_bonuses_accumulate() {
        // museum +12, art_gallery +12, point_of_interest +5
        let place = place(&["museum", "art_gallery", "point_of_interest"], None, 0);
        assert_eq!(score(&place, &Preferences::default()), 29.0);
    }

    #[test]
    fn test_preferences_compound_multiplicatively() {
        // park +10, cafe +8 -> 18; scenic and food both trigger: 18 * 1.3 * 1.3 = 30.42
        let place = place(&["park", "cafe"], None, 0);
        let prefs = Preferences {
            scenic: true,
            food: true,
            ..Default::default()
        };
        assert_eq!(score(&place, &prefs), 30.42);
    }

    #[test]
    fn test_preference_without_matching_category_has_no_effect() {
        let place = place(&["museum"], None, 0);
        let prefs = Preferences {
            food: true,
            ..Default::default()
        };
        assert_eq!(score(&place, &prefs), 12.0);
    }

    #[test]
    fn test_search_categories() {
        let categories = AdditiveStrategy.categories(&Preferences::default());
        assert_eq!(categories.len(), 7);
        assert_eq!(categories[0], "tourist_attraction");
        assert_eq!(categories[6], "point_of_interest");

        // Additive flow ignores water_stops; its category list is fixed
        let prefs = Preferences {
            water_stops: true,
            ..Default::default()
        };
        assert_eq!(AdditiveStrategy.categories(&prefs).len(), 7);
    }
}

use crate::config::ScoringStrategy;
use crate::constants::{MAX_SUGGESTED_PLACES, METERS_PER_MILE};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Place, Preferences, ScoredPlace};
use crate::services::google_places::PlaceProvider;
use crate::services::scoring::{self, PlaceScoringStrategy, ScoringContext};
use std::collections::HashSet;
use std::sync::Arc;

pub struct DiscoveryResult {
    /// Top-scored places, at most [`MAX_SUGGESTED_PLACES`]
    pub places: Vec<ScoredPlace>,
    /// Unique candidates found before truncation
    pub total_found: usize,
}

pub struct DiscoveryService {
    provider: Arc<dyn PlaceProvider>,
    strategy: Box<dyn PlaceScoringStrategy>,
}

impl DiscoveryService {
    pub fn new(provider: Arc<dyn PlaceProvider>, strategy: ScoringStrategy) -> Self {
        DiscoveryService {
            provider,
            strategy: scoring::strategy_for(strategy),
        }
    }

    /// Query the provider across the strategy's category list, dedupe by
    /// place id (first seen wins), score, and return the top results.
    ///
    /// A single failing category is logged and skipped so a provider
    /// hiccup on one category never aborts the whole request. A missing
    /// API key would fail every category identically, so it propagates
    /// immediately instead.
    pub async fn suggest(
        &self,
        origin: &Coordinates,
        radius_miles: f64,
        preferences: &Preferences,
    ) -> Result<DiscoveryResult> {
        let radius_meters = radius_miles * METERS_PER_MILE;

        let mut unique_places: Vec<Place> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut failed_categories = 0usize;

        for category in self.strategy.categories(preferences) {
            match self
                .provider
                .search_nearby(origin, radius_meters, category)
                .await
            {
                Ok(places) => {
                    for place in places {
                        if seen_ids.insert(place.id.clone()) {
                            unique_places.push(place);
                        }
                    }
                }
                Err(AppError::Configuration) => return Err(AppError::Configuration),
                Err(e) => {
                    failed_categories += 1;
                    tracing::warn!(
                        category = category,
                        error = %e,
                        "Category query failed, continuing with remaining categories"
                    );
                }
            }
        }

        let total_found = unique_places.len();
        tracing::debug!(
            total_found = total_found,
            failed_categories = failed_categories,
            "Discovery found {} unique places ({} categories failed)",
            total_found, failed_categories
        );

        let context = ScoringContext {
            origin,
            radius_meters,
            preferences,
        };

        let mut scored: Vec<ScoredPlace> = unique_places
            .into_iter()
            .map(|place| {
                let score = self.strategy.score(&place, &context);
                let distance = origin.distance_miles_to(&place.location);
                let photo_url = place
                    .photo_reference
                    .as_deref()
                    .map(|r| self.provider.photo_url(r));
                ScoredPlace {
                    place,
                    distance_miles: (distance * 100.0).round() / 100.0,
                    score,
                    photo_url,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(MAX_SUGGESTED_PLACES);

        Ok(DiscoveryResult {
            places: scored,
            total_found,
        })
    }
}

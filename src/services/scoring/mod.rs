mod additive;
mod tiered;

pub use additive::AdditiveStrategy;
pub use tiered::TieredStrategy;

use crate::config::ScoringStrategy;
use crate::models::{Coordinates, Place, Preferences};

/// Context passed to scoring strategies
pub struct ScoringContext<'a> {
    /// Origin of the discovery query
    pub origin: &'a Coordinates,
    /// Search radius in meters, matching the provider's distance unit
    pub radius_meters: f64,
    pub preferences: &'a Preferences,
}

/// Trait for candidate scoring strategies
pub trait PlaceScoringStrategy: Send + Sync {
    /// Score a single candidate. Higher is better.
    fn score(&self, place: &Place, context: &ScoringContext) -> f64;

    /// Provider categories to query for this strategy, in order.
    /// Preferences may extend the list (e.g. water stops).
    fn categories(&self, preferences: &Preferences) -> Vec<&'static str>;
}

/// Build the concrete strategy selected by configuration.
pub fn strategy_for(strategy: ScoringStrategy) -> Box<dyn PlaceScoringStrategy> {
    match strategy {
        ScoringStrategy::Additive => Box::new(AdditiveStrategy),
        ScoringStrategy::Tiered => Box::new(TieredStrategy),
    }
}

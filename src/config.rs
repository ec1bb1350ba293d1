use crate::constants::*;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScoringStrategy {
    /// Additive-weighted scoring used by the plain "explore nearby" flow
    #[default]
    Additive,
    /// Popularity-tiered multiplicative scoring used by the route-aware flow
    Tiered,
}

impl std::str::FromStr for ScoringStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "additive" => Ok(ScoringStrategy::Additive),
            "tiered" => Ok(ScoringStrategy::Tiered),
            _ => Err(format!(
                "Invalid scoring strategy: {}. Use 'additive' or 'tiered'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Places API key. Optional at startup; a missing key surfaces as a
    /// configuration error on the first request that needs it.
    pub places_api_key: Option<String>,
    /// Directions API key, same startup semantics as the places key.
    pub directions_api_key: Option<String>,
    pub scoring_strategy: ScoringStrategy,
    pub default_search_radius_miles: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let default_search_radius_miles: f64 = env::var("DEFAULT_SEARCH_RADIUS_MILES")
            .unwrap_or_else(|_| DEFAULT_SEARCH_RADIUS_MILES.to_string())
            .parse()
            .map_err(|_| "Invalid DEFAULT_SEARCH_RADIUS_MILES")?;

        if default_search_radius_miles <= 0.0 || default_search_radius_miles > 50.0 {
            return Err("DEFAULT_SEARCH_RADIUS_MILES must be between 0 and 50".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            places_api_key: env::var("GOOGLE_MAPS_API_KEY").ok(),
            directions_api_key: env::var("GOOGLE_DIRECTIONS_API_KEY").ok(),
            scoring_strategy: env::var("SCORING_STRATEGY")
                .unwrap_or_else(|_| "additive".to_string())
                .parse()?,
            default_search_radius_miles,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_strategy_from_str() {
        assert_eq!(
            "additive".parse::<ScoringStrategy>().unwrap(),
            ScoringStrategy::Additive
        );
        assert_eq!(
            "TIERED".parse::<ScoringStrategy>().unwrap(),
            ScoringStrategy::Tiered
        );
        assert!("greedy".parse::<ScoringStrategy>().is_err());
    }

    #[test]
    fn test_scoring_strategy_default() {
        assert_eq!(ScoringStrategy::default(), ScoringStrategy::Additive);
    }

    #[test]
    fn test_server_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            places_api_key: None,
            directions_api_key: None,
            scoring_strategy: ScoringStrategy::Additive,
            default_search_radius_miles: 3.0,
        };
        assert_eq!(config.server_address(), "127.0.0.1:8080");
    }
}

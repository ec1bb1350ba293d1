pub mod coordinates;
pub mod place;
pub mod route;

pub use coordinates::Coordinates;
pub use place::{Place, Preferences, ScoredPlace};
pub use route::{GenerateRouteRequest, RouteSummary, SelectedPlace, SuggestPlacesRequest, SuggestPlacesResponse};

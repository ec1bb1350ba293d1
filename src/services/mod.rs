pub mod discovery;
pub mod google_directions;
pub mod google_places;
pub mod route_builder;
pub mod scoring;

pub mod cost;
pub mod directions;
pub mod route;

// Seam for the distance primitive the route aggregator consumes
use crate::models::{Km, Waypoint};

/// Great-circle distance primitive.
///
/// The route metrics aggregator takes any implementation; the crate ships
/// `utils::distance::Haversine` as the default.
pub trait Geodesic {
    /// Distance between two waypoints in kilometers
    fn distance_km(&self, a: &Waypoint, b: &Waypoint) -> Km;
}

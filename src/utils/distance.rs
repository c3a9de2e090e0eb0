// Distance calculation utilities

use crate::engines::Geodesic;
use crate::models::{Km, Waypoint};

/// Earth radius used for great-circle distances, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the haversine distance between two waypoints in kilometers
pub fn haversine_km(a: &Waypoint, b: &Waypoint) -> Km {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Default geodesic primitive backed by the haversine formula
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Geodesic for Haversine {
    fn distance_km(&self, a: &Waypoint, b: &Waypoint) -> Km {
        haversine_km(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = Waypoint::new(12.8698, 74.8439);
        assert_eq!(haversine_km(&p, &p), 0.0);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let a = Waypoint::new(0.0, 0.0);
        let b = Waypoint::new(0.0, 1.0);

        // 2 * pi * 6371 / 360
        let expected = 111.194926;
        assert!((haversine_km(&a, &b) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_symmetry() {
        let a = Waypoint::new(12.8698, 74.8439);
        let b = Waypoint::new(13.0103, 74.7946);

        assert_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
    }
}

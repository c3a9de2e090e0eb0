// Geographic waypoint in degrees

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
}

impl Waypoint {
    /// Creates a new waypoint with the given coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both coordinates fall in the valid [-90, 90] / [-180, 180] ranges
    pub fn in_bounds(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Interpolates toward `other` by independent latitude/longitude fractions
    pub fn lerp(&self, other: &Waypoint, lat_fraction: f64, lon_fraction: f64) -> Waypoint {
        Waypoint {
            lat: self.lat + (other.lat - self.lat) * lat_fraction,
            lon: self.lon + (other.lon - self.lon) * lon_fraction,
        }
    }

    /// Point halfway between two waypoints in coordinate space
    pub fn midpoint(&self, other: &Waypoint) -> Waypoint {
        self.lerp(other, 0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Waypoint::new(12.8698, 74.8439).in_bounds());
        assert!(Waypoint::new(90.0, 180.0).in_bounds());
        assert!(Waypoint::new(-90.0, -180.0).in_bounds());
        assert!(!Waypoint::new(90.5, 0.0).in_bounds());
        assert!(!Waypoint::new(0.0, -180.5).in_bounds());
        assert!(!Waypoint::new(f64::NAN, 0.0).in_bounds());
    }

    #[test]
    fn test_midpoint() {
        let a = Waypoint::new(10.0, 20.0);
        let b = Waypoint::new(20.0, 40.0);
        let mid = a.midpoint(&b);

        assert_eq!(mid, Waypoint::new(15.0, 30.0));
    }

    #[test]
    fn test_lerp_uses_independent_fractions() {
        let a = Waypoint::new(0.0, 0.0);
        let b = Waypoint::new(10.0, 10.0);
        let p = a.lerp(&b, 0.3, 0.1);

        assert!((p.lat - 3.0).abs() < 1e-12);
        assert!((p.lon - 1.0).abs() < 1e-12);
    }
}

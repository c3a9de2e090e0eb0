// Congestion zone: a named road segment with a traffic multiplier

use serde::{Deserialize, Serialize};

use crate::models::Waypoint;

/// A named line segment whose proximity slows routes down.
///
/// The multiplier is fixed once the owning table snapshot is built; it is
/// never resampled during a route computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionZone {
    /// Road or junction name
    pub name: String,

    /// One endpoint of the congested segment
    pub start: Waypoint,

    /// Other endpoint of the congested segment
    pub end: Waypoint,

    /// Slowdown multiplier, always >= 1.0
    pub multiplier: f64,
}

impl CongestionZone {
    /// Creates a new congestion zone
    pub fn new<S: Into<String>>(name: S, start: Waypoint, end: Waypoint, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_creation() {
        let zone = CongestionZone::new(
            "MG Road",
            Waypoint::new(12.8703, 74.8428),
            Waypoint::new(12.8772, 74.8442),
            1.3,
        );

        assert_eq!(zone.name, "MG Road");
        assert_eq!(zone.multiplier, 1.3);
    }
}

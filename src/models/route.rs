// Route strategies and computed route metrics

use std::fmt;

use crate::models::{Km, Minutes, Waypoint};

/// Path-generation strategy used to produce comparable route variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Waypoint sequence unmodified
    Direct,

    /// One interpolated midpoint per segment, simulating a road snap
    RoadApproximation,

    /// Detour through secondary roads via three interpolated points per segment
    Alternative,
}

impl Strategy {
    /// All strategies, in the order results are reported
    pub const ALL: [Strategy; 3] = [
        Strategy::Direct,
        Strategy::RoadApproximation,
        Strategy::Alternative,
    ];

    /// Average speed assumed for this strategy, in km/h
    pub fn average_speed_kmh(&self) -> f64 {
        match self {
            Strategy::Direct => 40.0,
            Strategy::RoadApproximation => 35.0,
            Strategy::Alternative => 30.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::RoadApproximation => "road approximation",
            Strategy::Alternative => "alternative",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse traffic classification of a congestion multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Classifies a multiplier: light below 1.2, moderate below 1.5, else heavy
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier < 1.2 {
            TrafficLevel::Light
        } else if multiplier < 1.5 {
            TrafficLevel::Moderate
        } else {
            TrafficLevel::Heavy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficLevel::Light => "Light traffic",
            TrafficLevel::Moderate => "Moderate traffic",
            TrafficLevel::Heavy => "Heavy traffic",
        }
    }
}

/// Metrics for one candidate route, recomputed fresh on every request
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMetrics {
    /// Strategy that produced this route
    pub strategy: Strategy,

    /// Waypoints actually traversed, including interpolated points
    pub path: Vec<Waypoint>,

    /// Sum of consecutive great-circle distances along the path
    pub distance_km: Km,

    /// Duration at the strategy's assumed average speed, in minutes
    pub nominal_duration_min: Minutes,

    /// Maximum multiplier among congestion zones the path passes near
    pub congestion_multiplier: f64,

    /// Nominal duration scaled by the congestion multiplier
    pub effective_duration_min: Minutes,
}

impl RouteMetrics {
    /// Traffic classification of this route's congestion multiplier
    pub fn traffic_level(&self) -> TrafficLevel {
        TrafficLevel::from_multiplier(self.congestion_multiplier)
    }
}

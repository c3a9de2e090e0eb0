// Route metrics aggregator: path expansion, distance, congestion

use std::sync::Arc;

use rayon::prelude::*;

use crate::engines::Geodesic;
use crate::error::{Error, Result};
use crate::models::{Km, ReferenceTables, RouteMetrics, Strategy, Waypoint};
use crate::utils::distance::Haversine;

/// Tunable constants of the path heuristics.
///
/// The detour offsets, congestion discount and zone proximity tolerance are
/// demo-calibrated values, not policy; the defaults reproduce the reference
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyParams {
    /// (latitude, longitude) interpolation fractions for the alternative
    /// route's detour points, applied per segment
    pub detour_offsets: [(f64, f64); 3],

    /// Factor applied to the alternative route's raw congestion multiplier,
    /// floored at 1.0
    pub congestion_discount: f64,

    /// A path segment within this distance of a zone endpoint picks up the
    /// zone's multiplier, in kilometers
    pub zone_proximity_km: Km,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            detour_offsets: [(0.3, 0.1), (0.5, 0.6), (0.7, 0.8)],
            congestion_discount: 0.8,
            zone_proximity_km: 0.5,
        }
    }
}

/// Computes distance, duration and congestion metrics for candidate routes.
///
/// Stateless between requests; every call recomputes from the waypoints and
/// the table snapshot, so a snapshot swap never affects an in-flight result.
#[derive(Debug, Clone)]
pub struct RouteAggregator<G = Haversine> {
    tables: Arc<ReferenceTables>,
    geodesic: G,
    params: StrategyParams,
}

impl RouteAggregator<Haversine> {
    /// Creates an aggregator with the default haversine distance primitive
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self::with_geodesic(tables, Haversine)
    }
}

impl<G: Geodesic> RouteAggregator<G> {
    /// Creates an aggregator with an externally supplied distance primitive
    pub fn with_geodesic(tables: Arc<ReferenceTables>, geodesic: G) -> Self {
        Self {
            tables,
            geodesic,
            params: StrategyParams::default(),
        }
    }

    /// Replaces the heuristic parameters
    pub fn with_params(mut self, params: StrategyParams) -> Self {
        self.params = params;
        self
    }

    /// Computes metrics for one strategy over the given waypoints.
    ///
    /// Requires at least an origin and a destination, all coordinates in
    /// range.
    pub fn compute_route(&self, waypoints: &[Waypoint], strategy: Strategy) -> Result<RouteMetrics> {
        if waypoints.len() < 2 {
            return Err(Error::InsufficientWaypoints {
                count: waypoints.len(),
            });
        }
        for point in waypoints {
            if !point.in_bounds() {
                return Err(Error::InvalidCoordinate {
                    lat: point.lat,
                    lon: point.lon,
                });
            }
        }

        let path = self.expand_path(waypoints, strategy);

        let distance_km: Km = path
            .windows(2)
            .map(|pair| self.geodesic.distance_km(&pair[0], &pair[1]))
            .sum();

        let nominal_duration_min = distance_km / strategy.average_speed_kmh() * 60.0;

        let raw_multiplier = self.congestion_multiplier(&path);
        let congestion_multiplier = match strategy {
            // A deliberately chosen detour avoids the worst congestion
            Strategy::Alternative => (raw_multiplier * self.params.congestion_discount).max(1.0),
            _ => raw_multiplier,
        };

        Ok(RouteMetrics {
            strategy,
            path,
            distance_km,
            nominal_duration_min,
            congestion_multiplier,
            effective_duration_min: nominal_duration_min * congestion_multiplier,
        })
    }

    /// Computes all three strategies independently and returns them together
    /// in `Strategy::ALL` order.
    pub fn compare_strategies(&self, waypoints: &[Waypoint]) -> Result<Vec<RouteMetrics>>
    where
        G: Sync,
    {
        let strategies: &[Strategy] = &Strategy::ALL;
        strategies
            .par_iter()
            .map(|strategy| self.compute_route(waypoints, *strategy))
            .collect()
    }

    /// Expands the waypoint sequence into the path a strategy traverses
    fn expand_path(&self, waypoints: &[Waypoint], strategy: Strategy) -> Vec<Waypoint> {
        match strategy {
            Strategy::Direct => waypoints.to_vec(),
            Strategy::RoadApproximation => {
                let mut path = vec![waypoints[0]];
                for pair in waypoints.windows(2) {
                    path.push(pair[0].midpoint(&pair[1]));
                    path.push(pair[1]);
                }
                path
            }
            Strategy::Alternative => {
                let mut path = vec![waypoints[0]];
                for pair in waypoints.windows(2) {
                    for (lat_fraction, lon_fraction) in self.params.detour_offsets {
                        path.push(pair[0].lerp(&pair[1], lat_fraction, lon_fraction));
                    }
                    path.push(pair[1]);
                }
                path
            }
        }
    }

    /// Maximum multiplier among zones any path segment passes near, or 1.0.
    ///
    /// A segment counts as near a zone when the smallest of the four
    /// endpoint-to-endpoint great-circle distances is under the proximity
    /// tolerance.
    fn congestion_multiplier(&self, path: &[Waypoint]) -> f64 {
        let mut max_multiplier = 1.0f64;

        for segment in path.windows(2) {
            for zone in &self.tables.zones {
                let nearest = [
                    self.geodesic.distance_km(&segment[0], &zone.start),
                    self.geodesic.distance_km(&segment[0], &zone.end),
                    self.geodesic.distance_km(&segment[1], &zone.start),
                    self.geodesic.distance_km(&segment[1], &zone.end),
                ]
                .into_iter()
                .fold(f64::INFINITY, f64::min);

                if nearest < self.params.zone_proximity_km {
                    max_multiplier = max_multiplier.max(zone.multiplier);
                }
            }
        }

        max_multiplier
    }
}

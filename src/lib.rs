// Public modules
pub mod engines;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use engines::cost::CostEngine;
pub use engines::route::{RouteAggregator, StrategyParams};
pub use error::{Error, Result};
pub use models::{
    CostBreakdown, MaterialProfile, ReferenceTables, RouteMetrics, Strategy, SupplierOffer,
    SupplierRanking, Waypoint,
};

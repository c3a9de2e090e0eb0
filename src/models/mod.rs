// Models module - exports all model types

mod cost;
mod material;
mod place;
mod route;
mod supplier;
mod tables;
mod waypoint;
mod zone;

// Re-export model types
pub use self::cost::{CostBreakdown, DealTag, RankedOffer, SupplierRanking};
pub use self::material::MaterialProfile;
pub use self::place::NamedLocation;
pub use self::route::{RouteMetrics, Strategy, TrafficLevel};
pub use self::supplier::SupplierOffer;
pub use self::tables::ReferenceTables;
pub use self::waypoint::Waypoint;
pub use self::zone::CongestionZone;

// Common type aliases for improved code readability
pub type Cost = f64;
pub type Km = f64;
pub type Minutes = f64;

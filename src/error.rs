use thiserror::Error;

/// Convenient result alias for the supply planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when no material profile exists for the requested product type.
    #[error("unknown product type: {name}")]
    UnknownProductType { name: String },

    /// Raised when the order quantity is not a positive whole number.
    #[error("quantity must be a positive whole number, got {quantity}")]
    InvalidQuantity { quantity: f64 },

    /// Raised when the origin is not a recognized location key.
    #[error("unknown origin location: {name}")]
    UnknownOrigin { name: String },

    /// Raised when an offer has no distance entry for the requested origin.
    /// Non-fatal inside ranking: the offer is excluded instead.
    #[error("supplier {supplier} is not serviceable from {origin}")]
    UnreachableOrigin { supplier: String, origin: String },

    /// Raised when a route request has fewer than two waypoints.
    #[error("route requires at least 2 waypoints, got {count}")]
    InsufficientWaypoints { count: usize },

    /// Raised when a coordinate falls outside valid latitude/longitude ranges.
    #[error("coordinate ({lat}, {lon}) is out of range")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Raised at load time when two offers share a supplier name.
    #[error("duplicate supplier name: {name}")]
    DuplicateSupplier { name: String },

    /// Raised at load time when an offer lacks a price for a profiled material.
    #[error("supplier {supplier} has no price for material {material}")]
    MissingMaterialPrice { supplier: String, material: String },

    /// Raised at load time for any negative quantity, price, distance or rate.
    #[error("negative value in reference table: {context}")]
    NegativeTableEntry { context: String },

    /// Raised at load time when a congestion zone multiplier is below 1.0.
    #[error("congestion zone {name} has multiplier {multiplier}, expected >= 1.0")]
    InvalidZoneMultiplier { name: String, multiplier: f64 },

    /// Wrapper for IO errors while reading table configuration.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parse errors in table configuration.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

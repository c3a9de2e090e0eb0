// Immutable reference-table snapshot shared by both engines

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    CongestionZone, Cost, MaterialProfile, NamedLocation, SupplierOffer, Waypoint,
};

/// All reference data the engines compute over.
///
/// Built once at process start (or on hot reload), validated, then shared
/// behind an `Arc` so a reload is an atomic snapshot swap and in-flight
/// computations keep observing a consistent table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    /// Product type -> material profile
    pub profiles: BTreeMap<String, MaterialProfile>,

    /// All candidate supplier offers
    pub offers: Vec<SupplierOffer>,

    /// Recognized origin location keys
    pub origins: Vec<String>,

    /// Transport cost per kilometer of supplier distance
    pub transport_rate_per_km: Cost,

    /// Congestion zones with their session multipliers
    pub zones: Vec<CongestionZone>,

    /// Named locations used for route narration
    pub places: Vec<NamedLocation>,
}

impl ReferenceTables {
    /// Material profile for a product type
    pub fn profile(&self, product_type: &str) -> Option<&MaterialProfile> {
        self.profiles.get(product_type)
    }

    /// Whether an origin key is recognized
    pub fn is_known_origin(&self, origin: &str) -> bool {
        self.origins.iter().any(|known| known == origin)
    }

    /// Validates every table entry.
    ///
    /// Any failure here is fatal to initialization: the engines assume a
    /// consistent, fully-priced table during request handling.
    pub fn validate(&self) -> Result<()> {
        if self.transport_rate_per_km < 0.0 {
            return Err(Error::NegativeTableEntry {
                context: format!("transport rate {}", self.transport_rate_per_km),
            });
        }

        for (product, profile) in &self.profiles {
            for (material, quantity) in &profile.requirements {
                if *quantity < 0.0 {
                    return Err(Error::NegativeTableEntry {
                        context: format!("profile {product}, material {material}"),
                    });
                }
            }
        }

        let mut seen_names = HashSet::new();
        for offer in &self.offers {
            if !seen_names.insert(offer.name.as_str()) {
                return Err(Error::DuplicateSupplier {
                    name: offer.name.clone(),
                });
            }

            for (material, price) in &offer.unit_prices {
                if *price < 0.0 {
                    return Err(Error::NegativeTableEntry {
                        context: format!("supplier {}, material {material}", offer.name),
                    });
                }
            }

            for (origin, distance) in &offer.distances {
                if *distance < 0.0 {
                    return Err(Error::NegativeTableEntry {
                        context: format!("supplier {}, origin {origin}", offer.name),
                    });
                }
            }

            // Every material appearing in any profile must be priced by every offer
            for profile in self.profiles.values() {
                for (material, _) in profile.materials() {
                    if offer.price_for(material).is_none() {
                        return Err(Error::MissingMaterialPrice {
                            supplier: offer.name.clone(),
                            material: material.to_string(),
                        });
                    }
                }
            }
        }

        for zone in &self.zones {
            if zone.multiplier < 1.0 {
                return Err(Error::InvalidZoneMultiplier {
                    name: zone.name.clone(),
                    multiplier: zone.multiplier,
                });
            }
            for endpoint in [&zone.start, &zone.end] {
                check_coordinate(endpoint)?;
            }
        }

        for place in &self.places {
            check_coordinate(&place.position)?;
        }

        Ok(())
    }
}

fn check_coordinate(point: &Waypoint) -> Result<()> {
    if point.in_bounds() {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate {
            lat: point.lat,
            lon: point.lon,
        })
    }
}

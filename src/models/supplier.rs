// Supplier offer with unit prices and origin distances

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Cost, Km};

/// A supplier's standing offer: what each material costs there and how far
/// the supplier is from each known origin location.
///
/// A missing origin entry means the supplier cannot deliver from that origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOffer {
    /// Unique supplier name
    pub name: String,

    /// Material name -> price per unit of material
    pub unit_prices: BTreeMap<String, Cost>,

    /// Origin location key -> distance in kilometers
    pub distances: BTreeMap<String, Km>,
}

impl SupplierOffer {
    /// Creates a new offer
    pub fn new<S: Into<String>>(
        name: S,
        unit_prices: BTreeMap<String, Cost>,
        distances: BTreeMap<String, Km>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_prices,
            distances,
        }
    }

    /// Unit price for a material, if this supplier sells it
    pub fn price_for(&self, material: &str) -> Option<Cost> {
        self.unit_prices.get(material).copied()
    }

    /// Distance from an origin in kilometers; None means unreachable
    pub fn distance_from(&self, origin: &str) -> Option<Km> {
        self.distances.get(origin).copied()
    }

    /// Whether this supplier can deliver from the given origin
    pub fn serves_origin(&self, origin: &str) -> bool {
        self.distances.contains_key(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offer() -> SupplierOffer {
        let prices = [("wood".to_string(), 12300.0), ("finish".to_string(), 215.0)]
            .into_iter()
            .collect();
        let distances = [("panambur".to_string(), 3.0)].into_iter().collect();
        SupplierOffer::new("Panambur Port", prices, distances)
    }

    #[test]
    fn test_price_lookup() {
        let offer = sample_offer();
        assert_eq!(offer.price_for("wood"), Some(12300.0));
        assert_eq!(offer.price_for("steel"), None);
    }

    #[test]
    fn test_distance_lookup() {
        let offer = sample_offer();
        assert_eq!(offer.distance_from("panambur"), Some(3.0));
        assert_eq!(offer.distance_from("kavoor"), None);
        assert!(offer.serves_origin("panambur"));
        assert!(!offer.serves_origin("kavoor"));
    }
}

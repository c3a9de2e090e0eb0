// Material profile describing what goes into one unit of a product

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-unit material requirements for a single product type.
///
/// Keys are material names, values are the quantity consumed per unit built.
/// A BTreeMap keeps iteration order stable so cost accumulation is
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Material name -> quantity needed per unit
    pub requirements: BTreeMap<String, f64>,
}

impl MaterialProfile {
    /// Creates a profile from a requirements map
    pub fn new(requirements: BTreeMap<String, f64>) -> Self {
        Self { requirements }
    }

    /// Creates a profile from (material, quantity-per-unit) entries
    pub fn from_entries(entries: &[(&str, f64)]) -> Self {
        Self {
            requirements: entries
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect(),
        }
    }

    /// Quantity of a material needed per unit, if the profile uses it
    pub fn quantity_for(&self, material: &str) -> Option<f64> {
        self.requirements.get(material).copied()
    }

    /// Iterates materials in stable (sorted) order
    pub fn materials(&self) -> impl Iterator<Item = (&str, f64)> {
        self.requirements.iter().map(|(name, qty)| (name.as_str(), *qty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_lookup() {
        let profile = MaterialProfile::from_entries(&[("wood", 0.15), ("finish", 0.03)]);

        assert_eq!(profile.quantity_for("wood"), Some(0.15));
        assert_eq!(profile.quantity_for("steel"), None);
    }

    #[test]
    fn test_materials_iterate_in_sorted_order() {
        let profile = MaterialProfile::from_entries(&[("wood", 0.4), ("fasteners", 0.1)]);
        let names: Vec<&str> = profile.materials().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["fasteners", "wood"]);
    }
}

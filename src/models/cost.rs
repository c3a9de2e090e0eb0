// Computed cost values produced by the supplier cost engine

use crate::models::{Cost, SupplierOffer};

/// Itemized delivered cost of one offer for one order.
///
/// Computed per request and discarded after the caller consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    /// Per-material cost in stable material-name order
    pub material_costs: Vec<(String, Cost)>,

    /// Transport cost: distance times the per-km rate
    pub transport_cost: Cost,

    /// Sum of all material costs and the transport cost
    pub total_cost: Cost,
}

impl CostBreakdown {
    /// Combined cost of materials alone
    pub fn material_total(&self) -> Cost {
        self.material_costs.iter().map(|(_, cost)| cost).sum()
    }

    /// Cost of a single material, if present in the breakdown
    pub fn cost_of(&self, material: &str) -> Option<Cost> {
        self.material_costs
            .iter()
            .find(|(name, _)| name == material)
            .map(|(_, cost)| *cost)
    }
}

/// Informational tag on the cheapest two ranked offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealTag {
    BestDeal,
    SecondBest,
}

/// One ranked entry: the offer together with its computed breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOffer {
    pub offer: SupplierOffer,
    pub breakdown: CostBreakdown,
    pub tag: Option<DealTag>,
}

/// Full result of a ranking request
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierRanking {
    /// Offers sorted by ascending total cost, ties broken by name
    pub ranked: Vec<RankedOffer>,

    /// Names of offers excluded because they cannot serve the origin
    pub unreachable: Vec<String>,
}

impl SupplierRanking {
    /// The cheapest offer, if any supplier was reachable
    pub fn best(&self) -> Option<&RankedOffer> {
        self.ranked.first()
    }
}

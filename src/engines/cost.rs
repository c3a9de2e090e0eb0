// Supplier cost engine: delivered-cost breakdowns and ranking

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{
    CostBreakdown, DealTag, MaterialProfile, RankedOffer, ReferenceTables, SupplierOffer,
    SupplierRanking,
};

/// Ranks supplier offers by total delivered cost for a given order.
///
/// Pure over its inputs and the table snapshot: the same
/// (product type, quantity, origin) always yields the same costs and order.
#[derive(Debug, Clone)]
pub struct CostEngine {
    tables: Arc<ReferenceTables>,
}

impl CostEngine {
    /// Creates an engine over a validated table snapshot
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Ranks all offers for an order of `quantity` units of `product_type`
    /// delivered from `origin_id`.
    ///
    /// Offers that cannot serve the origin are excluded from the ranking and
    /// reported by name in the result's `unreachable` list instead of failing
    /// the whole call.
    pub fn rank_suppliers(
        &self,
        product_type: &str,
        quantity: f64,
        origin_id: &str,
    ) -> Result<SupplierRanking> {
        let profile = self
            .tables
            .profile(product_type)
            .ok_or_else(|| Error::UnknownProductType {
                name: product_type.to_string(),
            })?;

        if !quantity.is_finite() || quantity <= 0.0 || quantity.fract() != 0.0 {
            return Err(Error::InvalidQuantity { quantity });
        }

        if !self.tables.is_known_origin(origin_id) {
            return Err(Error::UnknownOrigin {
                name: origin_id.to_string(),
            });
        }

        let mut ranked = Vec::new();
        let mut unreachable = Vec::new();

        for offer in &self.tables.offers {
            match self.breakdown(offer, profile, quantity, origin_id) {
                Ok(breakdown) => ranked.push(RankedOffer {
                    offer: offer.clone(),
                    breakdown,
                    tag: None,
                }),
                Err(Error::UnreachableOrigin { supplier, .. }) => unreachable.push(supplier),
                Err(other) => return Err(other),
            }
        }

        ranked.sort_by(|a, b| {
            a.breakdown
                .total_cost
                .partial_cmp(&b.breakdown.total_cost)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.offer.name.cmp(&b.offer.name))
        });

        if let Some(first) = ranked.get_mut(0) {
            first.tag = Some(DealTag::BestDeal);
        }
        if let Some(second) = ranked.get_mut(1) {
            second.tag = Some(DealTag::SecondBest);
        }

        Ok(SupplierRanking {
            ranked,
            unreachable,
        })
    }

    /// Computes the delivered-cost breakdown of one offer.
    ///
    /// Fails with `UnreachableOrigin` when the offer has no distance entry
    /// for the origin; it never substitutes a default distance.
    pub fn breakdown(
        &self,
        offer: &SupplierOffer,
        profile: &MaterialProfile,
        quantity: f64,
        origin_id: &str,
    ) -> Result<CostBreakdown> {
        let distance = offer
            .distance_from(origin_id)
            .ok_or_else(|| Error::UnreachableOrigin {
                supplier: offer.name.clone(),
                origin: origin_id.to_string(),
            })?;

        let mut material_costs = Vec::with_capacity(profile.requirements.len());
        let mut material_total = 0.0;

        for (material, per_unit) in profile.materials() {
            // Validated tables price every profiled material
            let price = offer
                .price_for(material)
                .ok_or_else(|| Error::MissingMaterialPrice {
                    supplier: offer.name.clone(),
                    material: material.to_string(),
                })?;

            let cost = price * per_unit * quantity;
            material_total += cost;
            material_costs.push((material.to_string(), cost));
        }

        let transport_cost = distance * self.tables.transport_rate_per_km;

        Ok(CostBreakdown {
            material_costs,
            transport_cost,
            total_cost: material_total + transport_cost,
        })
    }
}

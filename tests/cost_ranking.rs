// Integration tests for the supplier cost engine
use std::sync::Arc;

use supply_planner::error::Error;
use supply_planner::utils::init_data::default_tables;
use supply_planner::CostEngine;

fn engine() -> CostEngine {
    let tables = default_tables();
    tables.validate().expect("default tables must validate");
    CostEngine::new(Arc::new(tables))
}

#[test]
fn test_chair_order_from_panambur_matches_reference_costs() {
    // 100 chairs (0.15 wood, 0.05 fasteners, 0.03 finish per unit) against
    // the Panambur Port offer (12300 / 85 / 215, 3 km away, 200 per km)
    let ranking = engine().rank_suppliers("chair", 100.0, "panambur").unwrap();

    let entry = ranking
        .ranked
        .iter()
        .find(|entry| entry.offer.name == "Panambur Port")
        .expect("Panambur Port should be ranked");

    let breakdown = &entry.breakdown;
    assert!((breakdown.cost_of("wood").unwrap() - 184500.0).abs() < 1e-6);
    assert!((breakdown.cost_of("fasteners").unwrap() - 425.0).abs() < 1e-6);
    assert!((breakdown.cost_of("finish").unwrap() - 645.0).abs() < 1e-6);
    assert!((breakdown.transport_cost - 600.0).abs() < 1e-6);
    assert!((breakdown.total_cost - 186170.0).abs() < 1e-6);
}

#[test]
fn test_ranking_sorted_by_total_then_name() {
    let ranking = engine().rank_suppliers("table", 75.0, "kuloor").unwrap();
    assert!(!ranking.ranked.is_empty());

    for pair in ranking.ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.breakdown.total_cost <= b.breakdown.total_cost);
        if a.breakdown.total_cost == b.breakdown.total_cost {
            assert!(a.offer.name <= b.offer.name);
        }
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let engine = engine();

    let first = engine.rank_suppliers("desk", 40.0, "surathkal").unwrap();
    let second = engine.rank_suppliers("desk", 40.0, "surathkal").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unreachable_offer_excluded_without_reordering_the_rest() {
    let baseline = engine().rank_suppliers("chair", 100.0, "panambur").unwrap();
    assert!(baseline.unreachable.is_empty());

    // Cut one mid-ranked supplier off from the origin
    let mut tables = default_tables();
    let dropped = "Tannirbhavi Beach";
    for offer in &mut tables.offers {
        if offer.name == dropped {
            offer.distances.remove("panambur");
        }
    }
    tables.validate().unwrap();

    let engine = CostEngine::new(Arc::new(tables));
    let ranking = engine.rank_suppliers("chair", 100.0, "panambur").unwrap();

    assert_eq!(ranking.unreachable, vec![dropped.to_string()]);
    assert!(ranking.ranked.iter().all(|entry| entry.offer.name != dropped));

    // Relative order of the remaining offers is unchanged
    let expected: Vec<&str> = baseline
        .ranked
        .iter()
        .map(|entry| entry.offer.name.as_str())
        .filter(|name| *name != dropped)
        .collect();
    let actual: Vec<&str> = ranking
        .ranked
        .iter()
        .map(|entry| entry.offer.name.as_str())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_quantity_boundaries_rejected() {
    let engine = engine();

    assert!(matches!(
        engine.rank_suppliers("chair", 0.0, "panambur"),
        Err(Error::InvalidQuantity { .. })
    ));
    assert!(matches!(
        engine.rank_suppliers("chair", 1.5, "panambur"),
        Err(Error::InvalidQuantity { .. })
    ));
    assert!(matches!(
        engine.rank_suppliers("chair", -3.0, "panambur"),
        Err(Error::InvalidQuantity { .. })
    ));
}

#[test]
fn test_unknown_inputs_rejected() {
    let engine = engine();

    assert!(matches!(
        engine.rank_suppliers("bookshelf", 10.0, "panambur"),
        Err(Error::UnknownProductType { .. })
    ));
    assert!(matches!(
        engine.rank_suppliers("chair", 10.0, "mysore"),
        Err(Error::UnknownOrigin { .. })
    ));
}

#[test]
fn test_breakdown_components_sum_to_total() {
    let ranking = engine().rank_suppliers("desk", 20.0, "baikampady").unwrap();

    for entry in &ranking.ranked {
        let sum = entry.breakdown.material_total() + entry.breakdown.transport_cost;
        assert!((sum - entry.breakdown.total_cost).abs() < 1e-9);
    }
}

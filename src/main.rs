use std::process;
use std::sync::Arc;

use supply_planner::engines::directions::turn_by_turn;
use supply_planner::models::{DealTag, Waypoint};
use supply_planner::utils::format::format_rupees;
use supply_planner::utils::init_data::{default_tables, randomize_congestion};
use supply_planner::{CostEngine, RouteAggregator};

fn main() {
    // Build the session snapshot: validated tables with traffic sampled once
    let mut tables = default_tables();
    if let Err(e) = tables.validate() {
        eprintln!("Reference tables failed validation: {}", e);
        process::exit(1);
    }
    randomize_congestion(&mut tables.zones, &mut rand::thread_rng());
    let tables = Arc::new(tables);

    let product_type = "chair";
    let quantity = 100.0;
    let origin = "panambur";

    println!(
        "Supplier ranking for {} x {} delivered from {}:",
        quantity, product_type, origin
    );
    println!("------------------------------------------");

    let cost_engine = CostEngine::new(Arc::clone(&tables));
    let ranking = match cost_engine.rank_suppliers(product_type, quantity, origin) {
        Ok(ranking) => ranking,
        Err(e) => {
            eprintln!("Ranking failed: {}", e);
            process::exit(1);
        }
    };

    for (i, entry) in ranking.ranked.iter().enumerate() {
        let badge = match entry.tag {
            Some(DealTag::BestDeal) => " [BEST DEAL]",
            Some(DealTag::SecondBest) => " [SECOND BEST]",
            None => "",
        };
        println!(
            "{}. {}{} - {}",
            i + 1,
            entry.offer.name,
            badge,
            format_rupees(entry.breakdown.total_cost)
        );
        for (material, cost) in &entry.breakdown.material_costs {
            println!("     {}: {}", material, format_rupees(*cost));
        }
        println!(
            "     transport: {}",
            format_rupees(entry.breakdown.transport_cost)
        );
    }

    for name in &ranking.unreachable {
        println!("   {} - not serviceable from {}", name, origin);
    }

    // Route comparison: City Center to NITK Surathkal
    let source = Waypoint::new(12.8698, 74.8439);
    let destination = Waypoint::new(13.0103, 74.7946);

    println!("\nRoute strategies from City Center to NITK Surathkal:");
    println!("------------------------------------------");

    let aggregator = RouteAggregator::new(Arc::clone(&tables));
    let comparison = match aggregator.compare_strategies(&[source, destination]) {
        Ok(comparison) => comparison,
        Err(e) => {
            eprintln!("Route computation failed: {}", e);
            process::exit(1);
        }
    };

    for metrics in &comparison {
        println!("{}:", metrics.strategy);
        println!("  Distance: {:.2} km", metrics.distance_km);
        println!("  Duration: {:.0} min", metrics.nominal_duration_min);
        println!(
            "  With traffic: {:.0} min ({})",
            metrics.effective_duration_min,
            metrics.traffic_level().label()
        );
    }

    if let Some(direct) = comparison.first() {
        println!("\nDirections ({} route):", direct.strategy);
        for step in turn_by_turn(&direct.path, &tables.places) {
            println!("  {}", step);
        }
    }
}

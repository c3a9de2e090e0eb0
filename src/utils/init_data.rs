// Reference-table loading and the built-in demo dataset

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::Result;
use crate::models::{
    CongestionZone, MaterialProfile, NamedLocation, ReferenceTables, SupplierOffer, Waypoint,
};

/// Loads reference tables from a JSON configuration file.
///
/// Validation failures are fatal: engines assume a consistent snapshot.
pub fn load_tables<P: AsRef<Path>>(path: P) -> Result<ReferenceTables> {
    let raw = fs::read_to_string(path)?;
    let tables: ReferenceTables = serde_json::from_str(&raw)?;
    tables.validate()?;
    Ok(tables)
}

/// Samples each zone's session multiplier as base + U[0, 0.4).
///
/// Called once while a snapshot is being built; multipliers never change
/// after that, so every computation over the snapshot is reproducible.
pub fn randomize_congestion<R: Rng>(zones: &mut [CongestionZone], rng: &mut R) {
    for zone in zones {
        zone.multiplier += rng.gen_range(0.0..0.4);
    }
}

/// Built-in dataset: the Mangalore furniture supply demo.
///
/// Congestion multipliers start at their base values; callers wanting the
/// session traffic model apply `randomize_congestion` before freezing the
/// snapshot.
pub fn default_tables() -> ReferenceTables {
    ReferenceTables {
        profiles: default_profiles(),
        offers: default_offers(),
        origins: vec![
            "baikampady".to_string(),
            "kuloor".to_string(),
            "surathkal".to_string(),
            "panambur".to_string(),
            "kavoor".to_string(),
        ],
        transport_rate_per_km: 200.0,
        zones: default_zones(),
        places: default_places(),
    }
}

fn default_profiles() -> BTreeMap<String, MaterialProfile> {
    [
        (
            "table".to_string(),
            MaterialProfile::from_entries(&[("wood", 0.4), ("fasteners", 0.1), ("finish", 0.1)]),
        ),
        (
            "chair".to_string(),
            MaterialProfile::from_entries(&[("wood", 0.15), ("fasteners", 0.05), ("finish", 0.03)]),
        ),
        (
            "desk".to_string(),
            MaterialProfile::from_entries(&[("wood", 0.35), ("fasteners", 0.08), ("finish", 0.08)]),
        ),
    ]
    .into_iter()
    .collect()
}

fn offer(
    name: &str,
    wood: f64,
    fasteners: f64,
    finish: f64,
    distances: [(&str, f64); 5],
) -> SupplierOffer {
    let unit_prices = [
        ("wood".to_string(), wood),
        ("fasteners".to_string(), fasteners),
        ("finish".to_string(), finish),
    ]
    .into_iter()
    .collect();

    let distances = distances
        .into_iter()
        .map(|(origin, km)| (origin.to_string(), km))
        .collect();

    SupplierOffer::new(name, unit_prices, distances)
}

fn default_offers() -> Vec<SupplierOffer> {
    vec![
        offer(
            "Sultan Battery",
            12000.0,
            80.0,
            200.0,
            [
                ("baikampady", 15.0),
                ("kuloor", 12.0),
                ("surathkal", 20.0),
                ("panambur", 18.0),
                ("kavoor", 10.0),
            ],
        ),
        offer(
            "Ullal Beach",
            12200.0,
            85.0,
            210.0,
            [
                ("baikampady", 25.0),
                ("kuloor", 20.0),
                ("surathkal", 30.0),
                ("panambur", 28.0),
                ("kavoor", 18.0),
            ],
        ),
        offer(
            "Tannirbhavi Beach",
            12500.0,
            90.0,
            220.0,
            [
                ("baikampady", 22.0),
                ("kuloor", 17.0),
                ("surathkal", 27.0),
                ("panambur", 25.0),
                ("kavoor", 15.0),
            ],
        ),
        offer(
            "Panambur Port",
            12300.0,
            85.0,
            215.0,
            [
                ("baikampady", 8.0),
                ("kuloor", 12.0),
                ("surathkal", 12.0),
                ("panambur", 3.0),
                ("kavoor", 15.0),
            ],
        ),
        offer(
            "Kadri Market",
            12900.0,
            95.0,
            230.0,
            [
                ("baikampady", 18.0),
                ("kuloor", 10.0),
                ("surathkal", 25.0),
                ("panambur", 20.0),
                ("kavoor", 7.0),
            ],
        ),
        offer(
            "Falnir Marketplace",
            12800.0,
            92.0,
            225.0,
            [
                ("baikampady", 20.0),
                ("kuloor", 15.0),
                ("surathkal", 28.0),
                ("panambur", 22.0),
                ("kavoor", 12.0),
            ],
        ),
    ]
}

fn zone(name: &str, start: (f64, f64), end: (f64, f64), base: f64) -> CongestionZone {
    CongestionZone::new(
        name,
        Waypoint::new(start.0, start.1),
        Waypoint::new(end.0, end.1),
        base,
    )
}

fn default_zones() -> Vec<CongestionZone> {
    vec![
        zone("MG Road", (12.8703, 74.8428), (12.8772, 74.8442), 1.3),
        zone("KS Rao Road", (12.8674, 74.8432), (12.8620, 74.8458), 1.4),
        zone("NH-66 (North)", (12.8909, 74.8276), (12.9615, 74.8900), 1.2),
        zone("NH-66 (South)", (12.8492, 74.8399), (12.8183, 74.8436), 1.3),
        zone("NH-75", (12.8744, 74.8433), (12.8155, 74.9265), 1.1),
        zone("Jail Road", (12.8703, 74.8428), (12.8610, 74.8419), 1.0),
        zone(
            "PVS-Jyothi Circle",
            (12.8654, 74.8417),
            (12.8674, 74.8432),
            1.5,
        ),
        zone("Bejai-Lalbagh", (12.8781, 74.8355), (12.8901, 74.8553), 1.3),
        zone(
            "Surathkal Highway",
            (12.9456, 74.8003),
            (13.0103, 74.7946),
            1.1,
        ),
        zone("Airport Road", (12.8909, 74.8276), (12.9615, 74.8900), 1.2),
    ]
}

fn place(name: &str, lat: f64, lon: f64) -> NamedLocation {
    NamedLocation::new(name, Waypoint::new(lat, lon))
}

fn default_places() -> Vec<NamedLocation> {
    vec![
        place("Mangalore City Center", 12.8698, 74.8439),
        place("Mangalore International Airport", 12.9615, 74.8900),
        place("New Mangalore Port", 12.9221, 74.8064),
        place("Mangalore Junction Railway Station", 12.8709, 74.8553),
        place("Mangalore Central Railway Station", 12.8378, 74.8380),
        place("Kadri Park", 12.8901, 74.8553),
        place("Tannirbhavi Beach", 12.9210, 74.8050),
        place("MG Road", 12.8744, 74.8433),
        place("NITK Surathkal", 13.0103, 74.7946),
        place("Panambur Beach", 12.9456, 74.8003),
        place("Forum Fiza Mall", 12.8743, 74.8427),
        place("City Centre Mall", 12.8675, 74.8432),
        place("Mangaladevi Temple", 12.8492, 74.8399),
        place("St. Aloysius Chapel", 12.8709, 74.8421),
        place("Kudroli Gokarnath Temple", 12.8781, 74.8355),
        place("Ullal Beach", 12.8183, 74.8436),
        place("Pilikula Nisargadhama", 12.9400, 74.9100),
        place("Sultan Battery", 12.8542, 74.8336),
        place("Kadri Manjunath Temple", 12.8912, 74.8553),
        place("Sasihithlu Beach", 13.0789, 74.7799),
        place("Mangalore University", 12.8155, 74.9265),
        place("KMC Hospital Attavar", 12.8654, 74.8417),
        place("KS Hegde Hospital", 12.9967, 74.8024),
        place("Wenlock District Hospital", 12.8610, 74.8419),
        place("Bantwal", 12.9119, 75.0342),
        place("Puttur", 12.7598, 75.2031),
        place("Surathkal", 13.0066, 74.7943),
        place("Mulki", 13.0918, 74.7934),
        place("Karkala", 13.2146, 74.9992),
        place("Baikampady Industrial Area", 12.9276, 74.8334),
    ]
}

// Turn-by-turn narration for a computed route path

use crate::models::{NamedLocation, Waypoint};
use crate::utils::distance::haversine_km;

/// Radius within which a path point is narrated as "near" a named place, km
const NEARBY_PLACE_KM: f64 = 0.5;

/// Initial bearing from `a` to `b` in degrees, normalized to [0, 360)
pub fn initial_bearing(a: &Waypoint, b: &Waypoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Maneuver derived from the bearing change at a path point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Straight,
    Right,
    SlightRight,
    Left,
    SlightLeft,
}

impl Turn {
    /// Classifies a bearing change already normalized to [0, 360)
    pub fn from_bearing_change(change: f64) -> Self {
        if change < 20.0 || change > 340.0 {
            Turn::Straight
        } else if change < 160.0 {
            if change < 80.0 {
                Turn::Right
            } else {
                Turn::SlightRight
            }
        } else if change > 280.0 {
            Turn::Left
        } else {
            Turn::SlightLeft
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Turn::Straight => "Continue straight",
            Turn::Right => "Turn right",
            Turn::SlightRight => "Turn slightly right",
            Turn::Left => "Turn left",
            Turn::SlightLeft => "Turn slightly left",
        }
    }
}

/// Generates simplified step-by-step directions for a path.
///
/// Intermediate points are annotated with the nearest named place within
/// 500 m when one exists.
pub fn turn_by_turn(path: &[Waypoint], places: &[NamedLocation]) -> Vec<String> {
    let mut directions = vec!["Start from your location.".to_string()];

    for i in 1..path.len().saturating_sub(1) {
        let inbound = initial_bearing(&path[i - 1], &path[i]);
        let outbound = initial_bearing(&path[i], &path[i + 1]);
        let change = (outbound - inbound + 360.0) % 360.0;
        let turn = Turn::from_bearing_change(change);

        match nearest_place(places, &path[i]) {
            Some(place) => directions.push(format!("{} near {}.", turn.phrase(), place.name)),
            None => directions.push(format!("{} and continue.", turn.phrase())),
        }
    }

    directions.push("Arrive at your destination.".to_string());
    directions
}

/// Closest named place within the narration radius, if any
fn nearest_place<'a>(places: &'a [NamedLocation], point: &Waypoint) -> Option<&'a NamedLocation> {
    let mut nearest = None;
    let mut min_distance = NEARBY_PLACE_KM;

    for place in places {
        let distance = haversine_km(point, &place.position);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(place);
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Waypoint::new(0.0, 0.0);

        let north = initial_bearing(&origin, &Waypoint::new(1.0, 0.0));
        let east = initial_bearing(&origin, &Waypoint::new(0.0, 1.0));
        let south = initial_bearing(&origin, &Waypoint::new(-1.0, 0.0));
        let west = initial_bearing(&origin, &Waypoint::new(0.0, -1.0));

        assert!((north - 0.0).abs() < 1e-9);
        assert!((east - 90.0).abs() < 1e-9);
        assert!((south - 180.0).abs() < 1e-9);
        assert!((west - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_turn_classification() {
        assert_eq!(Turn::from_bearing_change(5.0), Turn::Straight);
        assert_eq!(Turn::from_bearing_change(350.0), Turn::Straight);
        assert_eq!(Turn::from_bearing_change(45.0), Turn::Right);
        assert_eq!(Turn::from_bearing_change(120.0), Turn::SlightRight);
        assert_eq!(Turn::from_bearing_change(200.0), Turn::SlightLeft);
        assert_eq!(Turn::from_bearing_change(300.0), Turn::Left);
    }

    #[test]
    fn test_directions_annotate_nearby_place() {
        let path = [
            Waypoint::new(12.8698, 74.8439),
            Waypoint::new(12.8901, 74.8553),
            Waypoint::new(12.9100, 74.8600),
        ];
        let places = vec![NamedLocation::new(
            "Kadri Park",
            Waypoint::new(12.8901, 74.8553),
        )];

        let directions = turn_by_turn(&path, &places);

        assert_eq!(directions.len(), 3);
        assert_eq!(directions[0], "Start from your location.");
        assert!(directions[1].contains("near Kadri Park"));
        assert_eq!(directions[2], "Arrive at your destination.");
    }

    #[test]
    fn test_two_point_path_has_no_intermediate_steps() {
        let path = [Waypoint::new(12.0, 74.0), Waypoint::new(13.0, 75.0)];
        let directions = turn_by_turn(&path, &[]);

        assert_eq!(
            directions,
            vec![
                "Start from your location.".to_string(),
                "Arrive at your destination.".to_string()
            ]
        );
    }
}

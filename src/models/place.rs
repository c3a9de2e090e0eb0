// Named location used to annotate route directions

use serde::{Deserialize, Serialize};

use crate::models::Waypoint;

/// A human-readable place name pinned to a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub position: Waypoint,
}

impl NamedLocation {
    /// Creates a new named location
    pub fn new<S: Into<String>>(name: S, position: Waypoint) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

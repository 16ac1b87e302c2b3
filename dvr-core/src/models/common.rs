#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

use crate::utils::Random;
use std::fmt::{Display, Formatter};

/// Alias to a travel cost value.
pub type Cost = i64;

/// Contains the information about a single delivery location.
/// Treated as read-only once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// X-coordinate of this location.
    pub x: i64,
    /// Y-coordinate of this location.
    pub y: i64,
    /// An optional name used to identify this location, empty when unnamed.
    pub name: String,
}

impl Location {
    /// Creates a new location from coordinates and a name.
    pub fn new(x: i64, y: i64, name: impl Into<String>) -> Self {
        Self { x, y, name: name.into() }
    }

    /// Returns a list of random locations with coordinates uniformly
    /// distributed on `[-range, range]`, each named after its index.
    pub fn random_list(count: usize, range: i64, random: &(dyn Random + Send + Sync)) -> Vec<Location> {
        assert!(count > 0, "location list requires at least one location");
        (0..count)
            .map(|idx| Location::new(random.uniform_int(-range, range), random.uniform_int(-range, range), idx.to_string()))
            .collect()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:({},{})", self.name, self.x, self.y)
    }
}

/// An axis aligned bounding box over location coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum x-coordinate.
    pub x_min: i64,
    /// Maximum x-coordinate.
    pub x_max: i64,
    /// Minimum y-coordinate.
    pub y_min: i64,
    /// Maximum y-coordinate.
    pub y_max: i64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self { x_min: i64::MAX, x_max: i64::MIN, y_min: i64::MAX, y_max: i64::MIN }
    }
}

impl BoundingBox {
    /// Checks if the bounding box encloses at least one point.
    pub fn is_valid(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// Grows the bounding box to enclose the given point, if it does not already.
    pub fn include(&mut self, x: i64, y: i64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }
}

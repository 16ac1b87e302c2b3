#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::common::{BoundingBox, Cost, Location};

/// Holds the travel costs between all pairs of locations within a location
/// list. Treated as read-only once constructed.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    locations: Vec<Location>,
    distances: Vec<Cost>,
    max_distance: Cost,
    bounding_box: BoundingBox,
}

impl DistanceMatrix {
    /// Creates a new instance of `DistanceMatrix`, precomputing all pairwise
    /// travel costs. The location list must not be empty.
    pub fn new(locations: Vec<Location>) -> Self {
        assert!(!locations.is_empty(), "distance matrix requires at least one location");

        let size = locations.len();
        let mut distances = vec![0; size * size];
        let mut max_distance = 0;
        let mut bounding_box = BoundingBox::default();

        for (a, location) in locations.iter().enumerate() {
            bounding_box.include(location.x, location.y);
            for (b, other) in locations.iter().enumerate() {
                let distance = calculate_distance(location, other);
                distances[a * size + b] = distance;
                max_distance = max_distance.max(distance);
            }
        }

        Self { locations, distances, max_distance, bounding_box }
    }

    /// Returns the number of locations within the matrix.
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    /// Returns the cost of travelling from location `a` to location `b`.
    pub fn distance(&self, a: usize, b: usize) -> Cost {
        self.distances[a * self.locations.len() + b]
    }

    /// Returns the location at the given index.
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// Returns all locations within the matrix.
    pub fn locations(&self) -> &[Location] {
        self.locations.as_slice()
    }

    /// Returns the largest cost between any pair of locations.
    pub fn max_distance(&self) -> Cost {
        self.max_distance
    }

    /// Returns the bounding box enclosing all locations.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}

fn calculate_distance(a: &Location, b: &Location) -> Cost {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt() as Cost
}

/// The delivery fleet: one capacity entry per vehicle. A capacity bounds the
/// number of consecutive non-depot stops a vehicle may make before a forced
/// depot return.
#[derive(Clone, Debug)]
pub struct Fleet {
    capacities: Vec<usize>,
}

impl Fleet {
    /// Creates a new instance of `Fleet` from per-vehicle capacities.
    /// Requires at least one vehicle; every capacity must be positive.
    pub fn new(capacities: Vec<usize>) -> Self {
        assert!(!capacities.is_empty(), "fleet requires at least one vehicle");
        assert!(capacities.iter().all(|&capacity| capacity > 0), "vehicle capacity must be positive");

        Self { capacities }
    }

    /// Returns the number of vehicles within the fleet.
    pub fn vehicle_count(&self) -> usize {
        self.capacities.len()
    }

    /// Returns the capacity of the given vehicle.
    pub fn capacity(&self, vehicle: usize) -> usize {
        self.capacities[vehicle]
    }

    /// Returns all vehicle capacities.
    pub fn capacities(&self) -> &[usize] {
        self.capacities.as_slice()
    }
}

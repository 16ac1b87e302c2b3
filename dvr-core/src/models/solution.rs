#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::common::Cost;
use crate::models::problem::DistanceMatrix;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// An ordered list of location indices to be visited by a single vehicle,
/// with an incrementally maintained total travel cost.
///
/// Cloning a route copies the index list; the distance matrix itself is
/// immutable and stays shared.
#[derive(Clone, Debug)]
pub struct Route {
    matrix: Arc<DistanceMatrix>,
    indices: Vec<usize>,
    cost: Cost,
}

impl Route {
    /// Creates an empty route over the given distance matrix.
    pub fn new(matrix: Arc<DistanceMatrix>) -> Self {
        Self { matrix, indices: Vec::new(), cost: 0 }
    }

    /// Appends a location index to the route, extending the cost by the edge
    /// from the previous last index.
    pub fn add(&mut self, index: usize) {
        assert!(index < self.matrix.size(), "location index out of bounds");

        if let Some(&last) = self.indices.last() {
            self.cost += self.matrix.distance(last, index);
        }
        self.indices.push(index);
    }

    /// Replaces the location index at the given position, adjusting the total
    /// cost against the adjacent edges only.
    pub fn set_index_at(&mut self, position: usize, index: usize) {
        assert!(index < self.matrix.size(), "location index out of bounds");

        let old = self.indices[position];
        if old == index {
            return;
        }

        if position > 0 {
            let prev = self.indices[position - 1];
            self.cost += self.matrix.distance(prev, index) - self.matrix.distance(prev, old);
        }
        if position + 1 < self.indices.len() {
            let next = self.indices[position + 1];
            self.cost += self.matrix.distance(index, next) - self.matrix.distance(old, next);
        }

        self.indices[position] = index;
    }

    /// Removes all location indices and zeroes the cost.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.cost = 0;
    }

    /// Returns the location index at the given position within the route.
    pub fn get(&self, position: usize) -> usize {
        self.indices[position]
    }

    /// Returns the last location index within the route, if any.
    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Returns all location indices in visiting order.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Returns the number of location indices within the route.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Checks if the route has no locations.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the total travel cost of the route.
    pub fn cost(&self) -> Cost {
        self.cost
    }
}

impl Display for Route {
    /// Renders the route as its index sequence followed by the total travel
    /// distance, or a sentinel text for an empty route.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.indices.is_empty() {
            return f.write_str("no route");
        }

        let path = self.indices.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> ");

        write!(f, "{} : distance {}", path, self.cost)
    }
}

/// The per-vehicle routes produced by a single solver run, jointly covering
/// every non-depot location exactly once.
#[derive(Clone, Debug)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Creates a route set from per-vehicle routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Creates the sentinel route set: one empty, zero-cost route per vehicle.
    pub fn sentinel(matrix: Arc<DistanceMatrix>, vehicle_count: usize) -> Self {
        Self { routes: (0..vehicle_count).map(|_| Route::new(matrix.clone())).collect() }
    }

    /// Returns the sum of the member route costs.
    pub fn total_cost(&self) -> Cost {
        self.routes.iter().map(Route::cost).sum()
    }

    /// Returns the route assigned to the given vehicle.
    pub fn get(&self, vehicle: usize) -> Option<&Route> {
        self.routes.get(vehicle)
    }

    /// Returns all member routes.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    /// Returns the number of vehicles the route set was built for.
    pub fn vehicle_count(&self) -> usize {
        self.routes.len()
    }
}

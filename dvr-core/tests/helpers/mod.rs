//! Provides common test helper functionality.

use crate::models::common::{Cost, Location};
use crate::models::problem::{DistanceMatrix, Fleet};
use crate::models::solution::{Route, RouteSet};
use crate::utils::{DefaultRandom, Environment, InfoLogger};
use std::sync::Arc;

/// Creates locations on the given coordinates, named after their indices.
pub fn create_locations(coords: &[(i64, i64)]) -> Vec<Location> {
    coords.iter().enumerate().map(|(idx, &(x, y))| Location::new(x, y, idx.to_string())).collect()
}

/// Creates a distance matrix over the given coordinates.
pub fn create_matrix(coords: &[(i64, i64)]) -> Arc<DistanceMatrix> {
    Arc::new(DistanceMatrix::new(create_locations(coords)))
}

/// Creates the four-location instance used across solver tests: a depot at
/// the origin and three locations around it. The cheapest single-vehicle
/// tour costs 120.
pub fn create_scenario_matrix() -> Arc<DistanceMatrix> {
    create_matrix(&[(0, 0), (0, 20), (20, 0), (-20, -20)])
}

/// Creates a fleet from the given capacities.
pub fn create_fleet(capacities: &[usize]) -> Fleet {
    Fleet::new(capacities.to_vec())
}

/// Creates an environment with a fixed seed and a no-op logger.
pub fn create_test_environment(seed: u64) -> Arc<Environment> {
    let logger: InfoLogger = Arc::new(|_: &str| {});
    Arc::new(Environment::new(Arc::new(DefaultRandom::new_with_seed(seed)), logger))
}

/// Recomputes a route cost from scratch as the sum of consecutive edge costs.
pub fn recompute_cost(route: &Route, matrix: &DistanceMatrix) -> Cost {
    route.indices().windows(2).map(|edge| matrix.distance(edge[0], edge[1])).sum()
}

/// Asserts that every route opens and closes at the depot and that the
/// non-depot locations are covered exactly once across the whole route set.
pub fn assert_full_coverage(route_set: &RouteSet, location_count: usize) {
    let mut visited: Vec<usize> = Vec::new();

    for route in route_set.routes() {
        assert!(!route.is_empty(), "route must not be empty");
        assert_eq!(route.get(0), 0, "route must start at the depot");
        assert_eq!(route.last(), Some(0), "route must end at the depot");
        visited.extend(route.indices().iter().copied().filter(|&idx| idx != 0));
    }

    visited.sort_unstable();
    assert_eq!(visited, (1..location_count).collect::<Vec<_>>(), "locations must be covered exactly once");
}

/// Returns the longest run of consecutive non-depot stops within the route.
pub fn max_consecutive_stops(route: &Route) -> usize {
    let mut max = 0;
    let mut current = 0;

    for &idx in route.indices() {
        if idx == 0 {
            current = 0;
        } else {
            current += 1;
            max = max.max(current);
        }
    }

    max
}

/// Returns per-vehicle index sequences of the route set.
pub fn route_indices(route_set: &RouteSet) -> Vec<Vec<usize>> {
    route_set.routes().iter().map(|route| route.indices().to_vec()).collect()
}

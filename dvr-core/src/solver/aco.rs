#[cfg(test)]
#[path = "../../tests/unit/solver/aco_test.rs"]
mod aco_test;

use crate::models::common::Cost;
use crate::models::problem::{DistanceMatrix, Fleet};
use crate::models::solution::{Route, RouteSet};
use crate::utils::Environment;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Tuning values for the ant colony solver. Adjustable, not correctness
/// critical.
#[derive(Clone, Debug)]
pub struct AcoConfig {
    /// Offset which keeps the distance part of a desirability score strictly
    /// positive.
    pub desirability_offset: f64,
    /// Smallest pheromone level used when sampling candidates.
    pub pheromone_floor: f64,
    /// Multiplier applied to every pheromone entry once per iteration.
    pub decay: f64,
    /// Scale of the deposit added along the edges of an above-average route
    /// set.
    pub deposit_scale: f64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self { desirability_offset: 1.001, pheromone_floor: 0.001, decay: 0.999, deposit_scale: 0.01 }
    }
}

/// A solver which uses ant colony optimization to find route sets.
///
/// Routes are constructed probabilistically, biased towards short edges and
/// edges which appeared in previously successful route sets; the bias is
/// reinforced after every iteration through a per-vehicle pheromone matrix.
#[derive(Clone)]
pub struct AcoSolver {
    matrix: Arc<DistanceMatrix>,
    fleet: Fleet,
    config: AcoConfig,
    /// Per-vehicle symmetric reinforcement scores in upper-triangular storage.
    pheromones: Vec<Vec<f64>>,
    pheromone_max: f64,
    cost_average: Cost,
    best: RouteSet,
    rng: SmallRng,
}

impl AcoSolver {
    /// Number of construction iterations used by the background worker per
    /// run.
    pub const DEFAULT_ITERATIONS: usize = 40;

    /// Creates a new instance of `AcoSolver` with zeroed pheromone levels.
    pub fn new(matrix: Arc<DistanceMatrix>, fleet: Fleet, config: AcoConfig, environment: &Environment) -> Self {
        assert!(matrix.size() > 0, "solver requires a non-empty distance matrix");

        let triangle_size = matrix.size() * (matrix.size() + 1) / 2;

        Self {
            pheromones: vec![vec![0.; triangle_size]; fleet.vehicle_count()],
            pheromone_max: config.pheromone_floor,
            cost_average: 0,
            best: RouteSet::sentinel(matrix.clone(), fleet.vehicle_count()),
            rng: environment.random.get_rng(),
            matrix,
            fleet,
            config,
        }
    }

    /// Runs the requested number of construction iterations and returns the
    /// best route set this solver instance has produced so far.
    pub fn run(&mut self, iterations: usize) -> RouteSet {
        let size = self.matrix.size();
        let vehicles = self.fleet.vehicle_count();

        let mut routes: Vec<Route> = (0..vehicles).map(|_| Route::new(self.matrix.clone())).collect();
        let mut to_visit: Vec<usize> = Vec::with_capacity(size.saturating_sub(1));
        let mut desirability = vec![0.; size];
        let mut stops_since_depot = vec![0; vehicles];
        let mut parked = vec![false; vehicles];

        for _ in 0..iterations {
            to_visit.clear();
            to_visit.extend(1..size);
            for vehicle in 0..vehicles {
                routes[vehicle].clear();
                routes[vehicle].add(0);
                stops_since_depot[vehicle] = 0;
                parked[vehicle] = false;
            }

            self.construct(&mut routes, &mut to_visit, &mut desirability, &mut stops_since_depot, &mut parked);

            // a return depot trip for each vehicle not already there
            for route in routes.iter_mut() {
                if route.last() != Some(0) {
                    route.add(0);
                }
            }

            let total_cost = routes.iter().map(Route::cost).sum::<Cost>();
            self.reinforce(&routes, total_cost);

            if self.best.total_cost() == 0 || total_cost < self.best.total_cost() {
                self.best = RouteSet::new(routes.clone());
            }
        }

        self.best.clone()
    }

    /// One construction pass: assigns every unvisited location to a vehicle.
    fn construct(
        &mut self,
        routes: &mut [Route],
        to_visit: &mut Vec<usize>,
        desirability: &mut [f64],
        stops_since_depot: &mut [usize],
        parked: &mut [bool],
    ) {
        let vehicles = routes.len();
        let mut vehicle = vehicles - 1;

        while !to_visit.is_empty() {
            vehicle = (vehicle + 1) % vehicles;
            if parked[vehicle] {
                if let Some(active) = (1..vehicles).map(|offset| (vehicle + offset) % vehicles).find(|&v| !parked[v]) {
                    vehicle = active;
                } else {
                    // all vehicles parked: resume the one with the cheapest route
                    vehicle = (0..vehicles).min_by_key(|&v| routes[v].cost()).unwrap();
                    parked[vehicle] = false;
                }
            }

            let current = routes[vehicle].last().unwrap();

            // the longest edge from the current position to any candidate
            let max_distance = to_visit.iter().map(|&candidate| self.matrix.distance(current, candidate)).max().unwrap();

            let mut total = 0.;
            for (idx, &candidate) in to_visit.iter().enumerate() {
                let ratio = if max_distance > 0 {
                    self.matrix.distance(current, candidate) as f64 / max_distance as f64
                } else {
                    0.
                };
                let pheromone = self.pheromone(vehicle, current, candidate).max(self.config.pheromone_floor);
                desirability[idx] = (self.config.desirability_offset - ratio) + pheromone;
                total += desirability[idx];
            }

            // roulette-wheel sampling proportional to desirability
            let mut target = self.rng.gen_range(0_f64..1.) * total;
            let mut chosen = to_visit.len() - 1;
            for idx in 0..to_visit.len() {
                if target <= desirability[idx] {
                    chosen = idx;
                    break;
                }
                target -= desirability[idx];
            }

            routes[vehicle].add(to_visit.swap_remove(chosen));

            stops_since_depot[vehicle] += 1;
            if stops_since_depot[vehicle] >= self.fleet.capacity(vehicle) {
                stops_since_depot[vehicle] = 0;
                routes[vehicle].add(0);
                parked[vehicle] = true;
            }
        }
    }

    /// Updates the rolling cost average and redistributes pheromone: every
    /// entry decays, then the edges of an above-average route set receive a
    /// deposit growing supralinearly with the margin above average.
    fn reinforce(&mut self, routes: &[Route], total_cost: Cost) {
        if total_cost == 0 {
            return;
        }

        self.cost_average =
            if self.cost_average == 0 { total_cost } else { (self.cost_average * 99 + total_cost) / 100 };

        let score = self.cost_average as f64 / total_cost as f64;

        self.decay();
        if score >= 1. {
            self.deposit(routes, self.config.deposit_scale * score.powi(3));
        }
    }

    fn decay(&mut self) {
        let mut max = self.config.pheromone_floor;
        for levels in self.pheromones.iter_mut() {
            for level in levels.iter_mut() {
                *level *= self.config.decay;
                max = max.max(*level);
            }
        }
        self.pheromone_max = max;
    }

    fn deposit(&mut self, routes: &[Route], amount: f64) {
        for (vehicle, route) in routes.iter().enumerate() {
            for edge in route.indices().windows(2) {
                let level = &mut self.pheromones[vehicle][edge_index(edge[0], edge[1])];
                *level += amount;
                self.pheromone_max = self.pheromone_max.max(*level);
            }
        }
    }

    /// Returns the rolling average total cost over constructed route sets.
    pub fn average_cost(&self) -> Cost {
        self.cost_average
    }

    /// Returns the highest pheromone level within the matrix.
    pub fn max_pheromone(&self) -> f64 {
        self.pheromone_max
    }

    /// Returns the strongest pheromone level between two locations across all
    /// vehicles.
    pub fn pheromone_between(&self, a: usize, b: usize) -> f64 {
        (0..self.fleet.vehicle_count()).map(|vehicle| self.pheromone(vehicle, a, b)).fold(0., f64::max)
    }

    fn pheromone(&self, vehicle: usize, a: usize, b: usize) -> f64 {
        self.pheromones[vehicle][edge_index(a, b)]
    }
}

/// Maps an unordered location index pair onto upper-triangular storage.
fn edge_index(a: usize, b: usize) -> usize {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    hi * (hi + 1) / 2 + lo
}

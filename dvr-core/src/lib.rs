//! Core building blocks for solving a capacitated delivery vehicle routing
//! problem: route and distance data structures, two heuristic solvers (ant
//! colony optimization and a genetic algorithm), and a background worker which
//! runs the active solver continuously and publishes improving route sets to
//! concurrent readers.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;

//! Heuristic route solvers and the background worker which runs them.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod aco;
pub use self::aco::{AcoConfig, AcoSolver};

mod genetic;
pub use self::genetic::{GaConfig, GeneticSolver, Genome};

mod thread;
pub use self::thread::SolverThread;

use crate::models::problem::{DistanceMatrix, Fleet};
use crate::models::solution::RouteSet;
use crate::utils::Environment;
use std::sync::Arc;

/// Identifies a solver implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverType {
    /// Ant colony optimization.
    Aco,
    /// Genetic algorithm.
    Genetic,
}

/// A route solver of a runtime-selected kind.
///
/// Cloning a solver copies its full learned state (pheromone levels or parent
/// genomes), which makes `Clone` double as the deep diagnostic copy handed out
/// to readers.
#[derive(Clone)]
pub enum Solver {
    /// An ant colony optimization solver.
    Aco(AcoSolver),
    /// A genetic algorithm solver.
    Genetic(GeneticSolver),
}

impl Solver {
    /// Creates a solver of the requested type with default tuning values.
    pub fn new(solver_type: SolverType, matrix: Arc<DistanceMatrix>, fleet: Fleet, environment: &Environment) -> Self {
        match solver_type {
            SolverType::Aco => Self::Aco(AcoSolver::new(matrix, fleet, AcoConfig::default(), environment)),
            SolverType::Genetic => Self::Genetic(GeneticSolver::new(matrix, fleet, GaConfig::default(), environment)),
        }
    }

    /// Returns the type of this solver.
    pub fn solver_type(&self) -> SolverType {
        match self {
            Self::Aco(_) => SolverType::Aco,
            Self::Genetic(_) => SolverType::Genetic,
        }
    }

    /// Runs the solver for the given number of iterations and returns the
    /// best route set found.
    pub fn run(&mut self, iterations: usize) -> RouteSet {
        match self {
            Self::Aco(solver) => solver.run(iterations),
            Self::Genetic(solver) => solver.run(iterations),
        }
    }

    /// Runs the solver for its default iteration budget.
    pub fn run_default(&mut self) -> RouteSet {
        match self {
            Self::Aco(solver) => solver.run(AcoSolver::DEFAULT_ITERATIONS),
            Self::Genetic(solver) => solver.run(GeneticSolver::DEFAULT_ITERATIONS),
        }
    }
}

//! This module reimports commonly used types.

pub use crate::models::common::{BoundingBox, Cost, Location};
pub use crate::models::problem::{DistanceMatrix, Fleet};
pub use crate::models::solution::{Route, RouteSet};

pub use crate::solver::AcoConfig;
pub use crate::solver::AcoSolver;
pub use crate::solver::GaConfig;
pub use crate::solver::GeneticSolver;
pub use crate::solver::Genome;
pub use crate::solver::Solver;
pub use crate::solver::SolverThread;
pub use crate::solver::SolverType;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;

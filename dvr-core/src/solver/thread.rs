#[cfg(test)]
#[path = "../../tests/unit/solver/thread_test.rs"]
mod thread_test;

use crate::models::problem::{DistanceMatrix, Fleet};
use crate::models::solution::RouteSet;
use crate::solver::{Solver, SolverType};
use crate::utils::Environment;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

/// State shared between the worker thread and control callers. Guarded by the
/// single state mutex within `Shared`.
struct State {
    /// The active solver. The state mutex is never held while the solver
    /// runs; the inner mutex is only ever locked by the worker, so swapping
    /// the `Arc` out is how mutators retire an in-flight run.
    solver: Arc<Mutex<Solver>>,
    solver_type: SolverType,
    /// A copy of the solver taken at the last iteration boundary, handed out
    /// to diagnostic readers.
    solver_snapshot: Solver,
    matrix: Arc<DistanceMatrix>,
    capacities: Vec<usize>,
    best: RouteSet,
    paused: bool,
    shutdown: bool,
}

struct Shared {
    state: Mutex<State>,
    condvar: Condvar,
}

/// Owns the active solver and runs it continuously on a dedicated background
/// thread, publishing the best route set found so far.
///
/// Control calls and readers are serialized with the worker through a single
/// mutex, but the long-running solver call itself executes outside of it: a
/// solver or matrix swapped mid-run is detected afterwards by handle identity
/// and the stale result is discarded. Readers only ever receive copies, never
/// live references into worker state.
pub struct SolverThread {
    shared: Arc<Shared>,
    environment: Arc<Environment>,
}

impl SolverThread {
    /// Creates the worker in the paused state and spawns its thread.
    /// Requires at least one vehicle.
    pub fn new(
        matrix: Arc<DistanceMatrix>,
        capacities: Vec<usize>,
        solver_type: SolverType,
        environment: Arc<Environment>,
    ) -> Self {
        let fleet = Fleet::new(capacities.clone());
        let solver = Solver::new(solver_type, matrix.clone(), fleet, environment.as_ref());

        let state = State {
            solver_type,
            solver_snapshot: solver.clone(),
            solver: Arc::new(Mutex::new(solver)),
            best: RouteSet::sentinel(matrix.clone(), capacities.len()),
            matrix,
            capacities,
            paused: true,
            shutdown: false,
        };
        let shared = Arc::new(Shared { state: Mutex::new(state), condvar: Condvar::new() });

        let worker_shared = shared.clone();
        let worker_environment = environment.clone();
        thread::Builder::new()
            .name("solver".to_string())
            .spawn(move || run_worker(worker_shared, worker_environment))
            .expect("cannot spawn solver thread");

        Self { shared, environment }
    }

    /// Checks if the worker is paused.
    pub fn is_paused(&self) -> bool {
        self.shared.state.lock().unwrap().paused
    }

    /// Tells the worker to stop running and wait. Idempotent.
    pub fn pause(&self) {
        self.shared.state.lock().unwrap().paused = true;
    }

    /// Tells the worker to resume running.
    pub fn unpause(&self) {
        self.shared.state.lock().unwrap().paused = false;
        self.shared.condvar.notify_one();
    }

    /// Returns a copy of the best route set published so far: the sentinel
    /// (one empty route per vehicle) until a first result lands.
    pub fn route(&self) -> RouteSet {
        self.shared.state.lock().unwrap().best.clone()
    }

    /// Returns the distance matrix currently in use.
    pub fn distance_matrix(&self) -> Arc<DistanceMatrix> {
        self.shared.state.lock().unwrap().matrix.clone()
    }

    /// Returns a copy of the solver as of the last iteration boundary, for
    /// diagnostic introspection of pheromone levels or parent genomes.
    pub fn solver(&self) -> Solver {
        self.shared.state.lock().unwrap().solver_snapshot.clone()
    }

    /// Returns the type of the active solver.
    pub fn solver_type(&self) -> SolverType {
        self.shared.state.lock().unwrap().solver_type
    }

    /// Replaces the distance matrix, rebuilding the active solver against it
    /// and resetting the published best to the sentinel.
    pub fn set_distance_matrix(&self, matrix: Arc<DistanceMatrix>) {
        let mut state = self.shared.state.lock().unwrap();
        state.matrix = matrix;
        let solver_type = state.solver_type;
        self.rebuild(&mut state, solver_type);

        (self.environment.logger)("rebuilt the solver against a new distance matrix");
    }

    /// Changes the type of the active solver, rebuilding it and resetting the
    /// published best. A no-op when the type is unchanged.
    pub fn set_solver_type(&self, solver_type: SolverType) {
        let mut state = self.shared.state.lock().unwrap();
        if state.solver_type != solver_type {
            self.rebuild(&mut state, solver_type);

            (self.environment.logger)(&format!("switched the solver type to {solver_type:?}"));
        }
    }

    /// Registers a new vehicle with the given capacity, rebuilding the active
    /// solver and resetting the published best. Returns the index assigned to
    /// the vehicle, used to pick its route from later `route()` calls.
    pub fn add_vehicle(&self, capacity: usize) -> usize {
        assert!(capacity > 0, "vehicle capacity must be positive");

        let mut state = self.shared.state.lock().unwrap();
        state.capacities.push(capacity);
        let solver_type = state.solver_type;
        self.rebuild(&mut state, solver_type);
        let index = state.capacities.len() - 1;

        (self.environment.logger)(&format!("registered vehicle {index} with capacity {capacity}"));

        index
    }

    fn rebuild(&self, state: &mut State, solver_type: SolverType) {
        let fleet = Fleet::new(state.capacities.clone());
        let solver = Solver::new(solver_type, state.matrix.clone(), fleet, self.environment.as_ref());

        state.solver_type = solver_type;
        state.solver_snapshot = solver.clone();
        state.solver = Arc::new(Mutex::new(solver));
        state.best = RouteSet::sentinel(state.matrix.clone(), state.capacities.len());
    }
}

impl Drop for SolverThread {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock().unwrap();
        state.shutdown = true;
        self.shared.condvar.notify_one();
    }
}

fn run_worker(shared: Arc<Shared>, environment: Arc<Environment>) {
    loop {
        // wait while paused, then take a handle to the active solver
        let active = {
            let mut state = shared.state.lock().unwrap();
            while state.paused && !state.shutdown {
                state = shared.condvar.wait(state).unwrap();
            }
            if state.shutdown {
                return;
            }
            state.solver.clone()
        };

        // the state lock is not held while the solver runs
        let (result, snapshot) = {
            let mut solver = active.lock().unwrap();
            let result = solver.run_default();
            (result, solver.clone())
        };

        let mut state = shared.state.lock().unwrap();
        if Arc::ptr_eq(&active, &state.solver) {
            state.solver_snapshot = snapshot;
            let result_cost = result.total_cost();
            if state.best.total_cost() == 0 || result_cost < state.best.total_cost() {
                state.best = result;
                (environment.logger)(&format!("published a better route set: total cost {result_cost}"));
            }
        } else {
            // the solver was swapped mid-run: the result is stale
            state.best = RouteSet::sentinel(state.matrix.clone(), state.capacities.len());
        }
    }
}

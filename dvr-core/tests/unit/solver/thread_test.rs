use super::*;
use crate::helpers::*;
use crate::models::solution::Route;
use crate::solver::AcoConfig;
use std::time::{Duration, Instant};

fn create_thread(matrix: Arc<DistanceMatrix>, capacities: &[usize], solver_type: SolverType) -> SolverThread {
    SolverThread::new(matrix, capacities.to_vec(), solver_type, create_test_environment(42))
}

fn wait_for<F: Fn() -> bool>(condition: F) -> bool {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }

    false
}

fn covers(route_set: &RouteSet, location_count: usize) -> bool {
    let mut visited: Vec<usize> =
        route_set.routes().iter().flat_map(|route| route.indices().iter().copied()).filter(|&idx| idx != 0).collect();
    visited.sort_unstable();

    visited == (1..location_count).collect::<Vec<_>>()
}

#[test]
fn can_start_paused_with_sentinel_route() {
    let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Aco);

    assert!(thread.is_paused());
    assert_eq!(thread.solver_type(), SolverType::Aco);

    let route_set = thread.route();
    assert_eq!(route_set.vehicle_count(), 1);
    assert_eq!(route_set.total_cost(), 0);
    assert!(route_set.routes().iter().all(Route::is_empty));
}

#[test]
fn can_publish_improving_route_sets() {
    let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Aco);

    thread.unpause();
    assert!(!thread.is_paused());
    assert!(wait_for(|| thread.route().total_cost() > 0));

    assert_full_coverage(&thread.route(), 4);
}

#[test]
fn can_return_equal_snapshots_without_improvement() {
    let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Aco);

    thread.unpause();
    assert!(wait_for(|| thread.route().total_cost() > 0));
    thread.pause();
    // let an in-flight run land before snapshotting
    thread::sleep(Duration::from_millis(200));

    let first = thread.route();
    let second = thread.route();

    assert_eq!(route_indices(&first), route_indices(&second));
    assert_eq!(first.total_cost(), second.total_cost());
}

#[test]
fn can_pause_and_resume() {
    let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Genetic);

    thread.unpause();
    assert!(wait_for(|| thread.route().total_cost() > 0));
    thread.pause();
    thread::sleep(Duration::from_millis(200));
    let paused_cost = thread.route().total_cost();

    thread.unpause();
    assert!(!thread.is_paused());
    thread::sleep(Duration::from_millis(100));

    let resumed_cost = thread.route().total_cost();
    assert!(resumed_cost > 0);
    assert!(resumed_cost <= paused_cost);
}

#[test]
fn can_discard_stale_results_when_matrix_changes() {
    let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Aco);
    thread.unpause();
    assert!(wait_for(|| thread.route().total_cost() > 0));

    let matrix = create_matrix(&[(0, 0), (3, 1), (9, 4), (2, 8), (7, 7), (5, 2)]);
    thread.set_distance_matrix(matrix.clone());

    assert_eq!(thread.distance_matrix().size(), 6);
    assert!(wait_for(|| covers(&thread.route(), 6)));
    assert_full_coverage(&thread.route(), 6);
}

#[test]
fn can_switch_solver_type() {
    let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Aco);
    thread.unpause();
    assert!(wait_for(|| thread.route().total_cost() > 0));

    thread.set_solver_type(SolverType::Genetic);

    assert_eq!(thread.solver_type(), SolverType::Genetic);
    assert_eq!(thread.solver().solver_type(), SolverType::Genetic);
    assert!(wait_for(|| covers(&thread.route(), 4)));

    // switching to the active type keeps the state untouched
    thread.set_solver_type(SolverType::Genetic);
    assert_eq!(thread.solver_type(), SolverType::Genetic);
}

#[test]
fn can_register_vehicles() {
    let thread = create_thread(create_scenario_matrix(), &[2], SolverType::Aco);

    let index = thread.add_vehicle(3);

    assert_eq!(index, 1);
    assert_eq!(thread.route().vehicle_count(), 2);

    thread.unpause();
    assert!(wait_for(|| thread.route().total_cost() > 0 && thread.route().vehicle_count() == 2));
    assert_full_coverage(&thread.route(), 4);
}

#[test]
fn can_expose_diagnostic_solver_copy() {
    let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Aco);
    thread.unpause();
    assert!(wait_for(|| thread.route().total_cost() > 0));

    match thread.solver() {
        Solver::Aco(solver) => assert!(solver.max_pheromone() >= AcoConfig::default().pheromone_floor),
        Solver::Genetic(_) => unreachable!("the active solver is ant colony optimization"),
    }
}

#[test]
fn can_shut_down_on_drop() {
    {
        let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Aco);
        thread.unpause();
        thread::sleep(Duration::from_millis(50));
    }

    {
        let thread = create_thread(create_scenario_matrix(), &[3], SolverType::Genetic);
        assert!(thread.is_paused());
    }
}

#[test]
#[should_panic]
fn cannot_create_thread_without_vehicles() {
    let _ = create_thread(create_scenario_matrix(), &[], SolverType::Aco);
}

use super::*;
use crate::helpers::*;

#[test]
fn can_create_solver_of_each_type() {
    let environment = create_test_environment(1);

    let aco = Solver::new(SolverType::Aco, create_scenario_matrix(), create_fleet(&[3]), &environment);
    let genetic = Solver::new(SolverType::Genetic, create_scenario_matrix(), create_fleet(&[3]), &environment);

    assert_eq!(aco.solver_type(), SolverType::Aco);
    assert_eq!(genetic.solver_type(), SolverType::Genetic);
}

#[test]
fn can_run_through_enum_dispatch() {
    let environment = create_test_environment(2);

    [SolverType::Aco, SolverType::Genetic].into_iter().for_each(|solver_type| {
        let mut solver = Solver::new(solver_type, create_scenario_matrix(), create_fleet(&[3]), &environment);

        assert_full_coverage(&solver.run(1), 4);
        assert_full_coverage(&solver.run_default(), 4);
    });
}

#[test]
fn can_deep_copy_solver() {
    let environment = create_test_environment(3);
    let mut solver = Solver::new(SolverType::Aco, create_scenario_matrix(), create_fleet(&[3]), &environment);
    solver.run(5);

    let mut copy = solver.clone();

    assert_eq!(copy.solver_type(), solver.solver_type());
    assert_full_coverage(&copy.run(1), 4);
    assert_full_coverage(&solver.run(1), 4);
}

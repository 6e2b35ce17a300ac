//! Unit tests for routes, solutions, objective evaluation and feasibility.

use moalns_2evrp::error::ConfigurationError;
use moalns_2evrp::evaluator::{Evaluator, TimeObjective};
use moalns_2evrp::feasibility::{FeasibilityChecker, TimeWindowPolicy};
use moalns_2evrp::instance::{reference_problem, reference_seed_solution};
use moalns_2evrp::solution::{Route, Solution};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_route_distance_and_load() {
    let problem = reference_problem().unwrap();

    let route = Route::from_ids(&["C1", "C2", "C3"]);
    let expected = 17f64.sqrt() + 34f64.sqrt();
    assert!(approx_eq(route.distance(&problem).unwrap(), expected));
    assert_eq!(route.load(&problem).unwrap(), 9);

    // Empty and single-node routes have no length
    assert_eq!(Route::new().distance(&problem).unwrap(), 0.0);
    assert_eq!(Route::from_ids(&["C4"]).distance(&problem).unwrap(), 0.0);
    assert_eq!(Route::new().load(&problem).unwrap(), 0);
}

#[test]
fn test_evaluate_reference_seed() {
    let problem = reference_problem().unwrap();
    let evaluator = Evaluator::new(&problem);

    let objectives = evaluator.evaluate(&reference_seed_solution()).unwrap();

    // Two trucks DC -> S1 over sqrt(50) each at rate 20, vehicles at rate 10
    let truck_cost = 2.0 * 50f64.sqrt() * 20.0;
    let vehicle_cost = (17f64.sqrt() + 53f64.sqrt()) * 10.0;
    assert!(approx_eq(objectives.cost, truck_cost + vehicle_cost));
    assert_eq!(objectives.time, 4.0);
    assert_eq!(objectives.vehicles, 2);
}

#[test]
fn test_evaluate_empty_routes() {
    let problem = reference_problem().unwrap();
    let evaluator = Evaluator::new(&problem);

    let solution = Solution::new(vec![Route::new()], vec![Route::new(), Route::new(), Route::new()]);
    let objectives = evaluator.evaluate(&solution).unwrap();

    assert_eq!(objectives.cost, 0.0);
    assert_eq!(objectives.time, 0.0);
    assert_eq!(objectives.vehicles, 3);

    let checker = FeasibilityChecker::new(&problem);
    assert!(checker.is_feasible(&solution).unwrap());
}

#[test]
fn test_evaluate_single_node_routes() {
    let problem = reference_problem().unwrap();
    let evaluator = Evaluator::new(&problem);

    let solution = Solution::from_ids(&[] as &[Vec<&str>], &[vec!["C1"], vec!["C2"]]);
    let objectives = evaluator.evaluate(&solution).unwrap();

    assert_eq!(objectives.cost, 0.0);
    assert_eq!(objectives.time, 2.0);
    assert_eq!(objectives.vehicles, 2);
}

#[test]
fn test_evaluate_travel_time() {
    let problem = reference_problem().unwrap();
    let evaluator =
        Evaluator::new(&problem).with_time_objective(TimeObjective::TravelTime { speed: 2.0 });

    let objectives = evaluator.evaluate(&reference_seed_solution()).unwrap();
    let expected = (17f64.sqrt() + 53f64.sqrt()) / 2.0;
    assert!(approx_eq(objectives.time, expected));
}

#[test]
fn test_evaluate_unknown_node() {
    let problem = reference_problem().unwrap();
    let evaluator = Evaluator::new(&problem);

    let solution = Solution::from_ids(&[] as &[Vec<&str>], &[vec!["C1", "C9"]]);
    assert!(matches!(
        evaluator.evaluate(&solution),
        Err(ConfigurationError::UnknownNode(_))
    ));
}

#[test]
fn test_capacity_feasibility() {
    let problem = reference_problem().unwrap();
    let checker = FeasibilityChecker::new(&problem);

    // Loads 5 and 9
    assert!(checker.is_feasible(&reference_seed_solution()).unwrap());

    // Load 14 on a single vehicle
    let overloaded = Solution::from_ids(
        &[vec!["DC1", "S1"]],
        &[vec!["C1", "C2", "C3", "C4"]],
    );
    assert!(!checker.is_feasible(&overloaded).unwrap());

    // Exactly at capacity: 2 + 3 + 5
    let full = Solution::from_ids(&[vec!["DC1", "S1"]], &[vec!["C1", "C2", "C4"], vec!["C3"]]);
    assert!(checker.is_feasible(&full).unwrap());
}

#[test]
fn test_time_window_feasibility() {
    let problem = reference_problem().unwrap();
    let seed = reference_seed_solution();

    // Time windows are ignored by default
    assert!(FeasibilityChecker::new(&problem).is_feasible(&seed).unwrap());

    // At unit speed C2 is reached at 10 + sqrt(17) > 13
    let slow = FeasibilityChecker::new(&problem).with_time_windows(TimeWindowPolicy::Enforce {
        speed: 1.0,
        service_time: 0.0,
    });
    assert!(!slow.is_feasible(&seed).unwrap());

    let fast = FeasibilityChecker::new(&problem).with_time_windows(TimeWindowPolicy::Enforce {
        speed: 10.0,
        service_time: 0.0,
    });
    assert!(fast.is_feasible(&seed).unwrap());

    // C2 then C1: service of C1 starts at 11 + sqrt(17)/10, inside [10, 12]
    let reversed = Solution::from_ids(&[vec!["DC1", "S1"]], &[vec!["C2", "C1"]]);
    assert!(fast.is_feasible(&reversed).unwrap());

    // One unit of service at C2 pushes C1 past 12
    let with_service =
        FeasibilityChecker::new(&problem).with_time_windows(TimeWindowPolicy::Enforce {
            speed: 10.0,
            service_time: 1.0,
        });
    assert!(!with_service.is_feasible(&reversed).unwrap());
}

#[test]
fn test_truck_capacity_feasibility() {
    let problem = reference_problem().unwrap();
    let checker = FeasibilityChecker::new(&problem).with_truck_capacity_check(true);

    // Total demand 14 fits on one truck of capacity 15
    assert!(checker.is_feasible(&reference_seed_solution()).unwrap());
    let one_truck = Solution::from_ids(&[vec!["DC1", "S1"]], &[vec!["C1", "C2"], vec!["C3", "C4"]]);
    assert!(checker.is_feasible(&one_truck).unwrap());

    let no_truck = Solution::from_ids(&[] as &[Vec<&str>], &[vec!["C1", "C2"], vec!["C3", "C4"]]);
    assert!(!checker.is_feasible(&no_truck).unwrap());
    assert!(FeasibilityChecker::new(&problem).is_feasible(&no_truck).unwrap());
}

#[test]
fn test_solution_validation() {
    let problem = reference_problem().unwrap();

    reference_seed_solution().validate(&problem).unwrap();

    let unknown = Solution::from_ids(&[vec!["DC1", "S1"]], &[vec!["C1", "C7"]]);
    assert!(matches!(
        unknown.validate(&problem),
        Err(ConfigurationError::UnknownNode(id)) if id == "C7"
    ));

    let backwards = Solution::from_ids(&[vec!["S1", "DC1"]], &[vec!["C1"]]);
    assert!(matches!(
        backwards.validate(&problem),
        Err(ConfigurationError::InvalidRoute { .. })
    ));

    let into_customer = Solution::from_ids(&[vec!["DC1", "C1"]], &[vec!["C2"]]);
    assert!(matches!(
        into_customer.validate(&problem),
        Err(ConfigurationError::InvalidRoute { .. })
    ));

    let through_dc = Solution::from_ids(&[vec!["DC1", "S1"]], &[vec!["C1", "DC2", "C2"]]);
    assert!(matches!(
        through_dc.validate(&problem),
        Err(ConfigurationError::InvalidRoute { route, .. }) if route == ["C1", "DC2", "C2"]
    ));

    let through_satellite = Solution::from_ids(
        &[vec!["DC1", "S1"], vec!["DC2", "S1"]],
        &[vec!["C1", "C2"], vec!["S1", "C3", "C4"]],
    );
    assert!(matches!(
        through_satellite.validate(&problem),
        Err(ConfigurationError::InvalidRoute { route, .. }) if route == ["S1", "C3", "C4"]
    ));
}

#[test]
fn test_customer_coverage() {
    let problem = reference_problem().unwrap();

    assert!(reference_seed_solution().covers_all_customers(&problem));

    let missing = Solution::from_ids(&[vec!["DC1", "S1"]], &[vec!["C1", "C2"], vec!["C3"]]);
    assert!(!missing.covers_all_customers(&problem));

    let repeated = Solution::from_ids(
        &[vec!["DC1", "S1"]],
        &[vec!["C1", "C2"], vec!["C3", "C4", "C1"]],
    );
    assert!(!repeated.covers_all_customers(&problem));
}

#[test]
fn test_solution_display() {
    let text = reference_seed_solution().to_string();
    assert!(text.contains("[DC1 -> S1]"));
    assert!(text.contains("[C3 -> C4]"));
}

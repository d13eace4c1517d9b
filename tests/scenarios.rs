//! End-to-end planning against SCIP.

use bakery_planner::{Field, PlanError, ProductionPlanRequest, ScipSolver, plan};
use float_eq::assert_float_eq;

const EPS: f64 = 1e-6;

fn request(changes: &[(Field, f64)]) -> ProductionPlanRequest {
    changes
        .iter()
        .try_fold(ProductionPlanRequest::default(), |request, &(field, value)| {
            request.with(field, value)
        })
        .unwrap()
}

#[test]
fn default_inputs_produce_minimum_demand() {
    // With both minimums satisfiable, the cheapest plan produces exactly the
    // demanded quantities: any extra unit only adds cost.
    let result = plan(ProductionPlanRequest::default(), &ScipSolver).unwrap();
    assert_float_eq!(result.qty_sweet, 300., abs <= EPS);
    assert_float_eq!(result.qty_plain, 400., abs <= EPS);
    assert_float_eq!(result.total_cost, 1_200_000., rmax <= EPS);
}

#[test]
fn minimums_over_capacity_are_infeasible() {
    let request = request(&[(Field::MinSweet, 800.), (Field::MinPlain, 800.)]);
    assert_eq!(plan(request, &ScipSolver), Err(PlanError::Infeasible));
}

#[test]
fn minimums_over_budget_are_infeasible() {
    // 2000 * 300 + 1500 * 400 = 1.2M > 1M
    let request = request(&[(Field::Budget, 1_000_000.)]);
    assert_eq!(plan(request, &ScipSolver), Err(PlanError::Infeasible));
}

#[test]
fn zero_minimums_fit_any_budget() {
    let request = request(&[
        (Field::CostSweet, 1.),
        (Field::CostPlain, 1.),
        (Field::MinSweet, 0.),
        (Field::MinPlain, 0.),
        (Field::Budget, 1.),
    ]);
    let result = plan(request, &ScipSolver).unwrap();
    assert_float_eq!(result.qty_sweet, 0., abs <= EPS);
    assert_float_eq!(result.qty_plain, 0., abs <= EPS);
    assert_float_eq!(result.total_cost, 0., abs <= EPS);
}

#[test]
fn budget_just_covering_minimums_is_feasible() {
    let request = request(&[(Field::Budget, 1_200_000.)]);
    let result = plan(request, &ScipSolver).unwrap();
    assert_float_eq!(result.total_cost, 1_200_000., rmax <= EPS);
}

#[test]
fn solutions_satisfy_every_constraint() {
    for capacity in [500., 1000., 2500.] {
        for budget in [900_000., 1_800_000., 5_000_000.] {
            for (min_sweet, min_plain) in [(0., 0.), (100., 250.), (300., 400.)] {
                let request = request(&[
                    (Field::Capacity, capacity),
                    (Field::Budget, budget),
                    (Field::MinSweet, min_sweet),
                    (Field::MinPlain, min_plain),
                ]);
                let expected_feasible = min_sweet + min_plain <= capacity
                    && 2000. * min_sweet + 1500. * min_plain <= budget;

                match plan(request, &ScipSolver) {
                    Ok(result) => {
                        assert!(expected_feasible, "{request:?} should be infeasible");
                        assert!(result.qty_sweet >= min_sweet);
                        assert!(result.qty_plain >= min_plain);
                        assert!(result.qty_sweet + result.qty_plain <= capacity * (1. + EPS));
                        let spend = 2000. * result.qty_sweet + 1500. * result.qty_plain;
                        assert!(spend <= budget * (1. + EPS));
                        assert_float_eq!(result.total_cost, spend, rmax <= EPS);
                    }
                    Err(PlanError::Infeasible) => {
                        assert!(!expected_feasible, "{request:?} should be feasible");
                    }
                }
            }
        }
    }
}

#[test]
fn more_budget_never_changes_the_optimum() {
    let mut costs = Vec::new();
    for budget in [1_200_000., 1_500_000., 1_800_000., 3_000_000., 10_000_000.] {
        let result = plan(request(&[(Field::Budget, budget)]), &ScipSolver).unwrap();
        costs.push(result.total_cost);
    }
    for pair in costs.windows(2) {
        assert!(pair[1] <= pair[0] * (1. + EPS));
        assert!(pair[1] >= pair[0] * (1. - EPS));
    }
}

#[test]
fn largest_accepted_inputs_reach_a_verdict() {
    // Minimum demand alone exceeds the default capacity.
    let huge_demand = request(&[(Field::MinSweet, Field::MinSweet.maximum())]);
    assert_eq!(plan(huge_demand, &ScipSolver), Err(PlanError::Infeasible));

    // 300 units at 1e15 each exceed any accepted budget.
    let huge_cost = request(&[(Field::CostSweet, Field::CostSweet.maximum())]);
    assert_eq!(plan(huge_cost, &ScipSolver), Err(PlanError::Infeasible));

    let roomy = request(&[
        (Field::Capacity, Field::Capacity.maximum()),
        (Field::Budget, Field::Budget.maximum()),
    ]);
    let result = plan(roomy, &ScipSolver).unwrap();
    assert_float_eq!(result.qty_sweet, 300., abs <= EPS);
    assert_float_eq!(result.qty_plain, 400., abs <= EPS);
    assert_float_eq!(result.total_cost, 1_200_000., rmax <= EPS);
}

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::LinearProgram;
use crate::request::ProductionPlanRequest;
use crate::solver::LpSolver;

/// Cost-minimal production quantities for a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionPlanResult {
    pub qty_sweet: f64,
    pub qty_plain: f64,
    pub total_cost: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    #[error("no production plan satisfies capacity, budget and minimum demand together")]
    Infeasible,
}

/// Builds the linear program for `request`, solves it and checks the answer.
///
/// Every way the solver can fail is reported as [`PlanError::Infeasible`],
/// as is an answer that does not actually satisfy the program. Quantities
/// that come back marginally below their minimum demand are raised to it,
/// and the total cost is recomputed from the final quantities.
pub fn plan(
    request: ProductionPlanRequest,
    solver: &impl LpSolver,
) -> Result<ProductionPlanResult, PlanError> {
    let program = LinearProgram::from_request(&request);
    debug!(?program, "assembled linear program");

    let solution = solver.solve(&program).map_err(|err| {
        warn!(%err, "solver did not find an optimal plan");
        PlanError::Infeasible
    })?;

    let qty_sweet = solution.point[0].max(program.bounds[0].lower);
    let qty_plain = solution.point[1].max(program.bounds[1].lower);
    if !program.is_feasible([qty_sweet, qty_plain]) {
        warn!(
            qty_sweet,
            qty_plain, "solver returned a point outside the feasible region"
        );
        return Err(PlanError::Infeasible);
    }

    let total_cost = program.objective_value([qty_sweet, qty_plain]);
    info!(
        qty_sweet,
        qty_plain,
        total_cost,
        solver_objective = solution.objective,
        "optimal plan found"
    );

    Ok(ProductionPlanResult {
        qty_sweet,
        qty_plain,
        total_cost,
    })
}

//! Linear programming back ends.
//!
//! The planner only needs "solve this two-variable program", so solvers are
//! anything implementing [`LpSolver`]. Closures qualify, which keeps tests
//! free of SCIP when they only exercise the surrounding logic.

use russcip::{Model, ObjSense, ProblemOrSolving, Status, VarType, WithSolutions};
use thiserror::Error;

use crate::model::{LinearProgram, VARIABLE_NAMES};

/// Optimal point and objective value reported by a solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LpSolution {
    pub point: [f64; 2],
    pub objective: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error("no point satisfies all constraints")]
    Infeasible,

    #[error("objective is unbounded")]
    Unbounded,

    #[error("solver finished with status {0}")]
    Status(String),

    #[error("solver reported an optimum but returned no solution")]
    MissingSolution,

    #[error("{0} is too large for the solver")]
    OutOfRange(String),
}

pub trait LpSolver {
    /// Minimizes `program`.
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolveError>;
}

impl<F> LpSolver for F
where
    F: Fn(&LinearProgram) -> Result<LpSolution, SolveError>,
{
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolveError> {
        self(program)
    }
}

/// SCIP reads any magnitude at or above this as infinity.
pub const SCIP_INFINITY: f64 = 1e20;

/// Solves programs with [SCIP](https://scipopt.org).
#[derive(Debug, Default, Clone, Copy)]
pub struct ScipSolver;

impl ScipSolver {
    /// Rejects data SCIP would refuse while building the model. Only upper
    /// bounds may be infinite.
    fn check_range(program: &LinearProgram) -> Result<(), SolveError> {
        let finite = |value: f64| value.is_finite() && value.abs() < SCIP_INFINITY;

        for (name, (&cost, bound)) in VARIABLE_NAMES
            .iter()
            .zip(program.objective.iter().zip(&program.bounds))
        {
            if !finite(cost) {
                return Err(SolveError::OutOfRange(format!("objective coefficient of {name}")));
            }
            if !finite(bound.lower) || bound.upper.is_nan() {
                return Err(SolveError::OutOfRange(format!("bound of {name}")));
            }
        }
        for row in &program.constraints {
            if !row.coefficients.iter().copied().all(finite) || !finite(row.rhs) {
                return Err(SolveError::OutOfRange(format!("constraint {}", row.name)));
            }
        }
        Ok(())
    }
}

impl LpSolver for ScipSolver {
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolveError> {
        Self::check_range(program)?;

        let mut model = Model::new()
            .hide_output()
            .include_default_plugins()
            .create_prob("production_cost")
            .set_obj_sense(ObjSense::Minimize);

        let mut vars = Vec::with_capacity(VARIABLE_NAMES.len());
        for ((name, bound), &cost) in VARIABLE_NAMES
            .iter()
            .zip(&program.bounds)
            .zip(&program.objective)
        {
            vars.push(model.add_var(bound.lower, bound.upper, cost, name, VarType::Continuous));
        }

        for row in &program.constraints {
            model.add_cons(
                vars.iter().collect(),
                &row.coefficients,
                -f64::INFINITY,
                row.rhs,
                row.name,
            );
        }

        let solved_model = model.solve();
        match solved_model.status() {
            Status::Optimal => {}
            Status::Infeasible => return Err(SolveError::Infeasible),
            Status::Unbounded => return Err(SolveError::Unbounded),
            other => return Err(SolveError::Status(format!("{other:?}"))),
        }

        let sol = solved_model
            .best_sol()
            .ok_or(SolveError::MissingSolution)?;
        Ok(LpSolution {
            point: [sol.val(&vars[0]), sol.val(&vars[1])],
            objective: solved_model.obj_val(),
        })
    }
}

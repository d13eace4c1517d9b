//! Cost-minimal production planning for a two-product bakery.
//!
//! A [`ProductionPlanRequest`] holds capacity, budget, unit costs and
//! minimum demand for sweet and plain bread. [`plan`] turns it into a
//! two-variable linear program, hands it to an [`LpSolver`] (SCIP by
//! default) and returns the cheapest feasible quantities, or
//! [`PlanError::Infeasible`].
//!
//! ```no_run
//! use bakery_planner::{ProductionPlanRequest, ScipSolver, plan};
//!
//! let result = plan(ProductionPlanRequest::default(), &ScipSolver)?;
//! println!("sweet={} plain={}", result.qty_sweet, result.qty_plain);
//! # Ok::<_, bakery_planner::PlanError>(())
//! ```

pub mod app;
pub mod chart;
pub mod command;
pub mod gui;
pub mod model;
pub mod plan;
pub mod plot;
pub mod report;
pub mod request;
pub mod session;
pub mod solver;

pub use model::LinearProgram;
pub use plan::{PlanError, ProductionPlanResult, plan};
pub use request::{Field, InputError, ProductionPlanRequest};
pub use solver::{LpSolution, LpSolver, ScipSolver, SolveError};

//! Canonical form of the production-cost linear program.
//!
//! The program always has two variables, sweet bread (`x`) and plain
//! bread (`y`), and two `<=` rows: production capacity and budget.

use crate::request::ProductionPlanRequest;

/// Names of the decision variables, in column order.
pub const VARIABLE_NAMES: [&str; 2] = ["sweet", "plain"];

/// Relative tolerance used when checking a point against the model.
pub const TOLERANCE: f64 = 1e-6;

/// Lower and upper bound of a single variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub lower: f64,
    pub upper: f64,
}

impl Bound {
    pub fn at_least(lower: f64) -> Self {
        Self {
            lower,
            upper: f64::INFINITY,
        }
    }
}

/// A row `coefficients . point <= rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: &'static str,
    pub coefficients: [f64; 2],
    pub rhs: f64,
}

impl Constraint {
    pub fn lhs(&self, point: [f64; 2]) -> f64 {
        dot(self.coefficients, point)
    }
}

/// Minimize `objective . point` subject to `constraints` and `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub objective: [f64; 2],
    pub constraints: [Constraint; 2],
    pub bounds: [Bound; 2],
}

impl LinearProgram {
    /// Assembles the cost-minimization program for a request.
    pub fn from_request(request: &ProductionPlanRequest) -> Self {
        let costs = [request.cost_sweet(), request.cost_plain()];
        Self {
            objective: costs,
            constraints: [
                Constraint {
                    name: "capacity",
                    coefficients: [1., 1.],
                    rhs: request.capacity(),
                },
                Constraint {
                    name: "budget",
                    coefficients: costs,
                    rhs: request.budget(),
                },
            ],
            bounds: [
                Bound::at_least(request.min_sweet()),
                Bound::at_least(request.min_plain()),
            ],
        }
    }

    /// Inequality matrix, one row per constraint.
    pub fn matrix(&self) -> [[f64; 2]; 2] {
        [
            self.constraints[0].coefficients,
            self.constraints[1].coefficients,
        ]
    }

    pub fn rhs(&self) -> [f64; 2] {
        [self.constraints[0].rhs, self.constraints[1].rhs]
    }

    pub fn objective_value(&self, point: [f64; 2]) -> f64 {
        dot(self.objective, point)
    }

    /// Whether `point` satisfies every row and bound, allowing a slack of
    /// [`TOLERANCE`] relative to the magnitude of the limit.
    pub fn is_feasible(&self, point: [f64; 2]) -> bool {
        let within_bounds = self.bounds.iter().zip(point).all(|(bound, value)| {
            value >= bound.lower - slack(bound.lower) && value <= bound.upper + slack(bound.upper)
        });
        within_bounds
            && self
                .constraints
                .iter()
                .all(|row| row.lhs(point) <= row.rhs + slack(row.rhs))
    }
}

impl From<&ProductionPlanRequest> for LinearProgram {
    fn from(request: &ProductionPlanRequest) -> Self {
        Self::from_request(request)
    }
}

fn dot(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

fn slack(limit: f64) -> f64 {
    TOLERANCE * limit.abs().max(1.)
}

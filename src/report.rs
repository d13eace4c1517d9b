use std::fmt;

use crate::plan::{PlanError, ProductionPlanResult};

pub const SUCCESS_MESSAGE: &str = "Optimization succeeded!";

pub const FAILURE_MESSAGE: &str =
    "Optimization failed: no feasible production plan. Please check the input parameters.";

/// Human-readable summary of a computation.
pub struct Report<'a>(pub &'a Result<ProductionPlanResult, PlanError>);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(result) => {
                writeln!(f, "{SUCCESS_MESSAGE}")?;
                writeln!(f, "Sweet bread: {} units", whole(result.qty_sweet))?;
                writeln!(f, "Plain bread: {} units", whole(result.qty_plain))?;
                write!(f, "Total cost: Rp{}", group_thousands(whole(result.total_cost)))
            }
            Err(_) => write!(f, "{FAILURE_MESSAGE}"),
        }
    }
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

/// Formats an integer with `,` between groups of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

use std::io::Write;

use anyhow::Result;
use tracing::warn;

use crate::chart::{Chart, production_chart};
use crate::plan::{PlanError, ProductionPlanResult, plan};
use crate::report::Report;
use crate::request::{Field, ProductionPlanRequest};
use crate::solver::LpSolver;

/// Runs one computation: solve, print the report and, on success, hand
/// the chart to `display`.
///
/// Only write failures are returned as errors. An infeasible plan is part
/// of the returned outcome, and a chart that cannot be displayed is
/// mentioned on `out` without failing the computation.
pub fn compute<W: Write>(
    request: ProductionPlanRequest,
    solver: &impl LpSolver,
    display: &mut impl FnMut(Chart) -> Result<()>,
    out: &mut W,
) -> Result<Result<ProductionPlanResult, PlanError>> {
    let outcome = plan(request, solver);
    writeln!(out, "{}", Report(&outcome))?;

    if let Ok(result) = &outcome
        && let Err(err) = display(production_chart(&request, result))
    {
        warn!(error = %err, "chart was not shown");
        writeln!(out, "Chart not shown: {err:#}")?;
    }
    Ok(outcome)
}

/// Prints every field of `request` with its label.
pub fn show<W: Write>(request: &ProductionPlanRequest, out: &mut W) -> Result<()> {
    for field in Field::ALL {
        writeln!(
            out,
            "{:<11} {:>12}  {}",
            field.name(),
            request.get(field),
            field.label()
        )?;
    }
    Ok(())
}

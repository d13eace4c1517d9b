//! The interactive form session: current inputs plus command dispatch.
//!
//! The session is independent of the line editor so any source of lines
//! can drive it.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::app::{compute, show};
use crate::chart::Chart;
use crate::command::{Command, HELP};
use crate::request::ProductionPlanRequest;
use crate::solver::LpSolver;

pub const GREETING: &str = "Bakery production planner. Type `help` for commands.";

/// Whether the session wants another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<S, D> {
    request: ProductionPlanRequest,
    solver: S,
    display: D,
}

impl<S, D> Session<S, D>
where
    S: LpSolver,
    D: FnMut(Chart) -> Result<()>,
{
    pub fn new(request: ProductionPlanRequest, solver: S, display: D) -> Self {
        Self {
            request,
            solver,
            display,
        }
    }

    /// The inputs the next `compute` will snapshot.
    pub fn request(&self) -> ProductionPlanRequest {
        self.request
    }

    pub fn greet<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{GREETING}")?;
        show(&self.request, out)
    }

    /// Handles one line. Mistakes are reported on `out` and leave the
    /// form as it was; only write failures are errors.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "session command");

        match command {
            Command::Show => show(&self.request, out)?,
            Command::Set(field, value) => match self.request.with(field, value) {
                Ok(next) => self.request = next,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Reset => {
                self.request = ProductionPlanRequest::default();
                show(&self.request, out)?;
            }
            Command::Compute => {
                compute(self.request, &self.solver, &mut self.display, out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use bakery_planner::app::compute;
use bakery_planner::chart::Chart;
use bakery_planner::session::{Flow, Session};
use bakery_planner::{Field, InputError, ProductionPlanRequest, ScipSolver, gui, plot};
use clap::{Parser, ValueEnum};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Problem: a bakery makes sweet bread (x) and plain bread (y).
// Each has a unit cost and a minimum demand; total output is capped by
// production capacity and total spend by the budget.
// Goal: minimize production cost.

/// Logging level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// Results only
    Normal,
    /// Solver outcome and chart output
    Verbose,
    /// Assembled linear programs
    Debug,
    /// Everything
    Trace,
}

/// Finds the cheapest mix of sweet and plain bread that meets minimum
/// demand without exceeding capacity or budget.
#[derive(Parser, Debug)]
#[command(name = "production")]
#[command(version)]
struct Args {
    /// Maximum production capacity (units)
    #[arg(long, default_value_t = Field::Capacity.default_value(),
          value_parser = |raw: &str| Field::Capacity.parse(raw))]
    capacity: f64,

    /// Maximum budget (Rp)
    #[arg(long, default_value_t = Field::Budget.default_value(),
          value_parser = |raw: &str| Field::Budget.parse(raw))]
    budget: f64,

    /// Cost per unit of sweet bread (Rp)
    #[arg(long, default_value_t = Field::CostSweet.default_value(),
          value_parser = |raw: &str| Field::CostSweet.parse(raw))]
    cost_sweet: f64,

    /// Cost per unit of plain bread (Rp)
    #[arg(long, default_value_t = Field::CostPlain.default_value(),
          value_parser = |raw: &str| Field::CostPlain.parse(raw))]
    cost_plain: f64,

    /// Minimum demand for sweet bread (units)
    #[arg(long, default_value_t = Field::MinSweet.default_value(),
          value_parser = |raw: &str| Field::MinSweet.parse(raw))]
    min_sweet: f64,

    /// Minimum demand for plain bread (units)
    #[arg(long, default_value_t = Field::MinPlain.default_value(),
          value_parser = |raw: &str| Field::MinPlain.parse(raw))]
    min_plain: f64,

    /// Do not open a chart window after a successful computation
    #[arg(long)]
    no_plot: bool,

    /// Edit the inputs in a terminal form session and compute on demand
    #[arg(short, long)]
    interactive: bool,

    /// Edit the inputs in a desktop window with a live chart
    #[arg(long, conflicts_with = "interactive")]
    gui: bool,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,
}

impl Args {
    fn request(&self) -> Result<ProductionPlanRequest, InputError> {
        ProductionPlanRequest::default()
            .with(Field::Capacity, self.capacity)?
            .with(Field::Budget, self.budget)?
            .with(Field::CostSweet, self.cost_sweet)?
            .with(Field::CostPlain, self.cost_plain)?
            .with(Field::MinSweet, self.min_sweet)?
            .with(Field::MinPlain, self.min_plain)
    }
}

/// What happens to the chart of a successful computation.
fn chart_display(enabled: bool) -> impl FnMut(Chart) -> Result<()> {
    move |chart| if enabled { plot::show(chart) } else { Ok(()) }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbosity)?;

    let request = args.request()?;
    if args.gui {
        gui::run(request, ScipSolver)?;
        return Ok(ExitCode::SUCCESS);
    }
    if args.interactive {
        run_interactive(Session::new(request, ScipSolver, chart_display(!args.no_plot)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = compute(
        request,
        &ScipSolver,
        &mut chart_display(!args.no_plot),
        &mut io::stdout().lock(),
    )?;
    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

fn init_tracing(verbosity: Verbosity) -> Result<()> {
    let level = match verbosity {
        Verbosity::Normal => return Ok(()),
        Verbosity::Verbose => Level::INFO,
        Verbosity::Debug => Level::DEBUG,
        Verbosity::Trace => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Feeds lines to `session` until it quits or input ends.
fn run_interactive<D>(mut session: Session<ScipSolver, D>) -> Result<()>
where
    D: FnMut(Chart) -> Result<()>,
{
    let mut editor = DefaultEditor::new()?;
    session.greet(&mut io::stdout().lock())?;

    loop {
        let line = match editor.readline("plan> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }
        if session.handle(&line, &mut io::stdout().lock())? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

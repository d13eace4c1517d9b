//! The planner as a desktop form: the six inputs and a compute button on
//! the left, the report and the chart of the last computation beside them.

use anyhow::{Result, anyhow};
use eframe::egui;

use crate::chart::{Chart, production_chart};
use crate::plan::plan;
use crate::plot;
use crate::report::Report;
use crate::request::{Field, InputError, ProductionPlanRequest};
use crate::solver::LpSolver;

pub const WINDOW_TITLE: &str = "Bakery production planner";

/// What the last press of "Compute" produced.
struct Outcome {
    report: String,
    chart: Option<Chart>,
}

pub struct PlannerApp<S> {
    solver: S,
    values: [f64; 6],
    outcome: Option<Outcome>,
}

impl<S: LpSolver> PlannerApp<S> {
    pub fn new(request: ProductionPlanRequest, solver: S) -> Self {
        Self {
            solver,
            values: Field::ALL.map(|field| request.get(field)),
            outcome: None,
        }
    }

    /// Edits one input without computing.
    pub fn set(&mut self, field: Field, value: f64) {
        self.values[field as usize] = value;
    }

    /// Snapshot of the form. Fails if an input is out of range.
    pub fn request(&self) -> Result<ProductionPlanRequest, InputError> {
        Field::ALL
            .into_iter()
            .zip(self.values)
            .try_fold(ProductionPlanRequest::default(), |request, (field, value)| {
                request.with(field, value)
            })
    }

    /// Solves the current form and keeps the report and chart for display.
    pub fn compute(&mut self) {
        let outcome = match self.request() {
            Ok(request) => {
                let result = plan(request, &self.solver);
                Outcome {
                    report: Report(&result).to_string(),
                    chart: result.ok().map(|result| production_chart(&request, &result)),
                }
            }
            Err(err) => Outcome {
                report: format!("error: {err}"),
                chart: None,
            },
        };
        self.outcome = Some(outcome);
    }

    pub fn report(&self) -> Option<&str> {
        self.outcome.as_ref().map(|outcome| outcome.report.as_str())
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.outcome.as_ref().and_then(|outcome| outcome.chart.as_ref())
    }

    /// Lays out one frame of the form.
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("inputs").show(ctx, |ui| {
            ui.heading("Inputs");
            for field in Field::ALL {
                ui.label(field.label());
                ui.add(
                    egui::DragValue::new(&mut self.values[field as usize])
                        .range(field.minimum()..=field.maximum())
                        .speed(field.default_value() / 100.),
                );
            }
            ui.separator();
            if ui.button("Compute").clicked() {
                self.compute();
            }
            if let Some(report) = self.report() {
                ui.separator();
                ui.label(report);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.chart() {
            Some(chart) => plot::draw(ui, chart),
            None => {
                ui.label("Press Compute to plot the optimal plan.");
            }
        });
    }
}

impl<S: LpSolver> eframe::App for PlannerApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

/// Opens the form window, starting from `request`. Blocks until it is closed.
pub fn run<S: LpSolver + 'static>(request: ProductionPlanRequest, solver: S) -> Result<()> {
    let app = PlannerApp::new(request, solver);
    eframe::run_native(
        WINDOW_TITLE,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("failed to open the planner window: {err}"))
}

//! Draws a [`Chart`] with `egui_plot`, either inside another egui view or
//! in a window of its own.

use anyhow::{Result, anyhow};
use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};
use tracing::info;

use crate::chart::{Chart, Stroke};

pub const WINDOW_TITLE: &str = "Production plan";

const LINE_WIDTH: f32 = 2.;
const MARKER_RADIUS: f32 = 6.;

/// Draws the title and the plot of `chart` into `ui`.
pub fn draw(ui: &mut egui::Ui, chart: &Chart) {
    ui.heading(chart.title.as_str());

    let (x_min, x_max) = chart.x_range;
    let (y_min, y_max) = chart.y_range;
    Plot::new("production_chart")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(chart.grid)
        .include_x(x_min)
        .include_x(x_max)
        .include_y(y_min)
        .include_y(y_max)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series.points.iter().map(|&(x, y)| [x, y]).collect();
                match series.stroke {
                    Stroke::Solid => plot_ui.line(
                        Line::new(points)
                            .name(&series.label)
                            .color(series.color)
                            .width(LINE_WIDTH),
                    ),
                    Stroke::Dashed => plot_ui.line(
                        Line::new(points)
                            .name(&series.label)
                            .color(series.color)
                            .width(LINE_WIDTH)
                            .style(LineStyle::dashed_loose()),
                    ),
                    Stroke::Marker => plot_ui.points(
                        Points::new(points)
                            .name(&series.label)
                            .color(series.color)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(MARKER_RADIUS),
                    ),
                }
            }
        });
}

struct ChartWindow {
    chart: Chart,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| draw(ui, &self.chart));
    }
}

/// Opens a blocking window showing `chart`. Returns once the user closes it.
pub fn show(chart: Chart) -> Result<()> {
    info!(series = chart.series.len(), "opening chart window");
    eframe::run_native(
        WINDOW_TITLE,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ChartWindow { chart }))),
    )
    .map_err(|err| anyhow!("failed to open the chart window: {err}"))
}

//! Description of the feasible-region chart.
//!
//! Building a [`Chart`] is pure; drawing it is the job of [`crate::plot`].

use eframe::egui::Color32;

use crate::plan::ProductionPlanResult;
use crate::request::ProductionPlanRequest;

/// Number of samples along the constraint lines.
pub const SAMPLES: usize = 400;

/// Extra room past the capacity on both axes.
pub const AXIS_PADDING: f64 = 100.;

pub const BLUE: Color32 = Color32::from_rgb(31, 119, 180);
pub const GREEN: Color32 = Color32::from_rgb(44, 160, 44);
pub const ORANGE: Color32 = Color32::from_rgb(255, 127, 14);
pub const PURPLE: Color32 = Color32::from_rgb(148, 103, 189);
pub const RED: Color32 = Color32::from_rgb(214, 39, 40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
    Marker,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Color32,
    pub stroke: Stroke,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub grid: bool,
    pub series: Vec<Series>,
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Plots the constraint lines, the minimum-demand boundaries and the optimum.
pub fn production_chart(request: &ProductionPlanRequest, result: &ProductionPlanResult) -> Chart {
    let limit = request.capacity() + AXIS_PADDING;
    let xs = linspace(request.min_sweet(), request.capacity(), SAMPLES);

    let capacity_line = xs.iter().map(|&x| (x, request.capacity() - x)).collect();
    let budget_line = xs
        .iter()
        .map(|&x| (x, (request.budget() - request.cost_sweet() * x) / request.cost_plain()))
        .collect();

    let series = vec![
        Series {
            label: format!("Capacity: x + y <= {}", number(request.capacity())),
            color: BLUE,
            stroke: Stroke::Solid,
            points: capacity_line,
        },
        Series {
            label: format!(
                "Budget: {}x + {}y <= {}",
                number(request.cost_sweet()),
                number(request.cost_plain()),
                number(request.budget())
            ),
            color: GREEN,
            stroke: Stroke::Solid,
            points: budget_line,
        },
        Series {
            label: "Min sweet bread".to_string(),
            color: ORANGE,
            stroke: Stroke::Dashed,
            points: vec![(request.min_sweet(), 0.), (request.min_sweet(), limit)],
        },
        Series {
            label: "Min plain bread".to_string(),
            color: PURPLE,
            stroke: Stroke::Dashed,
            points: vec![(0., request.min_plain()), (limit, request.min_plain())],
        },
        Series {
            label: "Optimal point".to_string(),
            color: RED,
            stroke: Stroke::Marker,
            points: vec![(result.qty_sweet, result.qty_plain)],
        },
    ];

    Chart {
        title: "Production optimization".to_string(),
        x_label: "Product A (x)".to_string(),
        y_label: "Product B (y)".to_string(),
        x_range: (0., limit),
        y_range: (0., limit),
        grid: true,
        series,
    }
}

fn number(value: f64) -> String {
    if value.fract() == 0. && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

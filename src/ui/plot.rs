use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, PlotUi};

use crate::color::{generate_palette, ColorMap};
use crate::data::aggregate::{CategoryTotals, MonthlySubcategoryMatrix, MonthlyTotals};
use crate::data::model::Month;

// ---------------------------------------------------------------------------
// Category bar chart
// ---------------------------------------------------------------------------

/// One bar per category, pre-aggregated sales.
pub fn category_chart(ui: &mut Ui, totals: &CategoryTotals, height: f32) {
    let labels: Vec<String> = totals.keys().cloned().collect();
    let palette = generate_palette(labels.len());

    let bars: Vec<Bar> = totals
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, ((category, t), color))| {
            Bar::new(i as f64, t.sales)
                .name(category)
                .fill(color)
                .width(0.6)
        })
        .collect();

    Plot::new("category_chart")
        .height(height)
        .y_axis_label("Sales")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            index_label(mark.value)
                .and_then(|i| labels.get(i).cloned())
                .unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Sales"));
        });
}

// ---------------------------------------------------------------------------
// Time-series charts
// ---------------------------------------------------------------------------

/// Total sales per month.
pub fn monthly_chart(ui: &mut Ui, totals: &MonthlyTotals, height: f32) {
    let points: PlotPoints = totals
        .iter()
        .map(|(m, sales)| [m.ordinal() as f64, *sales])
        .collect();

    month_plot(ui, "monthly_chart", height, false, |plot_ui| {
        plot_ui.line(
            Line::new(points)
                .name("Sales")
                .color(Color32::LIGHT_BLUE)
                .width(1.5),
        );
    });
}

/// One line per selected sub-category.
pub fn selection_chart(
    ui: &mut Ui,
    matrix: &MonthlySubcategoryMatrix,
    colors: &ColorMap,
    height: f32,
) {
    month_plot(ui, "selection_chart", height, true, |plot_ui| {
        for name in &matrix.columns {
            let Some(series) = matrix.series(name) else {
                continue;
            };
            let points: PlotPoints = series
                .iter()
                .map(|(m, sales)| [m.ordinal() as f64, *sales])
                .collect();

            plot_ui.line(
                Line::new(points)
                    .name(name)
                    .color(colors.color_for(name))
                    .width(1.5),
            );
        }
    });
}

/// A plot whose x axis is month ordinals labelled `YYYY-MM`.
fn month_plot(ui: &mut Ui, id: &str, height: f32, legend: bool, add: impl FnOnce(&mut PlotUi)) {
    let mut plot = Plot::new(id)
        .height(height)
        .x_axis_label("Month")
        .y_axis_label("Sales")
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            index_label(mark.value)
                .and_then(|i| Month::from_ordinal(i as i32))
                .map(|m| m.to_string())
                .unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true);
    if legend {
        plot = plot.legend(Legend::default());
    }
    plot.show(ui, |plot_ui| add(plot_ui));
}

/// Grid marks only get a label when they fall on a whole, non-negative value.
fn index_label(value: f64) -> Option<usize> {
    (value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
}

use eframe::egui::{self, Ui};

use crate::state::{AppState, View};
use crate::ui::{metrics, panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesPandaApp {
    pub state: AppState,
}

impl SalesPandaApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SalesPandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and view tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: category / sub-category selection ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_view(ui, &self.state);
        });
    }
}

fn central_view(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view sales  (File → Open…)");
        });
        return;
    };

    let chart_height = ui.available_height() * 0.6;

    match state.view {
        View::Data => {
            ui.heading("Input Data");
            if let Some(src) = &state.source {
                ui.label(format!("{} records from {}", dataset.len(), src.display()));
            }
            tables::records_table(ui, dataset);
        }
        View::Categories => {
            ui.heading("Sales by Category");
            plot::category_chart(ui, &state.category_totals, chart_height);
            tables::category_table(ui, &state.category_totals);
        }
        View::Monthly => {
            ui.heading("Sales by Month");
            plot::monthly_chart(ui, &state.monthly_totals, chart_height);
            tables::monthly_table(ui, &state.monthly_totals);
        }
        View::Selection => {
            ui.heading("Sales Over Time for Selected Sub-Categories");
            let Some(summary) = &state.summary else {
                ui.label("Please select at least one sub-category to display the chart and metrics.");
                return;
            };
            if state.selection_matrix.is_empty() {
                ui.label("No orders for the selected sub-categories.");
            } else {
                plot::selection_chart(ui, &state.selection_matrix, &state.color_map, chart_height);
            }
            ui.separator();
            metrics::metrics_row(ui, summary);
        }
    }
}

use eframe::egui::{Color32, RichText, Ui};

use crate::data::metrics::{format_currency, format_delta, format_percent, MetricsSummary};

const UP: Color32 = Color32::from_rgb(0x21, 0xc3, 0x54);
const DOWN: Color32 = Color32::from_rgb(0xff, 0x4b, 0x4b);

/// Total sales, total profit and margin side by side.
pub fn metrics_row(ui: &mut Ui, summary: &MetricsSummary) {
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total Sales", &format_currency(summary.total_sales), None);
        metric(&mut cols[1], "Total Profit", &format_currency(summary.total_profit), None);
        metric(
            &mut cols[2],
            "Profit Margin",
            &format_percent(summary.margin),
            Some(summary.delta),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str, delta: Option<f64>) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value).size(28.0).strong());
    if let Some(delta) = delta {
        let color = if delta >= 0.0 { UP } else { DOWN };
        ui.label(RichText::new(format_delta(delta)).color(color));
    }
}

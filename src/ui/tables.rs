use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::{CategoryTotals, MonthlyTotals};
use crate::data::metrics::{format_currency, format_percent, margin_pct};
use crate::data::model::Dataset;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;

fn table(ui: &mut Ui, columns: usize) -> TableBuilder<'_> {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(90.0), columns.saturating_sub(1))
        .column(Column::remainder())
}

fn header(table: TableBuilder<'_>, names: &[&str], body: impl FnOnce(egui_extras::TableBody<'_>)) {
    table
        .header(HEADER_HEIGHT, |mut header| {
            for name in names {
                header.col(|ui| {
                    ui.strong(*name);
                });
            }
        })
        .body(body);
}

/// The raw records, one row each (virtualised).
pub fn records_table(ui: &mut Ui, dataset: &Dataset) {
    let names = ["Category", "Sub_Category", "Order_Date", "Sales", "Profit"];
    let records = dataset.records();
    header(table(ui, names.len()), &names, |body| {
        body.rows(ROW_HEIGHT, records.len(), |mut row| {
            let r = &records[row.index()];
            row.col(|ui| {
                ui.label(&r.category);
            });
            row.col(|ui| {
                ui.label(&r.sub_category);
            });
            row.col(|ui| {
                ui.label(r.order_date.to_string());
            });
            row.col(|ui| {
                ui.label(format!("{:.2}", r.sales));
            });
            row.col(|ui| {
                ui.label(format!("{:.2}", r.profit));
            });
        });
    });
}

/// Category totals, as produced by a group-by sum.
pub fn category_table(ui: &mut Ui, totals: &CategoryTotals) {
    let names = ["Category", "Orders", "Sales", "Profit", "Margin"];
    let rows: Vec<_> = totals.iter().collect();
    header(table(ui, names.len()), &names, |body| {
        body.rows(ROW_HEIGHT, rows.len(), |mut row| {
            let (category, t) = rows[row.index()];
            row.col(|ui| {
                ui.label(category);
            });
            row.col(|ui| {
                ui.label(t.count.to_string());
            });
            row.col(|ui| {
                ui.label(format_currency(t.sales));
            });
            row.col(|ui| {
                ui.label(format_currency(t.profit));
            });
            row.col(|ui| {
                ui.label(format_percent(margin_pct(t.sales, t.profit)));
            });
        });
    });
}

/// Sales per month, including months without orders.
pub fn monthly_table(ui: &mut Ui, totals: &MonthlyTotals) {
    let names = ["Month", "From", "To", "Sales"];
    let rows: Vec<_> = totals.iter().collect();
    header(table(ui, names.len()), &names, |body| {
        body.rows(ROW_HEIGHT, rows.len(), |mut row| {
            let (month, sales) = rows[row.index()];
            row.col(|ui| {
                ui.label(month.to_string());
            });
            row.col(|ui| {
                ui.label(month.first_day().to_string());
            });
            row.col(|ui| {
                ui.label(month.last_day().to_string());
            });
            row.col(|ui| {
                ui.label(format_currency(*sales));
            });
        });
    });
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the loops.
    let categories = state.categories.clone();
    let available = state.available_subcategories.clone();
    let current = state.selection.category.clone().unwrap_or_default();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Category selector ----
            ui.strong("Category");
            egui::ComboBox::from_id_salt("category")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    for category in &categories {
                        if ui
                            .selectable_label(current == *category, category)
                            .clicked()
                            && current != *category
                        {
                            state.select_category(category.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Sub-category checklist ----
            let n_selected = state.selection.subcategories.len();
            let header_text = format!("Sub-Categories  ({n_selected}/{})", available.len());
            ui.label(RichText::new(header_text).strong());

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all();
                }
                if ui.small_button("None").clicked() {
                    state.select_none();
                }
            });

            for sub in &available {
                let mut checked = state.selection.subcategories.contains(sub);
                let text = RichText::new(sub).color(state.color_map.color_for(sub));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_subcategory(sub);
                }
            }

            ui.separator();
            if state.selection.subcategories.is_empty() {
                ui.label("Nothing selected.");
            } else {
                ui.label(format!("Selected: {}", state.selection.subcategories.join(", ")));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for view in View::ALL {
            if ui.selectable_label(state.view == view, view.label()).clicked() {
                state.view = view;
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} selected",
                ds.len(),
                state.selected_count
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("Supported files", &["csv", "tsv", "tab", "txt", "json", "parquet", "pq"])
        .add_filter("CSV / TSV", &["csv", "tsv", "tab", "txt"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}

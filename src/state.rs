use std::path::{Path, PathBuf};

use crate::color::ColorMap;
use crate::data::aggregate::{
    totals_by_category, totals_by_month, totals_by_month_and_subcategory, CategoryTotals,
    MonthlySubcategoryMatrix, MonthlyTotals,
};
use crate::data::filter::{
    default_subcategories, distinct_categories, filter_by_category, filter_by_subcategories,
    subcategories_of,
};
use crate::data::loader::{load_file, LoadOptions};
use crate::data::metrics::{summarize, MetricsSummary};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Views shown in the central panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Data,
    Categories,
    Monthly,
    Selection,
}

impl View {
    pub const ALL: [View; 4] = [View::Data, View::Categories, View::Monthly, View::Selection];

    pub fn label(self) -> &'static str {
        match self {
            View::Data => "Data",
            View::Categories => "By Category",
            View::Monthly => "By Month",
            View::Selection => "Selection",
        }
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The viewer's current category and sub-category choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub category: Option<String>,
    /// Selected sub-categories of `category`, in the order they were picked.
    pub subcategories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Derived views are recomputed as fresh values whenever the dataset or the
/// selection changes; nothing is patched in place.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Where the dataset came from.
    pub source: Option<PathBuf>,

    pub load_options: LoadOptions,

    /// Number of sub-categories pre-selected when a category is picked.
    pub default_subcategory_count: usize,

    /// Distinct categories, first-seen order.
    pub categories: Vec<String>,

    /// Sub-categories of the selected category, first-seen order.
    pub available_subcategories: Vec<String>,

    pub selection: SelectionState,

    pub category_totals: CategoryTotals,
    pub monthly_totals: MonthlyTotals,

    /// Month × sub-category sales of the current selection.
    pub selection_matrix: MonthlySubcategoryMatrix,

    /// Metrics of the current selection; None when nothing is selected.
    pub summary: Option<MetricsSummary>,

    /// Number of records in the current selection.
    pub selected_count: usize,

    /// Series colours for the available sub-categories.
    pub color_map: ColorMap,

    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LoadOptions::default(), 2)
    }
}

impl AppState {
    pub fn new(load_options: LoadOptions, default_subcategory_count: usize) -> Self {
        Self {
            dataset: None,
            source: None,
            load_options,
            default_subcategory_count,
            categories: Vec::new(),
            available_subcategories: Vec::new(),
            selection: SelectionState::default(),
            category_totals: CategoryTotals::new(),
            monthly_totals: MonthlyTotals::new(),
            selection_matrix: MonthlySubcategoryMatrix::default(),
            summary: None,
            selected_count: 0,
            color_map: ColorMap::default(),
            view: View::Data,
            status_message: None,
        }
    }

    /// Load a file chosen in the UI. Failures keep the current dataset and
    /// are reported in the status line.
    pub fn open(&mut self, path: &Path) {
        match load_file(path, &self.load_options) {
            Ok(dataset) => self.set_dataset(dataset, Some(path.to_path_buf())),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset, compute the whole-dataset views and
    /// select the first category.
    pub fn set_dataset(&mut self, dataset: Dataset, source: Option<PathBuf>) {
        self.categories = distinct_categories(&dataset);
        self.category_totals = totals_by_category(&dataset);
        self.monthly_totals = totals_by_month(&dataset);
        log::info!(
            "{} categories over {} months",
            self.categories.len(),
            self.monthly_totals.len()
        );

        self.dataset = Some(dataset);
        self.source = source;
        self.status_message = None;

        match self.categories.first().cloned() {
            Some(first) => self.select_category(first),
            None => {
                self.selection = SelectionState::default();
                self.available_subcategories.clear();
                self.color_map = ColorMap::default();
                self.refilter();
            }
        }
    }

    /// Switch category and reset the sub-category selection to its default.
    pub fn select_category(&mut self, category: String) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.available_subcategories = subcategories_of(ds, &category);
        self.color_map = ColorMap::new(&self.available_subcategories);
        self.selection = SelectionState {
            subcategories: default_subcategories(
                &self.available_subcategories,
                self.default_subcategory_count,
            ),
            category: Some(category),
        };
        log::debug!("Selected {:?}", self.selection);
        self.refilter();
    }

    /// Toggle a single sub-category in the selection.
    pub fn toggle_subcategory(&mut self, sub_category: &str) {
        let selected = &mut self.selection.subcategories;
        if let Some(pos) = selected.iter().position(|s| s == sub_category) {
            selected.remove(pos);
        } else if self.available_subcategories.iter().any(|s| s == sub_category) {
            selected.push(sub_category.to_string());
        }
        self.refilter();
    }

    /// Select every sub-category of the current category.
    pub fn select_all(&mut self) {
        self.selection.subcategories = self.available_subcategories.clone();
        self.refilter();
    }

    /// Deselect all sub-categories.
    pub fn select_none(&mut self) {
        self.selection.subcategories.clear();
        self.refilter();
    }

    /// Recompute the selection-derived views.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let (Some(category), false) = (
            &self.selection.category,
            self.selection.subcategories.is_empty(),
        ) else {
            self.selection_matrix = MonthlySubcategoryMatrix::default();
            self.summary = None;
            self.selected_count = 0;
            return;
        };

        let in_category = filter_by_category(ds, category);
        let subset = filter_by_subcategories(&in_category, &self.selection.subcategories);
        self.selection_matrix = totals_by_month_and_subcategory(&subset);
        self.summary = Some(summarize(&subset, ds));
        self.selected_count = subset.len();
    }
}

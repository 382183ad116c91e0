use std::collections::{BTreeMap, BTreeSet};

use super::model::{Dataset, Month, Record};

// ---------------------------------------------------------------------------
// Derived views over a Dataset
// ---------------------------------------------------------------------------

/// Summable fields of a group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub sales: f64,
    pub profit: f64,
    pub count: usize,
}

impl Totals {
    fn add(&mut self, record: &Record) {
        self.sales += record.sales;
        self.profit += record.profit;
        self.count += 1;
    }
}

/// Category → totals, sorted by category name.
pub type CategoryTotals = BTreeMap<String, Totals>;

/// Month → summed sales, one entry per month from the first to the last
/// order date (zero for months without orders).
pub type MonthlyTotals = BTreeMap<Month, f64>;

/// Sales per month (rows) and sub-category (columns).
///
/// Every cell holds a number; combinations without orders are 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySubcategoryMatrix {
    /// Sub-category names, sorted.
    pub columns: Vec<String>,
    /// Consecutive months, each with one value per column.
    pub rows: Vec<(Month, Vec<f64>)>,
}

impl MonthlySubcategoryMatrix {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The time series of one sub-category.
    pub fn series(&self, sub_category: &str) -> Option<Vec<(Month, f64)>> {
        let col = self.columns.iter().position(|c| c == sub_category)?;
        Some(self.rows.iter().map(|(m, values)| (*m, values[col])).collect())
    }
}

#[cfg(test)]
impl MonthlySubcategoryMatrix {
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.rows.iter().map(|(m, _)| *m)
    }

    /// Value of a single cell, `None` only when month or column is outside the matrix.
    pub fn get(&self, month: Month, sub_category: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == sub_category)?;
        self.rows
            .iter()
            .find(|(m, _)| *m == month)
            .map(|(_, values)| values[col])
    }
}

/// Group by category and sum sales and profit.
pub fn totals_by_category(dataset: &Dataset) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for record in dataset {
        totals.entry(record.category.clone()).or_default().add(record);
    }
    totals
}

/// Bucket rows by calendar month of their order date and sum sales.
pub fn totals_by_month(dataset: &Dataset) -> MonthlyTotals {
    let Some(months) = month_span(dataset) else {
        return MonthlyTotals::new();
    };
    let mut totals: MonthlyTotals = months.into_iter().map(|m| (m, 0.0)).collect();
    for record in dataset {
        *totals.entry(Month::of(record.order_date)).or_default() += record.sales;
    }
    totals
}

/// Bucket rows by (month, sub-category), sum sales and pivot sub-categories
/// into columns.
pub fn totals_by_month_and_subcategory(dataset: &Dataset) -> MonthlySubcategoryMatrix {
    let Some(months) = month_span(dataset) else {
        return MonthlySubcategoryMatrix::default();
    };

    let columns: Vec<String> = dataset
        .iter()
        .map(|r| r.sub_category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut cells: BTreeMap<(Month, &str), f64> = BTreeMap::new();
    for record in dataset {
        *cells
            .entry((Month::of(record.order_date), record.sub_category.as_str()))
            .or_default() += record.sales;
    }

    let rows = months
        .into_iter()
        .map(|month| {
            let values = columns
                .iter()
                .map(|col| cells.get(&(month, col.as_str())).copied().unwrap_or(0.0))
                .collect();
            (month, values)
        })
        .collect();

    MonthlySubcategoryMatrix { columns, rows }
}

/// Every month between the earliest and latest order date.
fn month_span(dataset: &Dataset) -> Option<Vec<Month>> {
    let (first, last) = dataset.date_range()?;
    Some(Month::range(Month::of(first), Month::of(last)))
}

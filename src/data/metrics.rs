use super::model::Dataset;

// ---------------------------------------------------------------------------
// Summary metrics for a selection
// ---------------------------------------------------------------------------

/// Sales, profit and margin of a subset compared with the whole dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsSummary {
    pub total_sales: f64,
    pub total_profit: f64,
    /// Profit as a percentage of sales.
    pub margin: f64,
    /// Margin of the whole dataset.
    pub overall_margin: f64,
    /// `margin - overall_margin`, in percentage points.
    pub delta: f64,
}

/// Profit margin in percent; exactly 0 when `sales <= 0`.
pub fn margin_pct(sales: f64, profit: f64) -> f64 {
    if sales > 0.0 {
        profit / sales * 100.0
    } else {
        0.0
    }
}

/// Summarise `subset` against `whole`. An empty subset yields zeros.
pub fn summarize(subset: &Dataset, whole: &Dataset) -> MetricsSummary {
    let total_sales = subset.total_sales();
    let total_profit = subset.total_profit();
    let margin = margin_pct(total_sales, total_profit);
    let overall_margin = margin_pct(whole.total_sales(), whole.total_profit());

    MetricsSummary {
        total_sales,
        total_profit,
        margin,
        overall_margin,
        delta: margin - overall_margin,
    }
}

// -- Display helpers --

/// `$1,234.56`; negative amounts render as `-$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_delta(delta: f64) -> String {
    format!("{delta:+.2}% vs overall avg")
}

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Date32Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Days, NaiveDate};
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// One output row, serialised with the column names the dashboard expects.
#[derive(Debug, Serialize)]
struct SalesRow {
    #[serde(rename = "Row_ID")]
    row_id: i64,
    #[serde(rename = "Order_Date")]
    order_date: NaiveDate,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Sub_Category")]
    sub_category: &'static str,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Profit")]
    profit: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// (category, sub-category, typical order value, typical margin)
const PRODUCTS: &[(&str, &str, f64, f64)] = &[
    ("Furniture", "Bookcases", 500.0, -0.03),
    ("Furniture", "Chairs", 530.0, 0.08),
    ("Furniture", "Furnishings", 95.0, 0.14),
    ("Furniture", "Tables", 650.0, -0.09),
    ("Office Supplies", "Appliances", 230.0, 0.17),
    ("Office Supplies", "Binders", 135.0, 0.15),
    ("Office Supplies", "Paper", 60.0, 0.43),
    ("Office Supplies", "Storage", 265.0, 0.10),
    ("Technology", "Accessories", 215.0, 0.25),
    ("Technology", "Copiers", 2200.0, 0.37),
    ("Technology", "Machines", 1650.0, 0.02),
    ("Technology", "Phones", 370.0, 0.13),
];

const ORDERS: usize = 5000;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let start = NaiveDate::from_ymd_opt(2014, 1, 1).context("start date")?;
    let span_days = 4 * 365;

    let mut rows = Vec::with_capacity(ORDERS);
    for row_id in 1..=ORDERS as i64 {
        let (category, sub_category, typical, margin) = PRODUCTS[rng.below(PRODUCTS.len())];

        let order_date = start + Days::new(rng.below(span_days) as u64);

        let sales = (typical * rng.gauss(1.0, 0.5).abs()).max(1.0);
        let profit = sales * rng.gauss(margin, 0.15);

        rows.push(SalesRow {
            row_id,
            order_date,
            category,
            sub_category,
            sales: (sales * 100.0).round() / 100.0,
            profit: (profit * 100.0).round() / 100.0,
        });
    }

    // Write CSV
    let csv_path = "sample_sales.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV output")?;
    for row in &rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV output")?;

    // Write Parquet
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).context("epoch date")?;
    let schema = Arc::new(Schema::new(vec![
        Field::new("Row_ID", DataType::Int64, false),
        Field::new("Order_Date", DataType::Date32, false),
        Field::new("Category", DataType::Utf8, false),
        Field::new("Sub_Category", DataType::Utf8, false),
        Field::new("Sales", DataType::Float64, false),
        Field::new("Profit", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.row_id))),
            Arc::new(Date32Array::from_iter_values(
                rows.iter().map(|r| (r.order_date - epoch).num_days() as i32),
            )),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.category))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.sub_category))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.sales))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.profit))),
        ],
    )
    .context("building record batch")?;

    let parquet_path = "sample_sales.parquet";
    let file = std::fs::File::create(parquet_path).context("creating Parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing Parquet batch")?;
    writer.close().context("closing Parquet writer")?;

    println!("Wrote {} orders to {csv_path} and {parquet_path}", rows.len());
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::{LoadOptions, ORDER_DATE};

// ---------------------------------------------------------------------------
// Command-line configuration
// ---------------------------------------------------------------------------

/// Interactive dashboard over a sales-transaction table.
#[derive(Debug, Parser)]
#[command(name = "sales-panda", version, about)]
pub struct Args {
    /// Sales table to open at startup (.csv, .tsv, .json or .parquet).
    pub path: Option<PathBuf>,

    /// Column holding the order date.
    #[arg(long, default_value = ORDER_DATE)]
    pub date_column: String,

    /// chrono format for the date column, e.g. "%d/%m/%Y". Guessed when omitted.
    #[arg(long)]
    pub date_format: Option<String>,

    /// Field delimiter for text tables: a single character, or "tab".
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// How many sub-categories are pre-selected when a category is picked.
    #[arg(long, default_value_t = 2)]
    pub default_subcategories: usize,
}

impl Args {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            date_column: self.date_column.clone(),
            date_format: self.date_format.clone(),
            delimiter: self.delimiter,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
        },
    }
}

use std::fs::File;
use std::io::Read;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Date32Type, Float64Type};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::{LoadError, Result};
use super::model::{Dataset, Record};

pub const CATEGORY: &str = "Category";
pub const SUB_CATEGORY: &str = "Sub_Category";
pub const ORDER_DATE: &str = "Order_Date";
pub const SALES: &str = "Sales";
pub const PROFIT: &str = "Profit";

/// Formats tried in order when no explicit date format is configured.
/// Slashed dates are read month-first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How a source file is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Column parsed as the order date.
    pub date_column: String,
    /// Explicit `chrono` format; disables format guessing when set.
    pub date_format: Option<String>,
    /// Field delimiter for delimited text; defaults by extension.
    pub delimiter: Option<u8>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            date_column: ORDER_DATE.to_string(),
            date_format: None,
            delimiter: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma-delimited text with a header row
/// * `.tsv` / `.tab` – tab-delimited text with a header row
/// * `.json`         – `[{ "Category": ..., "Sales": ..., ... }, ...]`
/// * `.parquet`      – flat table with the required columns
///
/// Required columns: `Category`, `Sub_Category`, the date column
/// (`Order_Date` by default), `Sales` and `Profit`. Others are ignored.
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" | "txt" => read_delimited(open(path)?, options.delimiter.unwrap_or(b','), options),
        "tsv" | "tab" => read_delimited(open(path)?, options.delimiter.unwrap_or(b'\t'), options),
        "json" => read_json(open(path)?, options),
        "parquet" | "pq" => read_parquet(open(path)?, options),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }?;

    log::info!(
        "Loaded {} records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Column positions of the required fields in a header row.
struct ColumnIndex {
    category: usize,
    sub_category: usize,
    order_date: usize,
    sales: usize,
    profit: usize,
}

impl ColumnIndex {
    fn locate(headers: &csv::StringRecord, options: &LoadOptions) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            category: position(CATEGORY)?,
            sub_category: position(SUB_CATEGORY)?,
            order_date: position(&options.date_column)?,
            sales: position(SALES)?,
            profit: position(PROFIT)?,
        })
    }
}

/// Read a header-first delimited table.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8, options: &LoadOptions) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::locate(reader.headers()?, options)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let fields = result?;
        let field = |idx: usize| fields.get(idx).unwrap_or("");

        records.push(Record {
            category: parse_text(field(columns.category), row, CATEGORY)?,
            sub_category: parse_text(field(columns.sub_category), row, SUB_CATEGORY)?,
            order_date: parse_date(field(columns.order_date), row, options)?,
            sales: parse_number(field(columns.sales), row, SALES)?,
            profit: parse_number(field(columns.profit), row, PROFIT)?,
        });
    }

    Ok(Dataset::from_records(records))
}

fn parse_text(s: &str, row: usize, column: &str) -> Result<String> {
    if s.is_empty() {
        return Err(LoadError::MissingValue {
            row,
            column: column.to_string(),
        });
    }
    Ok(s.to_string())
}

/// Parse a currency amount; accepts `$` signs and `,` thousands separators.
fn parse_number(s: &str, row: usize, column: &str) -> Result<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LoadError::MissingValue {
            row,
            column: column.to_string(),
        });
    }
    let cleaned: String = s.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidNumber {
            row,
            column: column.to_string(),
            value: s.to_string(),
        })
}

fn parse_date(s: &str, row: usize, options: &LoadOptions) -> Result<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LoadError::MissingValue {
            row,
            column: options.date_column.clone(),
        });
    }

    let parsed = match &options.date_format {
        Some(fmt) => NaiveDate::parse_from_str(s, fmt)
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(s, fmt).ok().map(|dt| dt.date())),
        None => guess_date(s),
    };

    parsed.ok_or_else(|| LoadError::InvalidDate {
        row,
        value: s.to_string(),
    })
}

fn guess_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Category": "Furniture",
///     "Sub_Category": "Chairs",
///     "Order_Date": "2020-01-15",
///     "Sales": 100.0,
///     "Profit": 20.0
///   },
///   ...
/// ]
/// ```
///
/// Dates may also be epoch milliseconds, as pandas writes them.
pub fn read_json<R: Read>(reader: R, options: &LoadOptions) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_reader(reader)?;

    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected top-level JSON array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, value) in rows.iter().enumerate() {
        let row = i + 1;
        let obj = value
            .as_object()
            .ok_or_else(|| LoadError::Malformed(format!("row {row} is not a JSON object")))?;

        records.push(Record {
            category: json_text(obj, CATEGORY, row)?,
            sub_category: json_text(obj, SUB_CATEGORY, row)?,
            order_date: json_date(obj, row, options)?,
            sales: json_number(obj, SALES, row)?,
            profit: json_number(obj, PROFIT, row)?,
        });
    }

    Ok(Dataset::from_records(records))
}

fn json_field<'a>(obj: &'a Map<String, JsonValue>, column: &str, row: usize) -> Result<&'a JsonValue> {
    match obj.get(column) {
        None => Err(LoadError::MissingColumn(column.to_string())),
        Some(JsonValue::Null) => Err(LoadError::MissingValue {
            row,
            column: column.to_string(),
        }),
        Some(v) => Ok(v),
    }
}

fn json_text(obj: &Map<String, JsonValue>, column: &str, row: usize) -> Result<String> {
    match json_field(obj, column, row)? {
        JsonValue::String(s) => parse_text(s.trim(), row, column),
        other => parse_text(&other.to_string(), row, column),
    }
}

fn json_number(obj: &Map<String, JsonValue>, column: &str, row: usize) -> Result<f64> {
    match json_field(obj, column, row)? {
        JsonValue::Number(n) => n.as_f64().ok_or_else(|| LoadError::InvalidNumber {
            row,
            column: column.to_string(),
            value: n.to_string(),
        }),
        JsonValue::String(s) => parse_number(s, row, column),
        other => Err(LoadError::InvalidNumber {
            row,
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

fn json_date(obj: &Map<String, JsonValue>, row: usize, options: &LoadOptions) -> Result<NaiveDate> {
    match json_field(obj, &options.date_column, row)? {
        JsonValue::String(s) => parse_date(s, row, options),
        JsonValue::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| LoadError::InvalidDate {
                row,
                value: n.to_string(),
            }),
        other => Err(LoadError::InvalidDate {
            row,
            value: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing sales data.
///
/// Expected schema:
/// - `Category`, `Sub_Category`: Utf8 or LargeUtf8
/// - `Sales`, `Profit`: any integer or float type
/// - date column: Utf8, Date32, Date64 or Timestamp
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
pub fn read_parquet(file: File, options: &LoadOptions) -> Result<Dataset> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    // Checked up front: a file without rows yields no batches.
    let schema = builder.schema();
    for name in [CATEGORY, SUB_CATEGORY, options.date_column.as_str(), SALES, PROFIT] {
        if schema.index_of(name).is_err() {
            return Err(LoadError::MissingColumn(name.to_string()));
        }
    }

    let reader = builder.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;

        let category = cast(column(&batch, CATEGORY)?, &DataType::Utf8)?;
        let sub_category = cast(column(&batch, SUB_CATEGORY)?, &DataType::Utf8)?;
        let sales = cast(column(&batch, SALES)?, &DataType::Float64)?;
        let profit = cast(column(&batch, PROFIT)?, &DataType::Float64)?;
        let dates = DateColumn::new(column(&batch, &options.date_column)?)?;

        let category = category.as_string::<i32>();
        let sub_category = sub_category.as_string::<i32>();
        let sales = sales.as_primitive::<Float64Type>();
        let profit = profit.as_primitive::<Float64Type>();

        let offset = records.len();
        for i in 0..batch.num_rows() {
            let row = offset + i + 1;
            let missing = |col: &str| LoadError::MissingValue {
                row,
                column: col.to_string(),
            };

            if category.is_null(i) {
                return Err(missing(CATEGORY));
            }
            if sub_category.is_null(i) {
                return Err(missing(SUB_CATEGORY));
            }
            if sales.is_null(i) {
                return Err(missing(SALES));
            }
            if profit.is_null(i) {
                return Err(missing(PROFIT));
            }

            records.push(Record {
                category: parse_text(category.value(i), row, CATEGORY)?,
                sub_category: parse_text(sub_category.value(i), row, SUB_CATEGORY)?,
                order_date: dates.value(i, row, options)?,
                sales: finite(sales.value(i), row, SALES)?,
                profit: finite(profit.value(i), row, PROFIT)?,
            });
        }
    }

    Ok(Dataset::from_records(records))
}

fn finite(value: f64, row: usize, column: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoadError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .schema()
        .index_of(name)
        .map(|idx| batch.column(idx))
        .map_err(|_| LoadError::MissingColumn(name.to_string()))
}

/// A date column normalised either to text (parsed like CSV) or to Date32.
enum DateColumn {
    Text(ArrayRef),
    Days(ArrayRef),
}

impl DateColumn {
    fn new(col: &ArrayRef) -> Result<Self> {
        match col.data_type() {
            DataType::Utf8 | DataType::LargeUtf8 => Ok(DateColumn::Text(cast(col, &DataType::Utf8)?)),
            _ => Ok(DateColumn::Days(cast(col, &DataType::Date32)?)),
        }
    }

    fn value(&self, i: usize, row: usize, options: &LoadOptions) -> Result<NaiveDate> {
        let arr = match self {
            DateColumn::Text(arr) | DateColumn::Days(arr) => arr,
        };
        if arr.is_null(i) {
            return Err(LoadError::MissingValue {
                row,
                column: options.date_column.clone(),
            });
        }
        match self {
            DateColumn::Text(arr) => parse_date(arr.as_string::<i32>().value(i), row, options),
            DateColumn::Days(arr) => {
                let days = arr.as_primitive::<Date32Type>();
                days.value_as_date(i).ok_or_else(|| LoadError::InvalidDate {
                    row,
                    value: days.value(i).to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Date32Array, Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;

    const SCENARIO_CSV: &str = "\
Row_ID,Category,Sub_Category,Order_Date,Sales,Profit
1,Furniture,Chairs,2020-01-15,100,20
2,Furniture,Tables,2020-02-10,50,-10
";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario() -> Dataset {
        Dataset::from_records(vec![
            Record::new("Furniture", "Chairs", date(2020, 1, 15), 100.0, 20.0),
            Record::new("Furniture", "Tables", date(2020, 2, 10), 50.0, -10.0),
        ])
    }

    fn temp_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_csv_and_ignores_extra_columns() {
        let file = temp_file(".csv", SCENARIO_CSV.as_bytes());
        let ds = load_file(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(ds, scenario());
    }

    #[test]
    fn loads_tsv_with_slashed_dates_and_currency() {
        let tsv = "Category\tSub_Category\tOrder_Date\tSales\tProfit\n\
                   Furniture\tChairs\t1/15/2020\t$100.00\t20\n\
                   Furniture\tTables\t02/10/2020\t50\t-10\n";
        let file = temp_file(".tsv", tsv.as_bytes());
        let ds = load_file(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(ds, scenario());
    }

    #[test]
    fn thousands_separators_are_accepted() {
        let csv = "Category,Sub_Category,Order_Date,Sales,Profit\n\
                   Technology,Copiers,2016-03-01,\"1,234.50\",-5\n";
        let ds = read_delimited(csv.as_bytes(), b',', &LoadOptions::default()).unwrap();
        assert_eq!(ds.records()[0].sales, 1234.5);
    }

    #[test]
    fn explicit_format_and_custom_date_column() {
        let csv = "Category,Sub_Category,Ship,Sales,Profit\n\
                   Furniture,Chairs,15.01.2020,100,20\n";
        let options = LoadOptions {
            date_column: "Ship".to_string(),
            date_format: Some("%d.%m.%Y".to_string()),
            delimiter: None,
        };
        let ds = read_delimited(csv.as_bytes(), b',', &options).unwrap();
        assert_eq!(ds.records()[0].order_date, date(2020, 1, 15));
    }

    #[test]
    fn datetime_values_keep_their_date() {
        let csv = "Category,Sub_Category,Order_Date,Sales,Profit\n\
                   Furniture,Chairs,2020-01-15 13:45:00,100,20\n";
        let ds = read_delimited(csv.as_bytes(), b',', &LoadOptions::default()).unwrap();
        assert_eq!(ds.records()[0].order_date, date(2020, 1, 15));
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Category,Sub_Category,Order_Date,Sales\nFurniture,Chairs,2020-01-15,100\n";
        let err = read_delimited(csv.as_bytes(), b',', &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Profit"));
    }

    #[test]
    fn bad_date_reports_row() {
        let csv = "Category,Sub_Category,Order_Date,Sales,Profit\n\
                   Furniture,Chairs,2020-01-15,100,20\n\
                   Furniture,Chairs,someday,100,20\n";
        let err = read_delimited(csv.as_bytes(), b',', &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { row: 2, ref value } if value == "someday"));
    }

    #[test]
    fn bad_number_reports_column() {
        let csv = "Category,Sub_Category,Order_Date,Sales,Profit\n\
                   Furniture,Chairs,2020-01-15,lots,20\n";
        let err = read_delimited(csv.as_bytes(), b',', &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { row: 1, ref column, .. } if column == "Sales"));
    }

    #[test]
    fn empty_field_is_missing_value() {
        let csv = "Category,Sub_Category,Order_Date,Sales,Profit\n\
                   Furniture,,2020-01-15,100,20\n";
        let err = read_delimited(csv.as_bytes(), b',', &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingValue { row: 1, ref column } if column == "Sub_Category"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = temp_file(".xlsx", b"");
        let err = load_file(file.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ref e) if e == "xlsx"));
    }

    #[test]
    fn loads_json_records_with_string_and_epoch_dates() {
        let json = r#"[
            {"Category": "Furniture", "Sub_Category": "Chairs", "Order_Date": "2020-01-15", "Sales": 100, "Profit": 20.0},
            {"Category": "Furniture", "Sub_Category": "Tables", "Order_Date": 1581292800000, "Sales": "50", "Profit": -10}
        ]"#;
        let file = temp_file(".json", json.as_bytes());
        let ds = load_file(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(ds, scenario());
    }

    #[test]
    fn json_must_be_an_array() {
        let err = read_json(r#"{"Category": "Furniture"}"#.as_bytes(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn json_absent_key_is_missing_column() {
        let json = r#"[{"Category": "Furniture", "Sub_Category": "Chairs", "Order_Date": "2020-01-15", "Sales": 1}]"#;
        let err = read_json(json.as_bytes(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Profit"));
    }

    #[test]
    fn loads_parquet_with_date32_and_integer_sales() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(CATEGORY, DataType::Utf8, false),
            Field::new(SUB_CATEGORY, DataType::Utf8, false),
            Field::new(ORDER_DATE, DataType::Date32, false),
            Field::new(SALES, DataType::Int64, false),
            Field::new(PROFIT, DataType::Float64, false),
        ]));
        let epoch = date(1970, 1, 1);
        let days: Vec<i32> = [date(2020, 1, 15), date(2020, 2, 10)]
            .iter()
            .map(|d| (*d - epoch).num_days() as i32)
            .collect();
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Furniture", "Furniture"])),
                Arc::new(StringArray::from(vec!["Chairs", "Tables"])),
                Arc::new(Date32Array::from(days)),
                Arc::new(Int64Array::from(vec![100, 50])),
                Arc::new(Float64Array::from(vec![20.0, -10.0])),
            ],
        )
        .unwrap();

        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(ds, scenario());
    }

    #[test]
    fn parquet_missing_column_is_reported() {
        let schema = Arc::new(Schema::new(vec![Field::new(CATEGORY, DataType::Utf8, false)]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(StringArray::from(vec!["Furniture"]))],
        )
        .unwrap();
        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_file(file.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == SUB_CATEGORY));
    }

    #[test]
    fn parquet_without_rows_still_checks_columns() {
        let schema = Arc::new(Schema::new(vec![Field::new(CATEGORY, DataType::Utf8, false)]));
        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.close().unwrap();

        let err = load_file(file.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == SUB_CATEGORY));
    }

    #[test]
    fn parquet_rejects_non_finite_amounts() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(CATEGORY, DataType::Utf8, false),
            Field::new(SUB_CATEGORY, DataType::Utf8, false),
            Field::new(ORDER_DATE, DataType::Utf8, false),
            Field::new(SALES, DataType::Float64, false),
            Field::new(PROFIT, DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Furniture", "Furniture"])),
                Arc::new(StringArray::from(vec!["Chairs", "Tables"])),
                Arc::new(StringArray::from(vec!["2020-01-15", "2020-02-10"])),
                Arc::new(Float64Array::from(vec![100.0, f64::NAN])),
                Arc::new(Float64Array::from(vec![20.0, 5.0])),
            ],
        )
        .unwrap();
        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_file(file.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { row: 2, ref column, .. } if column == SALES));
    }
}

/// Data layer: core types, loading, aggregation, filtering and metrics.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, immutable
///   └──────────┘
///        │
///        ├──────────────┬───────────────┐
///        ▼              ▼               ▼
///   ┌──────────┐  ┌───────────┐  ┌──────────┐
///   │  filter   │  │ aggregate │  │ metrics  │
///   └──────────┘  └───────────┘  └──────────┘
///   category /     by category,   sales, profit,
///   sub-category   month, matrix  margin, delta
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;

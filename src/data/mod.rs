/// Data layer: table model, loading, saving and description.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  ordered Vec<Arc<Column>>, shared between versions
///   └──────────┘
///        │
///        ├──▶ summary  per-column type, unique and null counts
///        ▼
///   ┌──────────┐
///   │  writer   │  Table → file
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;
pub mod writer;

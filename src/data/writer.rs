use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::info;
use parquet::arrow::ArrowWriter;
use serde_json::{Map, Value as JsonValue};

use super::model::{CellValue, Column, Table};

/// Write a table to a file.  Dispatch by extension, mirroring the loader.
pub fn save_file(table: &Table, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::create(path).context("creating CSV file")?;
            write_csv(table, file)?;
        }
        "json" => {
            let file = std::fs::File::create(path).context("creating JSON file")?;
            serde_json::to_writer_pretty(file, &to_json_records(table))
                .context("writing JSON")?;
        }
        "parquet" | "pq" => save_parquet(table, path)?,
        other => bail!("Unsupported file extension: .{other}"),
    }
    info!(
        "wrote {}: {} rows x {} columns",
        path.display(),
        table.n_rows(),
        table.n_cols()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Header row, then one record per row. Null cells are empty fields.
pub fn write_csv<W: std::io::Write>(table: &Table, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer
        .write_record(table.column_names())
        .context("writing CSV header")?;
    for (row, cells) in (0..table.n_rows()).filter_map(|i| table.row(i)).enumerate() {
        let record = cells.iter().map(|(_, cell)| cell.to_field());
        writer
            .write_record(record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the shape the loader reads back.
pub fn to_json_records(table: &Table) -> JsonValue {
    let records = (0..table.n_rows())
        .filter_map(|i| table.row(i))
        .map(|cells| {
            let obj: Map<String, JsonValue> = cells
                .into_iter()
                .map(|(name, cell)| (name.to_string(), cell_to_json(cell)))
                .collect();
            JsonValue::Object(obj)
        })
        .collect();
    JsonValue::Array(records)
}

fn cell_to_json(cell: &CellValue) -> JsonValue {
    match cell {
        CellValue::String(s) => JsonValue::String(s.clone()),
        CellValue::Integer(i) => JsonValue::from(*i),
        CellValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        CellValue::Bool(b) => JsonValue::Bool(*b),
        CellValue::Null => JsonValue::Null,
    }
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

fn save_parquet(table: &Table, path: &Path) -> Result<()> {
    let (fields, arrays): (Vec<Field>, Vec<ArrayRef>) = table.columns().map(to_arrow).unzip();
    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

/// Narrowest Arrow type that holds every non-null cell of the column.
/// A column with no values at all is written as strings.
fn to_arrow(column: &Column) -> (Field, ArrayRef) {
    let mut cells = column.values.iter().filter(|v| !v.is_null()).peekable();
    let (data_type, array): (DataType, ArrayRef) =
        if cells.peek().is_none() {
            let values: Vec<Option<String>> = vec![None; column.len()];
            (DataType::Utf8, Arc::new(StringArray::from(values)))
        } else if cells.clone().all(|v| matches!(v, CellValue::Bool(_))) {
            let values: Vec<Option<bool>> = column.values.iter().map(CellValue::as_bool).collect();
            (DataType::Boolean, Arc::new(BooleanArray::from(values)))
        } else if cells.clone().all(|v| matches!(v, CellValue::Integer(_))) {
            let values: Vec<Option<i64>> = column.values.iter().map(CellValue::as_i64).collect();
            (DataType::Int64, Arc::new(Int64Array::from(values)))
        } else if cells.clone().all(CellValue::is_numeric) {
            let values: Vec<Option<f64>> = column.values.iter().map(CellValue::as_f64).collect();
            (DataType::Float64, Arc::new(Float64Array::from(values)))
        } else {
            let values: Vec<Option<String>> = column
                .values
                .iter()
                .map(|v| (!v.is_null()).then(|| v.to_string()))
                .collect();
            (DataType::Utf8, Arc::new(StringArray::from(values)))
        };
    (Field::new(column.name.clone(), data_type, true), array)
}

use std::fmt;

use super::model::{CellValue, Column, Table};

/// Coarse type class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    NonNumeric,
}

/// Per-column description: type class, distinct values and missing cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    /// Distinct non-null values.
    pub unique: usize,
    /// Null cells plus `-1` / `"-1"` placeholders.
    pub missing: usize,
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ColumnKind::Numeric => "numeric",
            ColumnKind::NonNumeric => "non-numeric",
        };
        write!(
            f,
            "{:<40} {kind:<12} unique={:<6} missing={}",
            self.name, self.unique, self.missing
        )
    }
}

fn is_missing(value: &CellValue) -> bool {
    match value {
        CellValue::Null => true,
        CellValue::Integer(i) => *i == -1,
        CellValue::Float(f) => *f == -1.0,
        CellValue::String(s) => s == "-1",
        CellValue::Bool(_) => false,
    }
}

pub fn summarize_column(column: &Column) -> ColumnSummary {
    let numeric = column
        .values
        .iter()
        .filter(|v| !v.is_null())
        .all(CellValue::is_numeric);
    ColumnSummary {
        name: column.name.clone(),
        kind: if numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::NonNumeric
        },
        unique: column.unique_values().len(),
        missing: column.values.iter().filter(|v| is_missing(v)).count(),
    }
}

/// Describe every column, in table order.
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table.columns().map(summarize_column).collect()
}

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{CleanError, Result};

/// Raw label the source dataset uses for "no information".
pub const UNKNOWN_LABEL: &str = "Unknown / Non-Applicable";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
/// `Null` is the absence marker for missing or unparseable data.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// Total order over cells; floats compare with `total_cmp`.
impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl From<Option<i64>> for CellValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(CellValue::Null, CellValue::Integer)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(CellValue::Null, CellValue::Float)
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(CellValue::Null, |s| CellValue::String(s.to_string()))
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }

    /// The cell as a category label.
    ///
    /// Loaders infer `-1` as an integer, so labels are compared in their
    /// textual form. `Null` has no label.
    pub fn label(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::String(s) => Some(Cow::Borrowed(s.as_str())),
            CellValue::Null => None,
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// Whether the raw value encodes "missing" rather than a measurement.
    pub fn is_sentinel(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Integer(i) => *i == -1,
            CellValue::Float(f) => *f == -1.0,
            CellValue::String(s) => s == "-1" || s == UNKNOWN_LABEL,
            CellValue::Bool(_) => false,
        }
    }

    /// Text written to delimited output. `Null` becomes an empty field.
    /// Floats keep their decimal point so they read back as floats.
    pub fn to_field(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Float(v) => format!("{v:?}"),
            other => other.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – a named sequence of cells
// ---------------------------------------------------------------------------

/// One named column of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted set of the distinct non-null values.
    pub fn unique_values(&self) -> BTreeSet<&CellValue> {
        self.values.iter().filter(|v| !v.is_null()).collect()
    }
}

// ---------------------------------------------------------------------------
// Table – ordered named columns with structural sharing
// ---------------------------------------------------------------------------

/// An immutable table of equally long, uniquely named columns.
///
/// Columns sit behind `Arc`, so deriving a new table from an existing one
/// copies pointers, not cells. Nothing here mutates `self`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Arc<Column>>,
    n_rows: usize,
}

impl Table {
    /// Build a table, rejecting ragged or duplicated columns.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, Column::len);
        let mut table = Table {
            columns: Vec::with_capacity(columns.len()),
            n_rows,
        };
        for column in columns {
            if table.position(&column.name).is_some() {
                return Err(CleanError::DuplicateColumn {
                    column: column.name,
                });
            }
            table.check_len(&column)?;
            table.columns.push(Arc::new(column));
        }
        Ok(table)
    }

    /// Build a table from row-major records. Short rows are padded with `Null`.
    pub fn from_records(headers: &[String], rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let mut columns: Vec<Vec<CellValue>> = headers
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for row in rows {
            let mut cells = row.into_iter();
            for values in &mut columns {
                values.push(cells.next().unwrap_or(CellValue::Null));
            }
        }
        let columns = headers
            .iter()
            .zip(columns)
            .map(|(name, values)| Column::new(name.clone(), values))
            .collect();
        Table::from_columns(columns)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().map(|c| &**c)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.position(name)
            .map(|i| &*self.columns[i])
            .ok_or_else(|| CleanError::missing(name))
    }

    /// Cell at (`row`, `name`), if both exist.
    pub fn get(&self, row: usize, name: &str) -> Option<&CellValue> {
        self.position(name)
            .and_then(|i| self.columns[i].values.get(row))
    }

    /// Row `row` as (column name, cell) pairs in column order.
    pub fn row(&self, row: usize) -> Option<Vec<(&str, &CellValue)>> {
        if row >= self.n_rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| (c.name.as_str(), &c.values[row]))
                .collect(),
        )
    }

    /// Return a table with `column` appended, or swapped in place of an
    /// existing column with the same name.
    pub fn with_column(&self, column: Column) -> Result<Self> {
        let mut next = self.clone();
        if next.columns.is_empty() {
            next.n_rows = column.len();
        }
        next.check_len(&column)?;
        match next.position(&column.name) {
            Some(i) => next.columns[i] = Arc::new(column),
            None => next.columns.push(Arc::new(column)),
        }
        Ok(next)
    }

    pub fn with_columns(&self, columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        columns
            .into_iter()
            .try_fold(self.clone(), |table, column| table.with_column(column))
    }

    /// Return a table without the named columns. Every name must exist.
    pub fn drop_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        for name in names {
            self.column(name.as_ref())?;
        }
        let kept: Vec<&str> = self
            .column_names()
            .into_iter()
            .filter(|c| !names.iter().any(|n| n.as_ref() == *c))
            .collect();
        self.select(&kept)
    }

    /// Return a table restricted to the named columns, in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let columns = names
            .iter()
            .map(|n| {
                self.position(n.as_ref())
                    .map(|i| Arc::clone(&self.columns[i]))
                    .ok_or_else(|| CleanError::missing(n.as_ref()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Table {
            columns,
            n_rows: self.n_rows,
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    fn check_len(&self, column: &Column) -> Result<()> {
        if column.len() != self.n_rows {
            return Err(CleanError::LengthMismatch {
                column: column.name.clone(),
                expected: self.n_rows,
                actual: column.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::new("a", vec![CellValue::Integer(1), CellValue::Integer(2)]),
            Column::new("b", vec!["x".into(), CellValue::Null]),
        ])
        .unwrap()
    }

    #[test]
    fn sentinels_are_recognised() {
        assert!(CellValue::Null.is_sentinel());
        assert!(CellValue::Integer(-1).is_sentinel());
        assert!(CellValue::Float(-1.0).is_sentinel());
        assert!(CellValue::from("-1").is_sentinel());
        assert!(CellValue::from(UNKNOWN_LABEL).is_sentinel());
        assert!(!CellValue::Integer(0).is_sentinel());
        assert!(!CellValue::from("Unknown").is_sentinel());
    }

    #[test]
    fn label_uses_textual_form() {
        assert_eq!(CellValue::Integer(-1).label().as_deref(), Some("-1"));
        assert_eq!(CellValue::from("Retail").label().as_deref(), Some("Retail"));
        assert_eq!(CellValue::Null.label(), None);
    }

    #[test]
    fn missing_column_is_named() {
        let err = sample().column("zzz").unwrap_err();
        assert_eq!(err.to_string(), "missing column 'zzz'");
    }

    #[test]
    fn with_column_leaves_input_untouched() {
        let table = sample();
        let next = table
            .with_column(Column::new("c", vec![true.into(), false.into()]))
            .unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(next.column_names(), vec!["a", "b", "c"]);
        assert_eq!(next.n_rows(), 2);
    }

    #[test]
    fn with_column_replaces_in_place() {
        let next = sample()
            .with_column(Column::new("a", vec![CellValue::Integer(7), CellValue::Integer(8)]))
            .unwrap();
        assert_eq!(next.column_names(), vec!["a", "b"]);
        assert_eq!(next.get(1, "a"), Some(&CellValue::Integer(8)));
    }

    #[test]
    fn with_column_rejects_wrong_length() {
        let err = sample()
            .with_column(Column::new("c", vec![true.into()]))
            .unwrap_err();
        assert!(matches!(err, CleanError::LengthMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn from_columns_rejects_duplicates() {
        let err = Table::from_columns(vec![
            Column::new("a", vec![]),
            Column::new("a", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, CleanError::DuplicateColumn { .. }));
    }

    #[test]
    fn drop_columns_requires_every_name() {
        let table = sample();
        assert_eq!(table.drop_columns(&["a"]).unwrap().column_names(), vec!["b"]);
        assert!(table.drop_columns(&["a", "nope"]).is_err());
    }

    #[test]
    fn from_records_pads_short_rows() {
        let headers = vec!["a".to_string(), "b".to_string()];
        let rows = vec![
            vec![CellValue::Integer(1)],
            vec![CellValue::Integer(2), "y".into()],
        ];
        let table = Table::from_records(&headers, rows).unwrap();
        assert_eq!(table.get(0, "b"), Some(&CellValue::Null));
        assert_eq!(table.get(1, "b"), Some(&CellValue::from("y")));
    }

    #[test]
    fn select_reorders_and_shares() {
        let table = sample();
        let picked = table.select(&["b", "a"]).unwrap();
        assert_eq!(picked.column_names(), vec!["b", "a"]);
        assert!(table.select(&["c"]).is_err());
    }

    #[test]
    fn row_pairs_names_with_cells() {
        let table = sample();
        let row = table.row(1).unwrap();
        assert_eq!(row, vec![("a", &CellValue::Integer(2)), ("b", &CellValue::Null)]);
        assert!(table.row(2).is_none());
    }

    #[test]
    fn float_fields_keep_the_decimal_point() {
        assert_eq!(CellValue::Float(3.0e8).to_field(), "300000000.0");
        assert_eq!(CellValue::Float(12.5).to_field(), "12.5");
        assert_eq!(CellValue::Integer(300).to_field(), "300");
        assert_eq!(CellValue::Null.to_field(), "");
    }

    #[test]
    fn unique_values_skip_null() {
        let table = sample();
        let b = table.column("b").unwrap();
        assert_eq!(b.unique_values().len(), 1);
    }
}

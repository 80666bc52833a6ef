use std::borrow::Cow;
use std::collections::BTreeSet;

use log::{debug, warn};

use crate::data::model::{CellValue, Column, Table};
use crate::error::Result;

/// Name of the indicator column for `category`, e.g. `Sector_Retail`.
pub fn indicator_name(prefix: &str, category: &str) -> String {
    format!("{prefix}_{category}")
}

/// One-hot encode `source`: one boolean column per distinct non-null value,
/// appended in sorted category order. Rows whose value is null get `false`
/// everywhere.
pub fn encode_indicators(table: &Table, source: &str, prefix: &str) -> Result<Table> {
    let column = table.column(source)?;
    let categories: BTreeSet<Cow<'_, str>> =
        column.values.iter().filter_map(CellValue::label).collect();

    let indicators: Vec<Column> = categories
        .iter()
        .map(|category| {
            let values = column
                .values
                .iter()
                .map(|cell| CellValue::Bool(cell.label().as_deref() == Some(&**category)))
                .collect();
            Column::new(indicator_name(prefix, category), values)
        })
        .collect();

    for indicator in indicators.iter().filter(|c| table.has_column(&c.name)) {
        warn!(
            "indicator '{}' replaces an existing column of the same name",
            indicator.name
        );
    }
    debug!(
        "encoded '{source}' into {} indicator columns",
        indicators.len()
    );
    table.with_columns(indicators)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::from_columns(vec![Column::new(
            "group",
            vec!["b".into(), "a".into(), CellValue::Null, "b".into()],
        )])
        .unwrap()
    }

    #[test]
    fn one_column_per_category_sorted() {
        let encoded = encode_indicators(&table(), "group", "G").unwrap();
        assert_eq!(encoded.column_names(), vec!["group", "G_a", "G_b"]);
        assert_eq!(
            encoded.column("G_b").unwrap().values,
            vec![
                CellValue::Bool(true),
                CellValue::Bool(false),
                CellValue::Bool(false),
                CellValue::Bool(true),
            ]
        );
    }

    #[test]
    fn null_rows_have_no_indicator_set() {
        let encoded = encode_indicators(&table(), "group", "G").unwrap();
        assert_eq!(encoded.get(2, "G_a"), Some(&CellValue::Bool(false)));
        assert_eq!(encoded.get(2, "G_b"), Some(&CellValue::Bool(false)));
    }

    #[test]
    fn all_null_column_adds_nothing() {
        let table = Table::from_columns(vec![Column::new("g", vec![CellValue::Null])]).unwrap();
        let encoded = encode_indicators(&table, "g", "G").unwrap();
        assert_eq!(encoded.n_cols(), 1);
    }

    #[test]
    fn indicator_overwrites_a_clashing_column() {
        let table = table()
            .with_column(Column::new("G_a", vec![CellValue::Integer(9); 4]))
            .unwrap();
        let encoded = encode_indicators(&table, "group", "G").unwrap();
        assert_eq!(encoded.column_names(), vec!["group", "G_a", "G_b"]);
        assert_eq!(encoded.get(1, "G_a"), Some(&CellValue::Bool(true)));
        assert_eq!(encoded.get(0, "G_a"), Some(&CellValue::Bool(false)));
    }

    #[test]
    fn missing_source_is_an_error() {
        assert!(encode_indicators(&table(), "nope", "G").is_err());
    }
}

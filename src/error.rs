use thiserror::Error;

/// Structural errors raised by table operations and the cleaning pipeline.
///
/// Malformed cell values never end up here; they degrade to
/// [`CellValue::Null`](crate::data::model::CellValue::Null).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanError {
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    #[error("column '{column}' has {actual} rows, table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },
}

impl CleanError {
    pub fn missing(column: &str) -> Self {
        CleanError::MissingColumn {
            column: column.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;

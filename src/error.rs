use thiserror::Error;

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by loading, selection, sorting and export functions.
///
/// Every documented failure condition maps to its own variant, so callers can tell a truncated
/// file apart from an empty selection or a bad argument.
#[derive(Debug, Error)]
pub enum TableError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The delimiter/column structure of the input is malformed.
    #[error("format error: {message}")]
    Format { message: String },

    /// One of the header rows does not match the expected schema.
    #[error("header mismatch in row {row}{}: expected '{expected}', found '{found}'", column_suffix(.column))]
    HeaderMismatch {
        row: usize,
        column: Option<usize>,
        expected: String,
        found: String,
    },

    /// The input has fewer rows than the two header rows plus one data row.
    #[error("too few rows: found {rows}, need at least {min}")]
    TooFewRows { rows: usize, min: usize },

    /// A filter/sort/export argument is out of range or empty.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A selection produced no rows.
    #[error("no rows where column {column} contains '{needle}'")]
    NoMatch { column: usize, needle: String },
}

impl TableError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

fn column_suffix(column: &Option<usize>) -> String {
    match column {
        Some(c) => format!(" column {c}"),
        None => String::new(),
    }
}

//! Splitting logical rows into fields.

use crate::error::{TableError, TableResult};
use crate::types::{Row, FIELD_DELIMITER};

/// Split one logical row (`"f0";"f1";...;"fN";`) into its fields.
///
/// The outer envelope (one leading `"` and one trailing `";`, or a bare trailing `"`) is removed
/// before splitting on `";"`. The field count is not checked here; the tokenizer already
/// guarantees it for rows it produced.
pub fn split_row(row: &str) -> Row {
    let inner = row.strip_prefix('"').unwrap_or(row);
    let inner = inner
        .strip_suffix("\";")
        .or_else(|| inner.strip_suffix('"'))
        .unwrap_or(inner);
    inner.split(FIELD_DELIMITER).map(str::to_string).collect()
}

/// Split every logical row.
///
/// # Errors
///
/// Returns [`TableError::InvalidArgument`] if `rows` is empty.
pub fn split_rows<S: AsRef<str>>(rows: &[S]) -> TableResult<Vec<Row>> {
    if rows.is_empty() {
        return Err(TableError::invalid_argument("no rows to split"));
    }
    Ok(rows.iter().map(|r| split_row(r.as_ref())).collect())
}

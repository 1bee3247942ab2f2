//! Header row validation.
//!
//! The two header rows act as the file's schema contract: downstream code addresses fields by
//! index, so any drift in the header is fatal.

use crate::error::{TableError, TableResult};
use crate::export::format_row;
use crate::types::{HEADER_ROWS, Schema};

use super::splitter::split_row;

/// Minimum row count of a usable file: both header rows plus one data row.
pub const MIN_ROWS: usize = HEADER_ROWS + 1;

/// Check the leading logical rows against `schema`.
///
/// Header rows are split and compared column by column so the error names the first differing
/// column. A row that splits correctly but whose envelope differs from the canonical header line
/// (e.g. a missing leading quote) is still rejected.
///
/// # Errors
///
/// - [`TableError::TooFewRows`] if there are fewer than [`MIN_ROWS`] rows (or fewer than one more
///   than the schema's header lines).
/// - [`TableError::HeaderMismatch`] if any header row differs from the schema.
pub fn validate_headers<S: AsRef<str>>(rows: &[S], schema: &Schema) -> TableResult<()> {
    let min = MIN_ROWS.max(schema.headers.len() + 1);
    if rows.len() < min {
        return Err(TableError::TooFewRows {
            rows: rows.len(),
            min,
        });
    }

    for (row_idx, expected) in schema.headers.iter().enumerate() {
        let raw = rows[row_idx].as_ref();
        let found = split_row(raw);

        for (col, name) in expected.columns.iter().enumerate() {
            match found.get(col) {
                Some(actual) if actual == name => {}
                Some(actual) => {
                    return Err(TableError::HeaderMismatch {
                        row: row_idx,
                        column: Some(col),
                        expected: name.clone(),
                        found: actual.clone(),
                    });
                }
                None => {
                    return Err(TableError::HeaderMismatch {
                        row: row_idx,
                        column: Some(col),
                        expected: name.clone(),
                        found: String::new(),
                    });
                }
            }
        }

        let canonical = format_row(&expected.columns);
        if found.len() != expected.columns.len() || raw != canonical {
            return Err(TableError::HeaderMismatch {
                row: row_idx,
                column: None,
                expected: canonical,
                found: raw.to_string(),
            });
        }
    }

    Ok(())
}

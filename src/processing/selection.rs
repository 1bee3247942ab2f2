//! Row selection for [`crate::types::Table`].
//!
//! Selections only ever look at data rows; the two header rows are never candidates. A
//! selection returns copies of the matching rows and leaves the table untouched.

use std::collections::HashSet;

use crate::error::{TableError, TableResult};
use crate::types::{COLUMN_COUNT, FilterCriterion, Row, Table, field_of};

/// Data rows whose field at `column` contains `needle`, ignoring case.
///
/// # Errors
///
/// - [`TableError::InvalidArgument`] if `column` is not in `0..10`, the table is empty, or
///   `needle` is empty.
/// - [`TableError::NoMatch`] if no data row matches.
/// - [`TableError::Format`] if a data row is too short to have `column`.
pub fn select(column: usize, table: &Table, needle: &str) -> TableResult<Vec<Row>> {
    if table.is_empty() {
        return Err(TableError::invalid_argument("table is empty"));
    }
    if needle.is_empty() {
        return Err(TableError::invalid_argument("filter value is empty"));
    }
    if column >= COLUMN_COUNT {
        return Err(TableError::invalid_argument(format!(
            "column index {column} is out of range 0..{COLUMN_COUNT}"
        )));
    }

    let needle_lc = needle.to_lowercase();
    let mut selected = Vec::new();
    for row in table.data_rows() {
        if field_of(row, column)?.to_lowercase().contains(&needle_lc) {
            selected.push(row.clone());
        }
    }

    if selected.is_empty() {
        return Err(TableError::NoMatch {
            column,
            needle: needle.to_string(),
        });
    }
    Ok(selected)
}

/// Rows of `first` that also appear in `second`.
///
/// Rows are compared field by field. The result follows `first`'s order and holds each distinct
/// row once, so identical duplicate rows collapse into one.
pub fn intersect(first: &[Row], second: &[Row]) -> Vec<Row> {
    let in_second: HashSet<&Row> = second.iter().collect();
    let mut seen: HashSet<&Row> = HashSet::new();
    first
        .iter()
        .filter(|row| in_second.contains(row) && seen.insert(*row))
        .cloned()
        .collect()
}

/// Compound selection: the intersection of one [`select`] per criterion, left to right.
///
/// Each criterion is evaluated independently, so any single criterion without matches fails
/// with [`TableError::NoMatch`]. An empty intersection of non-empty selections is `Ok(vec![])`.
pub fn select_all(table: &Table, criteria: &[FilterCriterion]) -> TableResult<Vec<Row>> {
    let (first, rest) = criteria
        .split_first()
        .ok_or_else(|| TableError::invalid_argument("no filter criteria given"))?;

    let mut result = select(first.column, table, &first.needle)?;
    for criterion in rest {
        let next = select(criterion.column, table, &criterion.needle)?;
        result = intersect(&result, &next);
    }
    Ok(result)
}

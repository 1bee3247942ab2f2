//! Path-based loading entrypoint.
//!
//! Most callers should use [`read_table_from_path`], which reads a registry file into an in-memory
//! [`crate::types::Table`]:
//!
//! - the file is flattened ([`super::tokenizer::merge_lines`]) and rows are rebuilt by column count
//! - both header rows are validated against [`IngestionOptions::schema`]
//! - rows are split into fields
//! - if an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{TableError, TableResult};
use crate::types::{FIELD_DELIMITER, Schema, Table};

use super::header::validate_headers;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::splitter::split_rows;
use super::tokenizer::{form_entries, merge_lines};

/// Options controlling how files are loaded.
///
/// Use [`Default`] for the registry schema with no observer.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Header rows the file must start with.
    pub schema: Schema,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("schema_headers", &self.schema.headers.len())
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            schema: Schema::registry(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load a registry file into a [`Table`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use flora_table::ingestion::{read_table_from_path, IngestionOptions, StdErrObserver};
///
/// # fn main() -> Result<(), flora_table::TableError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let table = read_table_from_path("plants.csv", &opts)?;
/// println!("data rows={}", table.data_row_count());
/// # Ok(())
/// # }
/// ```
pub fn read_table_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> TableResult<Table> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        source: path.to_path_buf(),
    };

    let result = fs::read_to_string(path)
        .map_err(TableError::from)
        .and_then(|text| read_table_from_str(&text, &options.schema));

    report(options, &ctx, &result);
    result
}

/// Load a table from the full text of a file.
pub fn read_table_from_str(text: &str, schema: &Schema) -> TableResult<Table> {
    read_table_from_lines(std::iter::once(text), schema)
}

/// Load a table from raw file lines (line terminators already removed or not).
///
/// # Errors
///
/// Tokenizer, header and splitter errors propagate unchanged: [`crate::TableError::Format`],
/// [`crate::TableError::TooFewRows`], [`crate::TableError::HeaderMismatch`].
pub fn read_table_from_lines<I, S>(lines: I, schema: &Schema) -> TableResult<Table>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw = merge_lines(lines);
    let entries = form_entries(&raw, FIELD_DELIMITER, schema.column_count())?;
    validate_headers(&entries, schema)?;
    Ok(Table::new(split_rows(&entries)?))
}

/// Load in-memory text and report to the observer under a `<memory>` source label.
pub fn read_table_observed(text: &str, options: &IngestionOptions) -> TableResult<Table> {
    let ctx = IngestionContext {
        source: PathBuf::from("<memory>"),
    };
    let result = read_table_from_str(text, &options.schema);
    report(options, &ctx, &result);
    result
}

fn report(options: &IngestionOptions, ctx: &IngestionContext, result: &TableResult<Table>) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(table) => obs.on_success(
            ctx,
            IngestionStats {
                rows: table.row_count(),
                data_rows: table.data_row_count(),
            },
        ),
        Err(e) => {
            let sev = IngestionSeverity::for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}

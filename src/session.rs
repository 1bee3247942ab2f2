//! Session state: configuration plus the currently loaded table.
//!
//! A [`Session`] owns the single mutable [`Table`]. Menu [`Action`]s run against it and produce an
//! [`Outcome`] that can be displayed or saved.

use std::path::{Path, PathBuf};

use crate::error::{TableError, TableResult};
use crate::export::{save_rows, validate_file_name, OutputFormat};
use crate::ingestion::{read_table_from_path, IngestionOptions};
use crate::processing::{select, select_all, sort};
use crate::types::{Column, FilterCriterion, Row, SortOrder, Table};

/// Configuration threaded through a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// File to load. If `None`, the caller supplies a path per load.
    pub input: Option<PathBuf>,
    /// Directory saved results are written to.
    pub output_dir: PathBuf,
    /// Format used by [`Session::save`].
    pub output_format: OutputFormat,
    /// Loader options (schema, observer).
    pub ingestion: IngestionOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: PathBuf::from("."),
            output_format: OutputFormat::default(),
            ingestion: IngestionOptions::default(),
        }
    }
}

/// Operations offered by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Data rows whose LandscapingZone contains the value.
    SelectByLandscapingZone(String),
    /// Data rows whose LocationPlace contains the value.
    SelectByLocationPlace(String),
    /// Intersection of a LandscapingZone and a ProsperityPeriod selection.
    SelectByZoneAndPeriod { zone: String, period: String },
    /// Sort the loaded table by LatinName.
    Sort(SortOrder),
}

/// Result of running an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Matching rows, plus the header rows to print/save before them.
    Selection { headers: Vec<Row>, rows: Vec<Row> },
    /// The whole table after sorting, headers in place.
    Sorted(Table),
}

impl Outcome {
    /// Header rows emitted before the result rows.
    pub fn headers(&self) -> &[Row] {
        match self {
            Self::Selection { headers, .. } => headers,
            Self::Sorted(table) => table.headers(),
        }
    }

    /// Result rows (no headers).
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Selection { rows, .. } => rows,
            Self::Sorted(table) => table.data_rows(),
        }
    }

    /// Headers followed by result rows, in output order.
    pub fn emitted_rows(&self) -> impl Iterator<Item = &Row> {
        self.headers().iter().chain(self.rows())
    }
}

/// A loaded table and the options it was loaded with.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: SessionOptions,
    table: Option<Table>,
}

impl Session {
    /// Create a session with nothing loaded.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            table: None,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Load `path`, replacing any previously loaded table.
    ///
    /// On failure the previous table is dropped as well.
    pub fn load(&mut self, path: impl AsRef<Path>) -> TableResult<&Table> {
        self.table = None;
        let table = read_table_from_path(path, &self.options.ingestion)?;
        Ok(self.table.insert(table))
    }

    /// Load the file named by [`SessionOptions::input`].
    pub fn load_configured(&mut self) -> TableResult<&Table> {
        let path = self
            .options
            .input
            .clone()
            .ok_or_else(|| TableError::invalid_argument("no input file configured"))?;
        self.load(path)
    }

    /// Use an already loaded table.
    pub fn set_table(&mut self, table: Table) {
        self.table = Some(table);
    }

    /// The loaded table, if any.
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Run `action` against the loaded table.
    ///
    /// Selections leave the table untouched; [`Action::Sort`] reorders it in place.
    pub fn run(&mut self, action: &Action) -> TableResult<Outcome> {
        let table = self
            .table
            .as_mut()
            .ok_or_else(|| TableError::invalid_argument("no table loaded"))?;

        let rows = match action {
            Action::SelectByLandscapingZone(needle) => {
                select(Column::LandscapingZone.index(), table, needle)?
            }
            Action::SelectByLocationPlace(needle) => {
                select(Column::LocationPlace.index(), table, needle)?
            }
            Action::SelectByZoneAndPeriod { zone, period } => select_all(
                table,
                &[
                    FilterCriterion::new(Column::LandscapingZone, zone.as_str()),
                    FilterCriterion::new(Column::ProsperityPeriod, period.as_str()),
                ],
            )?,
            Action::Sort(order) => {
                sort(table, *order)?;
                return Ok(Outcome::Sorted(table.clone()));
            }
        };

        Ok(Outcome::Selection {
            headers: table.headers().to_vec(),
            rows,
        })
    }

    /// Write `outcome` to `<output_dir>/<file_name>.<ext>`, replacing any existing file.
    ///
    /// Returns the path written.
    pub fn save(&self, outcome: &Outcome, file_name: &str) -> TableResult<PathBuf> {
        validate_file_name(file_name)?;
        let format = self.options.output_format;
        let path = self
            .options
            .output_dir
            .join(format!("{file_name}.{}", format.file_extension()));
        save_rows(&path, outcome.headers(), outcome.rows(), format)?;
        Ok(path)
    }
}

//! Rendering and writing rows.
//!
//! The native output format is the input envelope itself (`"f0";"f1";...;"f9";`, one row per
//! line), so a saved selection can be loaded again. CSV and JSON exports are offered for other
//! tools.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{TableError, TableResult};
use crate::types::{Column, FIELD_DELIMITER, Row, field_of};

/// Shown in place of empty fields by [`format_display_row`].
pub const EMPTY_FIELD_PLACEHOLDER: &str = "<empty>";

/// Separator between fields in console output.
pub const DISPLAY_SEPARATOR: &str = " | ";

/// Characters rejected in output file names on any supported platform.
const RESERVED_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Serialize a row in the input envelope: `"f0";"f1";...;"fN";`.
pub fn format_row(row: &[String]) -> String {
    format!("\"{}\";", row.join(FIELD_DELIMITER))
}

/// Human-readable row: fields joined by ` | `, empty fields replaced by a placeholder.
pub fn format_display_row(row: &[String]) -> String {
    row.iter()
        .map(|f| if f.is_empty() { EMPTY_FIELD_PLACEHOLDER } else { f.as_str() })
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}

/// Check that `name` can be used as an output file name (without extension).
///
/// # Errors
///
/// Returns [`TableError::InvalidArgument`] if the name is empty, `.`/`..`, or contains a path
/// separator, a reserved character or a control character.
pub fn validate_file_name(name: &str) -> TableResult<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(TableError::invalid_argument(format!(
            "'{name}' is not a usable file name"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_control() || RESERVED_FILE_NAME_CHARS.contains(c))
    {
        return Err(TableError::invalid_argument(format!(
            "file name contains forbidden character {c:?}"
        )));
    }
    Ok(())
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Same envelope as the input file.
    #[default]
    Envelope,
    /// Comma-separated values with the English header as header record.
    Csv,
    /// Array of objects keyed by English column names.
    Json,
}

impl OutputFormat {
    /// File extension written by [`crate::session::Session::save`].
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Envelope => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Envelope => "envelope",
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "envelope" | "txt" => Ok(Self::Envelope),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(TableError::invalid_argument(format!(
                "unknown output format '{other}' (expected envelope, csv or json)"
            ))),
        }
    }
}

#[derive(Serialize)]
struct RecordView<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "LatinName")]
    latin_name: &'a str,
    #[serde(rename = "Photo")]
    photo: &'a str,
    #[serde(rename = "LandscapingZone")]
    landscaping_zone: &'a str,
    #[serde(rename = "ProsperityPeriod")]
    prosperity_period: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "LocationPlace")]
    location_place: &'a str,
    #[serde(rename = "ViewForm")]
    view_form: &'a str,
    global_id: &'a str,
}

impl<'a> RecordView<'a> {
    fn from_row(row: &'a [String]) -> TableResult<Self> {
        let f = |c: Column| field_of(row, c.index());
        Ok(Self {
            id: f(Column::Id)?,
            name: f(Column::Name)?,
            latin_name: f(Column::LatinName)?,
            photo: f(Column::Photo)?,
            landscaping_zone: f(Column::LandscapingZone)?,
            prosperity_period: f(Column::ProsperityPeriod)?,
            description: f(Column::Description)?,
            location_place: f(Column::LocationPlace)?,
            view_form: f(Column::ViewForm)?,
            global_id: f(Column::GlobalId)?,
        })
    }
}

/// Write `headers` followed by `rows` to `writer` in `format`.
///
/// JSON output omits the header rows (column names become object keys); CSV output keeps only
/// the first header row as its header record.
pub fn write_rows<W: Write>(
    mut writer: W,
    headers: &[Row],
    rows: &[Row],
    format: OutputFormat,
) -> TableResult<()> {
    match format {
        OutputFormat::Envelope => {
            for row in headers.iter().chain(rows) {
                writeln!(writer, "{}", format_row(row))?;
            }
            writer.flush()?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(writer);
            if let Some(header) = headers.first() {
                wtr.write_record(header)?;
            }
            for row in rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => {
            let records = rows
                .iter()
                .map(|r| RecordView::from_row(r))
                .collect::<TableResult<Vec<_>>>()?;
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Create (or truncate) `path` and write `headers` followed by `rows` into it.
///
/// Envelope output is appended line by line to the emptied file; CSV and JSON go through
/// [`write_rows`].
pub fn save_rows(
    path: impl AsRef<Path>,
    headers: &[Row],
    rows: &[Row],
    format: OutputFormat,
) -> TableResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    match format {
        OutputFormat::Envelope => {
            drop(file);
            append_lines(path, headers.iter().chain(rows).map(|r| format_row(r)))
        }
        OutputFormat::Csv | OutputFormat::Json => {
            write_rows(BufWriter::new(file), headers, rows, format)
        }
    }
}

/// Append `lines` to `path`, one per line, creating the file if needed.
pub fn append_lines<I, S>(path: impl AsRef<Path>, lines: I) -> TableResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

//! Core data model types for the plant registry table.
//!
//! A loaded file becomes a [`Table`] of string rows. The first [`HEADER_ROWS`] rows are the header
//! lines described by a [`Schema`]; everything after them is data.

use serde::Serialize;

use crate::error::{TableError, TableResult};

/// Number of fields in every row.
pub const COLUMN_COUNT: usize = 10;

/// Number of header rows at the top of a table.
pub const HEADER_ROWS: usize = 2;

/// Literal separating two quoted fields: `";"`.
pub const FIELD_DELIMITER: &str = "\";\"";

/// A single row: exactly [`COLUMN_COUNT`] fields when well-formed.
pub type Row = Vec<String>;

/// Language of a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    /// Row 0: identifier-style English names.
    English,
    /// Row 1: Russian display names.
    Russian,
}

/// The ten fixed columns of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Id,
    Name,
    LatinName,
    Photo,
    LandscapingZone,
    ProsperityPeriod,
    Description,
    LocationPlace,
    ViewForm,
    GlobalId,
}

impl Column {
    /// All columns in file order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Id,
        Column::Name,
        Column::LatinName,
        Column::Photo,
        Column::LandscapingZone,
        Column::ProsperityPeriod,
        Column::Description,
        Column::LocationPlace,
        Column::ViewForm,
        Column::GlobalId,
    ];

    /// Zero-based position of the column in a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Header text of this column in the given language.
    pub fn name(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Column::Id => "ID",
                Column::Name => "Name",
                Column::LatinName => "LatinName",
                Column::Photo => "Photo",
                Column::LandscapingZone => "LandscapingZone",
                Column::ProsperityPeriod => "ProsperityPeriod",
                Column::Description => "Description",
                Column::LocationPlace => "LocationPlace",
                Column::ViewForm => "ViewForm",
                Column::GlobalId => "global_id",
            },
            Language::Russian => match self {
                Column::Id => "Код",
                Column::Name => "Название",
                Column::LatinName => "Латинское название",
                Column::Photo => "Фотография",
                Column::LandscapingZone => "Ландшафтная зона",
                Column::ProsperityPeriod => "Период цветения",
                Column::Description => "Описание",
                Column::LocationPlace => "Расположение в парке",
                Column::ViewForm => "Форма осмотра",
                Column::GlobalId => "global_id",
            },
        }
    }
}

/// One expected header line: its language and the column names in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    /// Language the names are written in.
    pub language: Language,
    /// Column names in file order.
    pub columns: Vec<String>,
}

impl HeaderLine {
    /// Create a header line from column names.
    pub fn new(language: Language, columns: Vec<String>) -> Self {
        Self { language, columns }
    }

    /// Header line listing every [`Column`] in `language`.
    pub fn for_language(language: Language) -> Self {
        Self::new(
            language,
            Column::ALL
                .iter()
                .map(|c| c.name(language).to_string())
                .collect(),
        )
    }
}

/// Structured description of the header rows a file must start with.
///
/// Header line `i` of the schema is compared against row `i` of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Expected header lines, in row order.
    pub headers: Vec<HeaderLine>,
}

impl Schema {
    /// Create a schema from header lines.
    pub fn new(headers: Vec<HeaderLine>) -> Self {
        Self { headers }
    }

    /// The registry schema: English header on row 0, Russian header on row 1.
    pub fn registry() -> Self {
        Self::new(vec![
            HeaderLine::for_language(Language::English),
            HeaderLine::for_language(Language::Russian),
        ])
    }

    /// Number of columns per row (taken from the first header line).
    pub fn column_count(&self) -> usize {
        self.headers
            .first()
            .map(|h| h.columns.len())
            .unwrap_or(COLUMN_COUNT)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::registry()
    }
}

/// Direction of the LatinName sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Case-sensitive ordinal, smallest first.
    #[default]
    Ascending,
    /// Case-insensitive ordinal, largest first.
    Descending,
}

impl SortOrder {
    /// Map a `descending` flag to an order.
    pub fn from_descending(descending: bool) -> Self {
        if descending { Self::Descending } else { Self::Ascending }
    }
}

/// Case-insensitive substring match on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriterion {
    /// Zero-based column index, `0..COLUMN_COUNT`.
    pub column: usize,
    /// Non-empty substring to look for.
    pub needle: String,
}

impl FilterCriterion {
    /// Create a criterion for `column`.
    pub fn new(column: Column, needle: impl Into<String>) -> Self {
        Self {
            column: column.index(),
            needle: needle.into(),
        }
    }
}

/// In-memory table: header rows followed by data rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Table {
    /// Row-major field storage.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows (headers included).
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows, headers included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header rows (at most [`HEADER_ROWS`]).
    pub fn headers(&self) -> &[Row] {
        &self.rows[..HEADER_ROWS.min(self.rows.len())]
    }

    /// Rows after the headers.
    pub fn data_rows(&self) -> &[Row] {
        &self.rows[HEADER_ROWS.min(self.rows.len())..]
    }

    /// Number of data rows.
    pub fn data_row_count(&self) -> usize {
        self.data_rows().len()
    }

    /// Field `column` of row `row`.
    ///
    /// A row shorter than expected is reported as a format error rather than a panic.
    pub fn field(&self, row: usize, column: usize) -> TableResult<&str> {
        let r = self
            .rows
            .get(row)
            .ok_or_else(|| TableError::invalid_argument(format!("row {row} out of range")))?;
        field_of(r, column)
    }
}

/// Field `column` of `row`, or a format error naming the actual field count.
pub(crate) fn field_of(row: &[String], column: usize) -> TableResult<&str> {
    row.get(column).map(String::as_str).ok_or_else(|| {
        TableError::format(format!(
            "row has {} fields, column {column} requested",
            row.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_indexes_follow_file_order() {
        assert_eq!(Column::Id.index(), 0);
        assert_eq!(Column::LatinName.index(), 2);
        assert_eq!(Column::LandscapingZone.index(), 4);
        assert_eq!(Column::LocationPlace.index(), 7);
        assert_eq!(Column::GlobalId.index(), 9);
        assert_eq!(Column::from_index(5), Some(Column::ProsperityPeriod));
        assert_eq!(Column::from_index(COLUMN_COUNT), None);
    }

    #[test]
    fn headers_and_data_rows_split_at_two() {
        let row = |s: &str| vec![s.to_string(); COLUMN_COUNT];
        let table = Table::new(vec![row("h0"), row("h1"), row("d0"), row("d1")]);
        assert_eq!(table.headers().len(), 2);
        assert_eq!(table.data_row_count(), 2);
        assert_eq!(table.data_rows()[0][0], "d0");

        let headers_only = Table::new(vec![row("h0")]);
        assert_eq!(headers_only.headers().len(), 1);
        assert!(headers_only.data_rows().is_empty());
    }

    #[test]
    fn short_row_field_access_is_format_error() {
        let table = Table::new(vec![vec!["only".to_string()]]);
        assert_eq!(table.field(0, 0).unwrap(), "only");
        assert!(matches!(table.field(0, 2), Err(TableError::Format { .. })));
        assert!(matches!(
            table.field(5, 0),
            Err(TableError::InvalidArgument { .. })
        ));
    }
}

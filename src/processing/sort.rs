//! In-place LatinName sort.
//!
//! Keys are the LatinName field with punctuation removed. Ascending order compares keys by code
//! point (so `Z` sorts before `a`); descending order compares them case-insensitively. Header rows
//! keep their positions.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{TableError, TableResult};
use crate::types::{Column, HEADER_ROWS, Language, Row, SortOrder, Table, field_of};

/// Column the sort keys are taken from.
pub const SORT_COLUMN: Column = Column::LatinName;

/// Sort the data rows of `table` by LatinName.
///
/// The order among equal keys is unspecified.
///
/// # Errors
///
/// - [`TableError::InvalidArgument`] if the table has no data rows, or if two or more data rows
///   exist and one of them has an empty LatinName.
/// - [`TableError::Format`] if a data row is too short to have a LatinName.
///
/// The table is left unchanged when an error is returned.
pub fn sort(table: &mut Table, order: SortOrder) -> TableResult<()> {
    if table.row_count() <= HEADER_ROWS {
        return Err(TableError::invalid_argument(format!(
            "table has {} rows, nothing to sort",
            table.row_count()
        )));
    }
    if table.data_row_count() < 2 {
        return Ok(());
    }

    let keys = table
        .data_rows()
        .iter()
        .enumerate()
        .map(|(i, row)| sort_key(row, i + HEADER_ROWS))
        .collect::<TableResult<Vec<String>>>()?;

    let rows: Vec<Row> = table.rows.drain(HEADER_ROWS..).collect();
    let mut keyed: Vec<(String, Row)> = keys.into_iter().zip(rows).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, order));
    table.rows.extend(keyed.into_iter().map(|(_, row)| row));

    Ok(())
}

/// Sort by a `descending` flag, returning the table for chaining.
pub fn sort_by_value(table: &mut Table, descending: bool) -> TableResult<&mut Table> {
    sort(table, SortOrder::from_descending(descending))?;
    Ok(table)
}

/// Ordering of two (already stripped) keys under `order`.
///
/// `Ordering::Less` means `a` is placed before `b`.
pub fn compare_keys(a: &str, b: &str, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => compare_ignore_case(b, a),
    }
}

/// Ordinal comparison after mapping every char to its single-char uppercase form.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}

/// Unicode general category `P` (connector, dash, open, close, initial/final quote and other
/// punctuation). Symbols such as `$`, `+` or `|` fall outside it.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}").expect("punctuation class is a valid pattern"));

/// Copy of `input` without punctuation characters.
pub fn strip_punctuation(input: &str) -> String {
    PUNCTUATION.replace_all(input, "").into_owned()
}

/// Whether `c` is in the Unicode punctuation category.
pub fn is_punctuation(c: char) -> bool {
    let mut buf = [0u8; 4];
    PUNCTUATION.is_match(c.encode_utf8(&mut buf))
}

fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn sort_key(row: &[String], row_idx: usize) -> TableResult<String> {
    let value = field_of(row, SORT_COLUMN.index())?;
    if value.is_empty() {
        return Err(TableError::invalid_argument(format!(
            "row {row_idx} has an empty {}",
            SORT_COLUMN.name(Language::English)
        )));
    }
    Ok(strip_punctuation(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_latin_names(names: &[&str]) -> Table {
        let mut rows = vec![
            vec!["ID".to_string(); 10],
            vec!["Код".to_string(); 10],
        ];
        for (i, name) in names.iter().enumerate() {
            let mut row = vec![String::new(); 10];
            row[0] = (i + 1).to_string();
            row[2] = name.to_string();
            rows.push(row);
        }
        Table::new(rows)
    }

    fn latin_names(table: &Table) -> Vec<&str> {
        table.data_rows().iter().map(|r| r[2].as_str()).collect()
    }

    #[test]
    fn ascending_is_case_sensitive_ordinal() {
        let mut table = table_with_latin_names(&["Quercus", "acer", "Betula"]);
        sort(&mut table, SortOrder::Ascending).unwrap();
        assert_eq!(latin_names(&table), vec!["Betula", "Quercus", "acer"]);
        assert_eq!(table.rows[0][0], "ID");
        assert_eq!(table.rows[1][0], "Код");
    }

    #[test]
    fn descending_ignores_case() {
        let mut table = table_with_latin_names(&["Quercus", "acer", "Betula"]);
        sort(&mut table, SortOrder::Descending).unwrap();
        assert_eq!(latin_names(&table), vec!["Quercus", "Betula", "acer"]);
    }

    #[test]
    fn punctuation_is_ignored_in_keys() {
        let mut table = table_with_latin_names(&["'Zelkova'", "(Abies)", "Malus, sp."]);
        sort(&mut table, SortOrder::Ascending).unwrap();
        assert_eq!(latin_names(&table), vec!["(Abies)", "Malus, sp.", "'Zelkova'"]);
    }

    #[test]
    fn headers_only_table_is_invalid_argument() {
        let mut table = table_with_latin_names(&[]);
        assert!(matches!(
            sort(&mut table, SortOrder::Ascending),
            Err(TableError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn single_data_row_is_left_alone() {
        let mut table = table_with_latin_names(&[""]);
        sort(&mut table, SortOrder::Descending).unwrap();
        assert_eq!(table.data_row_count(), 1);
    }

    #[test]
    fn empty_key_fails_without_reordering() {
        let mut table = table_with_latin_names(&["Quercus", "", "Acer"]);
        let before = table.clone();
        let err = sort(&mut table, SortOrder::Ascending).unwrap_err();
        assert!(err.to_string().contains("row 3"));
        assert_eq!(table, before);
    }

    #[test]
    fn strip_punctuation_keeps_symbols_and_letters() {
        assert_eq!(strip_punctuation("«Acer» pl.-x_y"), "Acer plxy");
        assert_eq!(strip_punctuation("a+b$c|d"), "a+b$c|d");
        assert_eq!(strip_punctuation("Salix — alba"), "Salix  alba");
    }

    #[test]
    fn strip_punctuation_covers_non_latin_scripts() {
        let marks = [
            '\u{FE63}', '\u{FE68}', '\u{FE6A}', '\u{FE6B}', '\u{3030}', '\u{303D}', '\u{30A0}',
            '\u{30FB}', '\u{2E52}', '\u{2E5D}', '\u{2329}', '\u{232A}', '\u{2768}', '\u{2775}',
            '\u{27E6}', '\u{27EF}', '\u{2983}', '\u{2998}', '\u{060C}', '\u{0964}', '\u{05BE}',
        ];
        for mark in marks {
            assert!(is_punctuation(mark), "U+{:04X}", mark as u32);
            assert_eq!(strip_punctuation(&format!("a{mark}b")), "ab", "U+{:04X}", mark as u32);
        }
        assert!(!is_punctuation('~'));
        assert!(!is_punctuation('Ж'));
    }

    #[test]
    fn wide_hyphen_prefix_does_not_affect_order() {
        let mut table = table_with_latin_names(&["Betula", "\u{FE63}Acer"]);
        sort(&mut table, SortOrder::Ascending).unwrap();
        assert_eq!(latin_names(&table), vec!["\u{FE63}Acer", "Betula"]);
    }

    #[test]
    fn compare_ignore_case_folds_cyrillic_too() {
        assert_eq!(compare_ignore_case("ёлка", "ЁЛКА"), Ordering::Equal);
        assert_eq!(compare_ignore_case("acer", "Betula"), Ordering::Less);
        assert_eq!(compare_keys("acer", "Betula", SortOrder::Ascending), Ordering::Greater);
        assert_eq!(compare_keys("acer", "Betula", SortOrder::Descending), Ordering::Greater);
    }

    #[test]
    fn sort_by_value_returns_table() {
        let mut table = table_with_latin_names(&["b", "a"]);
        let sorted = sort_by_value(&mut table, false).unwrap();
        assert_eq!(latin_names(sorted), vec!["a", "b"]);
    }
}

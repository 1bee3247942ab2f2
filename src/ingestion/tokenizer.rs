//! Logical row reconstruction.
//!
//! Quoted fields may contain line breaks, so rows cannot be recovered by splitting on newlines.
//! Instead the whole file is flattened into one string (see [`merge_lines`]) and rows are rebuilt
//! by counting delimiter-separated tokens: every `expected_columns` tokens form one row.

use crate::error::{TableError, TableResult};

/// Join raw file lines into the newline-free text that [`form_entries`] expects.
///
/// Lines are concatenated with no separator; any stray `\r`/`\n` inside a line is dropped and a
/// leading byte-order mark is removed.
pub fn merge_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged = String::new();
    for line in lines {
        merged.extend(line.as_ref().chars().filter(|c| !matches!(c, '\r' | '\n')));
    }
    match merged.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => merged,
    }
}

/// Rebuild logical rows from flattened text.
///
/// `input` is split on every literal occurrence of `delimiter`, and tokens are grouped in chunks
/// of `expected_columns`. Each chunk is rejoined with the delimiter; every chunk but the first
/// gets back its leading `"` and every chunk but the last gets back its trailing `";`, so each
/// returned row reads `"f0";"f1";...;"fN";`.
///
/// # Errors
///
/// - [`TableError::Format`] if `input` or `delimiter` is empty, or if the token count is not a
///   multiple of `expected_columns` (a truncated file or a stray delimiter).
/// - [`TableError::InvalidArgument`] if `expected_columns` is zero.
pub fn form_entries(
    input: &str,
    delimiter: &str,
    expected_columns: usize,
) -> TableResult<Vec<String>> {
    if input.is_empty() || delimiter.is_empty() {
        return Err(TableError::format("input text or delimiter is empty"));
    }
    if expected_columns == 0 {
        return Err(TableError::invalid_argument(
            "expected column count must be > 0",
        ));
    }

    let parts: Vec<&str> = input.split(delimiter).collect();
    if parts.len() % expected_columns != 0 {
        return Err(TableError::format(format!(
            "found {} delimited tokens, which is not a multiple of {expected_columns} columns",
            parts.len()
        )));
    }

    let entry_count = parts.len() / expected_columns;
    let entries = parts
        .chunks(expected_columns)
        .enumerate()
        .map(|(i, chunk)| {
            let mut entry = String::new();
            if i != 0 {
                entry.push('"');
            }
            entry.push_str(&chunk.join(delimiter));
            if i != entry_count - 1 {
                entry.push_str("\";");
            }
            entry
        })
        .collect();

    Ok(entries)
}

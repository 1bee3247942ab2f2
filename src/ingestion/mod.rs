//! Loading entrypoints and the parsing pipeline.
//!
//! Most callers should use [`read_table_from_path`] (from [`reader`]) which:
//!
//! - flattens the file and rebuilds logical rows by column count ([`tokenizer`])
//! - validates both header rows against a [`crate::types::Schema`] ([`header`])
//! - splits rows into fields ([`splitter`])
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]

pub mod header;
pub mod observability;
pub mod reader;
pub mod splitter;
pub mod tokenizer;

pub use header::{validate_headers, MIN_ROWS};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver,
};
pub use reader::{
    read_table_from_lines, read_table_from_path, read_table_from_str, read_table_observed, IngestionOptions,
};
pub use splitter::{split_row, split_rows};
pub use tokenizer::{form_entries, merge_lines};

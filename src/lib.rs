//! `flora-table` loads the park plant registry export into an in-memory [`types::Table`], selects
//! and sorts its rows, and writes results back out.
//!
//! The primary entrypoint is [`ingestion::read_table_from_path`].
//!
//! ## Input format
//!
//! Every field is wrapped in double quotes and followed by `;`, so a row reads
//! `"f0";"f1";...;"f9";`. Fields may contain line breaks, which is why rows are rebuilt by counting
//! fields rather than by splitting on newlines. Every row has exactly ten columns:
//!
//! `ID`, `Name`, `LatinName`, `Photo`, `LandscapingZone`, `ProsperityPeriod`, `Description`,
//! `LocationPlace`, `ViewForm`, `global_id`
//!
//! The first two rows are the header in English and in Russian ([`types::Schema::registry`]). Any
//! deviation from them is an error.
//!
//! ## Quick example: load, select, sort
//!
//! ```no_run
//! use flora_table::ingestion::{read_table_from_path, IngestionOptions};
//! use flora_table::processing::{select, sort};
//! use flora_table::types::{Column, SortOrder};
//!
//! # fn main() -> Result<(), flora_table::TableError> {
//! let mut table = read_table_from_path("plants.csv", &IngestionOptions::default())?;
//!
//! let north = select(Column::LandscapingZone.index(), &table, "north")?;
//! println!("{} plants in the north zone", north.len());
//!
//! sort(&mut table, SortOrder::Descending)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: tokenizer, header validation, row splitting and the path-based loader
//! - [`types`]: schema, columns and the in-memory table
//! - [`processing`]: selection and sorting
//! - [`export`]: envelope/display/CSV/JSON output and file-name validation
//! - [`session`]: configuration plus the loaded table, and the menu actions
//! - [`console`]: the interactive menu loop
//! - [`error`]: error type shared by all of the above
//!
//! ### Sort order
//!
//! [`types::SortOrder::Ascending`] compares LatinName by code point, so capitals come before
//! lowercase letters. [`types::SortOrder::Descending`] ignores case. Punctuation is removed from
//! both sides before comparing.

pub mod console;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod processing;
pub mod session;
pub mod types;

pub use error::{TableError, TableResult};

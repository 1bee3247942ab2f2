//! In-memory table operations.
//!
//! The processing layer operates on [`crate::types::Table`] values produced by ingestion. Header
//! rows (0 and 1) never take part in selection or sorting.
//!
//! Currently implemented:
//!
//! - [`select()`]: case-insensitive substring filter on one column
//! - [`select_all()`]: intersection of several filters
//! - [`sort()`]: in-place LatinName sort, ascending or descending
//!
//! ## Example: select → sort
//!
//! ```rust
//! use flora_table::processing::{select, sort};
//! use flora_table::types::{Column, SortOrder, Table};
//!
//! let row = |id: &str, latin: &str, zone: &str| -> Vec<String> {
//!     let mut r = vec![String::new(); 10];
//!     r[0] = id.to_string();
//!     r[2] = latin.to_string();
//!     r[4] = zone.to_string();
//!     r
//! };
//! let mut table = Table::new(vec![
//!     row("ID", "LatinName", "LandscapingZone"),
//!     row("Код", "Латинское название", "Ландшафтная зона"),
//!     row("1", "Quercus", "North"),
//!     row("2", "acer", "South"),
//!     row("3", "Betula", "north"),
//! ]);
//!
//! let north = select(Column::LandscapingZone.index(), &table, "NORTH").unwrap();
//! assert_eq!(north.len(), 2);
//!
//! sort(&mut table, SortOrder::Ascending).unwrap();
//! let names: Vec<&str> = table.data_rows().iter().map(|r| r[2].as_str()).collect();
//! assert_eq!(names, ["Betula", "Quercus", "acer"]);
//! ```

pub mod selection;
pub mod sort;

pub use selection::{intersect, select, select_all};
pub use sort::{compare_ignore_case, compare_keys, sort, sort_by_value, strip_punctuation};

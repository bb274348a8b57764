//! # thsort
//!
//! `thsort` makes the table of a rendered license report sortable: clicking a
//! column header re-orders the body rows by that column's text.
//!
//! Sorting is ascending, case-insensitive and purely textual (`"10"` sorts
//! before `"9"`). The table is read into a snapshot of cell texts, the
//! snapshot is sorted, and the texts are written back into the existing cells,
//! so row and cell nodes keep their identity, attributes and listeners.
//!
//! ## Key Features
//!
//! - **Environment agnostic**: The [`TableAccess`] trait is the only way the
//!   sorting code touches the table. The browser binding in `web` is one
//!   implementation; tests use an in-memory one.
//! - **Stable**: Rows with equal keys keep their relative order, so repeated
//!   clicks are reproducible.
//! - **Forgiving**: Rows too short to have the sorted column stay where they
//!   are instead of failing the sort.
//!
//! ## Usage
//!
//! ### Snapshots
//!
//! ```rust
//! use thsort::sort_rows;
//!
//! let mut rows = vec![
//!     vec!["Banana".to_string(), "2".to_string()],
//!     vec!["apple".to_string(), "1".to_string()],
//!     vec!["Cherry".to_string(), "3".to_string()],
//! ];
//! sort_rows(&mut rows, 0);
//!
//! assert_eq!(rows[0][0], "apple");
//! assert_eq!(rows[1][0], "Banana");
//! assert_eq!(rows[2][0], "Cherry");
//! ```
//!
//! ### Tables
//!
//! Implement [`TableAccess`] for a handle to the table, then either sort it
//! directly with [`sort_table`] or hand it to [`SortableTable::attach`] to sort
//! on header clicks.
//!
//! In the browser the compiled module binds the document's table on load.

pub mod algo;
pub mod binder;
pub mod core;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use crate::algo::{extract_rows, sort_indices, sort_rows, sort_table, write_rows};
pub use crate::binder::SortableTable;
pub use crate::core::{RowSnapshot, TableAccess, TableSnapshot};
pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::algo::{extract_rows, sort_indices, sort_rows, sort_table, write_rows};
    pub use crate::binder::SortableTable;
    pub use crate::core::{RowSnapshot, TableAccess, TableSnapshot};
    pub use crate::error::{Error, Result};
}

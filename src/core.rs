//! Core traits and types for thsort.
//!
//! This module defines:
//! - [`TableAccess`]: The capability interface a UI tree binding implements.
//! - [`RowSnapshot`] / [`TableSnapshot`]: The transient text copy of a table body.
//! - SortKey: Internal index/prefix-cache entry used while ordering rows.

use crate::error::Result;
use std::cmp::Ordering;

/// Size of the key prefix cached in a sort key.
pub const KEY_PREFIX_SIZE: usize = 8;

/// Cell texts of one body row, in document order.
pub type RowSnapshot = Vec<String>;

/// All row snapshots of a table body, index-aligned with the body's rows.
pub type TableSnapshot = Vec<RowSnapshot>;

/// Minimal view of a rendered table.
///
/// The sorting code only ever reaches the table through this trait, so any
/// environment that can enumerate header cells, body rows and row cells, and
/// read/write a cell's visible text, can be made sortable. Handles are expected
/// to be cheap to obtain and to keep referring to the same node across calls.
///
/// # Examples
///
/// A plain grid kept in memory:
///
/// ```
/// use std::cell::RefCell;
/// use thsort::core::TableAccess;
/// use thsort::error::{Error, Result};
///
/// struct Grid {
///     headers: Vec<String>,
///     rows: RefCell<Vec<Vec<String>>>,
/// }
///
/// impl TableAccess for Grid {
///     type Row = usize;
///     type Cell = (usize, usize);
///
///     fn header_cells(&self) -> Result<Vec<(usize, usize)>> {
///         Ok((0..self.headers.len()).map(|col| (usize::MAX, col)).collect())
///     }
///
///     fn body_rows(&self) -> Result<Vec<usize>> {
///         Ok((0..self.rows.borrow().len()).collect())
///     }
///
///     fn cells_of(&self, row: &usize) -> Result<Vec<(usize, usize)>> {
///         Ok((0..self.rows.borrow()[*row].len()).map(|col| (*row, col)).collect())
///     }
///
///     fn text(&self, &(row, col): &(usize, usize)) -> Result<String> {
///         Ok(self.rows.borrow()[row][col].clone())
///     }
///
///     fn set_text(&self, &(row, col): &(usize, usize), text: &str) -> Result<()> {
///         self.rows.borrow_mut()[row][col] = text.to_owned();
///         Ok(())
///     }
///
///     fn on_click(&self, _cell: &(usize, usize), _handler: Box<dyn FnMut()>) -> Result<()> {
///         Err(Error::Dom("grid has no event loop".into()))
///     }
/// }
///
/// let grid = Grid {
///     headers: vec!["Name".into()],
///     rows: RefCell::new(vec![vec!["b".into()], vec!["a".into()]]),
/// };
/// thsort::sort_table(&grid, 0).unwrap();
/// assert_eq!(grid.rows.borrow()[0][0], "a");
/// ```
pub trait TableAccess {
    /// Handle to one body row.
    type Row;
    /// Handle to one header or body cell.
    type Cell;

    /// Header cells in document order; position is the column index.
    fn header_cells(&self) -> Result<Vec<Self::Cell>>;

    /// Body rows in document order.
    fn body_rows(&self) -> Result<Vec<Self::Row>>;

    /// Cells of `row` in document order.
    fn cells_of(&self, row: &Self::Row) -> Result<Vec<Self::Cell>>;

    /// The user-visible text of `cell`.
    fn text(&self, cell: &Self::Cell) -> Result<String>;

    /// Replaces the visible text of `cell`, keeping the node itself.
    fn set_text(&self, cell: &Self::Cell, text: &str) -> Result<()>;

    /// Registers `handler` to run whenever `cell` is clicked.
    fn on_click(&self, cell: &Self::Cell, handler: Box<dyn FnMut()>) -> Result<()>;
}

/// Row index plus its lowercased sort key and a cached big-endian prefix of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SortKey {
    pub index: usize,
    pub cache: u64,
    pub key: String,
}

impl SortKey {
    pub fn new(index: usize, text: &str) -> Self {
        let key = text.to_lowercase();
        let cache = key_prefix(key.as_bytes());
        SortKey { index, cache, key }
    }

    /// Code-point order of the keys. Most pairs are settled by the cached
    /// prefix; the full keys are only loaded when the prefixes tie.
    #[inline(always)]
    pub fn compare(&self, other: &SortKey) -> Ordering {
        if self.cache != other.cache {
            return self.cache.cmp(&other.cache);
        }
        self.key.as_bytes().cmp(other.key.as_bytes())
    }
}

/// First [`KEY_PREFIX_SIZE`] bytes of `key` as a big-endian `u64`, zero padded.
///
/// Zero padding keeps the prefix order consistent with byte order: a shorter
/// key can only tie with a longer one, never overtake it.
#[inline(always)]
fn key_prefix(key: &[u8]) -> u64 {
    let mut buf = [0u8; KEY_PREFIX_SIZE];
    let n = key.len().min(KEY_PREFIX_SIZE);
    buf[..n].copy_from_slice(&key[..n]);
    u64::from_be_bytes(buf)
}

//! Header click binding.

use crate::algo::sort_table;
use crate::core::TableAccess;
use crate::error::Result;
use tracing::{debug, error};

/// A table whose header cells sort it when clicked.
///
/// Owns a handle to the table. Each registered handler keeps its own clone of
/// that handle, so `T` should be a cheap, shared reference to the underlying
/// table (a DOM node, an `Rc`, ...).
#[derive(Clone, Debug)]
pub struct SortableTable<T> {
    table: T,
}

impl<T> SortableTable<T>
where
    T: TableAccess + Clone + 'static,
{
    pub fn new(table: T) -> Self {
        SortableTable { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Registers one click handler per header cell and returns how many were bound.
    ///
    /// Clicking the header at position `i` sorts the whole table by column `i`.
    /// Call this once per page; calling it again binds a second set of handlers.
    /// A table without header cells binds nothing.
    ///
    /// A sort that fails inside a handler is logged and abandoned. It has no
    /// effect on later clicks.
    pub fn attach(&self) -> Result<usize> {
        let headers = self.table.header_cells()?;
        for (column, header) in headers.iter().enumerate() {
            let table = self.table.clone();
            self.table.on_click(
                header,
                Box::new(move || {
                    if let Err(err) = sort_table(&table, column) {
                        error!(column, %err, "sorting table failed");
                    }
                }),
            )?;
        }
        debug!(columns = headers.len(), "header click handlers bound");
        Ok(headers.len())
    }
}

//! Snapshot extraction, ordering and write-back.
//!
//! A sort is one read-sort-write cycle over a [`TableAccess`]:
//! - [`extract_rows`] copies the body's cell texts into a [`TableSnapshot`].
//! - [`sort_rows`] orders the snapshot by one column, ascending and case-insensitive.
//! - [`write_rows`] puts the texts back into the same cells.
//!
//! The main entry point is [`sort_table`].

use crate::core::{RowSnapshot, SortKey, TableAccess, TableSnapshot};
use crate::error::Result;
use tracing::{debug, instrument, trace};

/// Reads the table body into a snapshot.
///
/// One [`RowSnapshot`] per body row, each holding that row's cell texts in
/// document order. Rows without cells give empty snapshots.
pub fn extract_rows<T: TableAccess + ?Sized>(table: &T) -> Result<TableSnapshot> {
    table
        .body_rows()?
        .iter()
        .map(|row| -> Result<RowSnapshot> {
            table
                .cells_of(row)?
                .iter()
                .map(|cell| table.text(cell))
                .collect()
        })
        .collect()
}

/// Writes `snapshot` back into the table body in place.
///
/// Row `i`, cell `j` receives `snapshot[i][j]`. Cells past the end of their
/// snapshot row are left untouched, and no row or cell is created, removed
/// or moved.
pub fn write_rows<T: TableAccess + ?Sized>(table: &T, snapshot: &[RowSnapshot]) -> Result<()> {
    for (row, values) in table.body_rows()?.iter().zip(snapshot) {
        for (cell, value) in table.cells_of(row)?.iter().zip(values) {
            table.set_text(cell, value)?;
        }
    }
    Ok(())
}

/// Computes the order of `rows` when sorted by `column`.
///
/// This function does not modify the snapshot. It returns a `Vec<usize>` where
/// entry `i` is the index of the row that belongs at position `i`.
///
/// Rows with no cell at `column` have no key. They are never ordered after
/// another row and keep their current positions; the keyed rows are sorted
/// into the remaining positions. Keys compare by code point after lowercasing
/// and equal keys keep their relative order.
///
/// # Examples
///
/// ```
/// use thsort::sort_indices;
///
/// let rows = vec![
///     vec!["Banana".to_string()],
///     vec!["apple".to_string()],
///     vec!["Cherry".to_string()],
/// ];
///
/// assert_eq!(sort_indices(&rows, 0), vec![1, 0, 2]); // apple, Banana, Cherry
/// ```
pub fn sort_indices(rows: &[RowSnapshot], column: usize) -> Vec<usize> {
    let mut keys: Vec<SortKey> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| row.get(column).map(|text| SortKey::new(index, text)))
        .collect();

    let slots: Vec<usize> = keys.iter().map(|k| k.index).collect();
    trace!(
        keyed = keys.len(),
        unkeyed = rows.len() - keys.len(),
        "ordering rows"
    );

    keys.sort_by(SortKey::compare);

    let mut order: Vec<usize> = (0..rows.len()).collect();
    slots
        .into_iter()
        .zip(keys)
        .for_each(|(slot, key)| order[slot] = key.index);
    order
}

/// Sorts a snapshot in place by `column`.
///
/// Convenience wrapper for [`sort_indices`] which then applies the permutation.
///
/// # Examples
///
/// ```
/// use thsort::sort_rows;
///
/// let mut rows = vec![vec!["10".to_string()], vec!["9".to_string()]];
/// sort_rows(&mut rows, 0);
///
/// // Text order, not numeric order.
/// assert_eq!(rows, vec![vec!["10"], vec!["9"]]);
/// ```
pub fn sort_rows(rows: &mut [RowSnapshot], column: usize) {
    let order = sort_indices(rows, column);
    apply_permutation(rows, order);
}

/// Sorts the table by the column at `column`.
///
/// Extracts the body, orders it and writes it back. Every call sorts
/// ascending from whatever order the table is currently in.
#[instrument(level = "debug", skip(table))]
pub fn sort_table<T: TableAccess + ?Sized>(table: &T, column: usize) -> Result<()> {
    let mut rows = extract_rows(table)?;
    sort_rows(&mut rows, column);
    write_rows(table, &rows)?;
    debug!(rows = rows.len(), "table sorted");
    Ok(())
}

/// Moves `data[order[i]]` to position `i` by following permutation cycles.
fn apply_permutation<T>(data: &mut [T], mut order: Vec<usize>) {
    for start in 0..data.len() {
        let mut pos = start;
        while order[pos] != start {
            let src = order[pos];
            data.swap(pos, src);
            order[pos] = pos;
            pos = src;
        }
        order[pos] = pos;
    }
}

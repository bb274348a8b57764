#![allow(dead_code)]

use std::cell::{Cell as Counter, RefCell};
use std::rc::Rc;

use thsort::core::TableAccess;
use thsort::error::{Error, Result};

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

/// Handle to a cell of [`MemoryTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRef {
    Header(usize),
    Body(usize, usize),
}

/// A body cell. `id` stands in for node identity and never changes.
#[derive(Clone, Debug)]
struct CellNode {
    id: u64,
    text: String,
}

#[derive(Default)]
struct Dom {
    headers: Vec<String>,
    body: Option<Vec<Vec<CellNode>>>,
    listeners: Vec<(usize, Handler)>,
    next_id: u64,
}

/// In-memory table shared between clones, like a DOM node handle.
#[derive(Clone, Default)]
pub struct MemoryTable {
    dom: Rc<RefCell<Dom>>,
    writes: Rc<Counter<usize>>,
}

impl MemoryTable {
    pub fn new(headers: &[&str], rows: &[&[&str]]) -> Self {
        let table = MemoryTable::default();
        {
            let mut dom = table.dom.borrow_mut();
            dom.headers = headers.iter().map(|h| h.to_string()).collect();
            let mut body = Vec::with_capacity(rows.len());
            for row in rows {
                let mut cells = Vec::with_capacity(row.len());
                for text in row.iter() {
                    dom.next_id += 1;
                    cells.push(CellNode {
                        id: dom.next_id,
                        text: text.to_string(),
                    });
                }
                body.push(cells);
            }
            dom.body = Some(body);
        }
        table
    }

    pub fn from_owned(headers: &[&str], rows: &[Vec<String>]) -> Self {
        let borrowed: Vec<Vec<&str>> = rows
            .iter()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect();
        let slices: Vec<&[&str]> = borrowed.iter().map(Vec::as_slice).collect();
        MemoryTable::new(headers, &slices)
    }

    pub fn without_body(headers: &[&str]) -> Self {
        let table = MemoryTable::new(headers, &[]);
        table.dom.borrow_mut().body = None;
        table
    }

    pub fn remove_body(&self) -> Option<Vec<Vec<String>>> {
        let body = self.dom.borrow_mut().body.take()?;
        Some(
            body.into_iter()
                .map(|row| row.into_iter().map(|c| c.text).collect())
                .collect(),
        )
    }

    pub fn restore_body(&self, rows: &[Vec<String>]) {
        let other = MemoryTable::from_owned(&[], rows);
        let body = other.dom.borrow_mut().body.take();
        self.dom.borrow_mut().body = body;
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.dom
            .borrow()
            .body
            .iter()
            .flatten()
            .map(|row| row.iter().map(|c| c.text.clone()).collect())
            .collect()
    }

    pub fn column(&self, column: usize) -> Vec<String> {
        self.rows()
            .into_iter()
            .filter_map(|row| row.get(column).cloned())
            .collect()
    }

    pub fn cell_ids(&self) -> Vec<Vec<u64>> {
        self.dom
            .borrow()
            .body
            .iter()
            .flatten()
            .map(|row| row.iter().map(|c| c.id).collect())
            .collect()
    }

    /// Columns that have a click listener, in registration order.
    pub fn listener_columns(&self) -> Vec<usize> {
        self.dom
            .borrow()
            .listeners
            .iter()
            .map(|(column, _)| *column)
            .collect()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Runs every listener registered on header `column`.
    pub fn click(&self, column: usize) {
        let handlers: Vec<Handler> = self
            .dom
            .borrow()
            .listeners
            .iter()
            .filter(|(c, _)| *c == column)
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            let mut handler = handler.borrow_mut();
            (*handler)();
        }
    }
}

impl TableAccess for MemoryTable {
    type Row = usize;
    type Cell = CellRef;

    fn header_cells(&self) -> Result<Vec<CellRef>> {
        Ok((0..self.dom.borrow().headers.len())
            .map(CellRef::Header)
            .collect())
    }

    fn body_rows(&self) -> Result<Vec<usize>> {
        let dom = self.dom.borrow();
        let body = dom.body.as_ref().ok_or(Error::MissingBody)?;
        Ok((0..body.len()).collect())
    }

    fn cells_of(&self, row: &usize) -> Result<Vec<CellRef>> {
        let dom = self.dom.borrow();
        let cells = dom
            .body
            .as_ref()
            .and_then(|body| body.get(*row))
            .ok_or_else(|| Error::Dom(format!("row {row} detached")))?;
        Ok((0..cells.len()).map(|col| CellRef::Body(*row, col)).collect())
    }

    fn text(&self, cell: &CellRef) -> Result<String> {
        let dom = self.dom.borrow();
        let text = match *cell {
            CellRef::Header(col) => dom.headers.get(col).cloned(),
            CellRef::Body(row, col) => dom
                .body
                .as_ref()
                .and_then(|body| body.get(row))
                .and_then(|cells| cells.get(col))
                .map(|c| c.text.clone()),
        };
        text.ok_or_else(|| Error::Dom(format!("{cell:?} detached")))
    }

    fn set_text(&self, cell: &CellRef, text: &str) -> Result<()> {
        let mut dom = self.dom.borrow_mut();
        let slot = match *cell {
            CellRef::Header(col) => dom.headers.get_mut(col),
            CellRef::Body(row, col) => dom
                .body
                .as_mut()
                .and_then(|body| body.get_mut(row))
                .and_then(|cells| cells.get_mut(col))
                .map(|c| &mut c.text),
        }
        .ok_or_else(|| Error::Dom(format!("{cell:?} detached")))?;
        *slot = text.to_owned();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn on_click(&self, cell: &CellRef, handler: Box<dyn FnMut()>) -> Result<()> {
        let CellRef::Header(column) = *cell else {
            return Err(Error::Dom(format!("{cell:?} is not a header")));
        };
        self.dom
            .borrow_mut()
            .listeners
            .push((column, Rc::new(RefCell::new(handler))));
        Ok(())
    }
}

pub fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

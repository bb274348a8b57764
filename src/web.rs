//! Browser binding built on `web-sys`.
//!
//! [`DomTable`] implements [`TableAccess`] over a live `<table>` element. The
//! module's start hook finds the first table in the document and makes its
//! headers clickable, so including the generated script in a page is enough.

use std::rc::Rc;

use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::binder::SortableTable;
use crate::core::TableAccess;
use crate::error::{Error, Result};

/// CSS selectors used to locate the parts of the table.
///
/// The defaults match the markup of the rendered license report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// The table itself, queried on the document.
    pub table: String,
    /// Header cells, queried on the table.
    pub header_cells: String,
    /// The body, queried on the table.
    pub body: String,
    /// Rows, queried on the body.
    pub rows: String,
    /// Data cells, queried on each row.
    pub cells: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            table: "table".to_owned(),
            header_cells: "th".to_owned(),
            body: "tbody".to_owned(),
            rows: "tr".to_owned(),
            cells: "td".to_owned(),
        }
    }
}

/// A `<table>` element in the live document.
#[derive(Clone, Debug)]
pub struct DomTable {
    table: Element,
    selectors: Rc<Selectors>,
}

impl DomTable {
    pub fn new(table: Element, selectors: Selectors) -> Self {
        DomTable {
            table,
            selectors: Rc::new(selectors),
        }
    }

    /// Looks up the table in `document`. `Ok(None)` when there is none.
    pub fn find(document: &Document, selectors: Selectors) -> Result<Option<Self>> {
        let table = document.query_selector(&selectors.table).map_err(dom_err)?;
        Ok(table.map(|table| DomTable::new(table, selectors)))
    }

    fn body(&self) -> Result<Element> {
        self.table
            .query_selector(&self.selectors.body)
            .map_err(dom_err)?
            .ok_or(Error::MissingBody)
    }
}

impl TableAccess for DomTable {
    type Row = Element;
    type Cell = HtmlElement;

    fn header_cells(&self) -> Result<Vec<HtmlElement>> {
        self.table
            .query_selector_all(&self.selectors.header_cells)
            .map(html_elements)
            .map_err(dom_err)
    }

    fn body_rows(&self) -> Result<Vec<Element>> {
        let rows = self
            .body()?
            .query_selector_all(&self.selectors.rows)
            .map_err(dom_err)?;
        Ok((0..rows.length())
            .filter_map(|i| rows.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn cells_of(&self, row: &Element) -> Result<Vec<HtmlElement>> {
        row.query_selector_all(&self.selectors.cells)
            .map(html_elements)
            .map_err(dom_err)
    }

    fn text(&self, cell: &HtmlElement) -> Result<String> {
        Ok(cell.inner_text())
    }

    fn set_text(&self, cell: &HtmlElement, text: &str) -> Result<()> {
        cell.set_inner_text(text);
        Ok(())
    }

    fn on_click(&self, cell: &HtmlElement, handler: Box<dyn FnMut()>) -> Result<()> {
        let closure = Closure::wrap(handler);
        cell.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        // Listeners live as long as the page.
        closure.forget();
        Ok(())
    }
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn dom_err(err: JsValue) -> Error {
    Error::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Makes the headers of the document's table clickable.
///
/// Returns the number of header cells bound; zero when the page has no table.
pub fn bind_document(document: &Document, selectors: Selectors) -> Result<usize> {
    match DomTable::find(document, selectors)? {
        Some(table) => SortableTable::new(table).attach(),
        None => {
            debug!("no table in document, nothing to sort");
            Ok(0)
        }
    }
}

/// Binds the document's table with the default selectors.
///
/// Already done by the start hook; only call this when the module is loaded
/// before the table markup exists.
#[wasm_bindgen(js_name = attachToDocument)]
pub fn attach_to_document() -> std::result::Result<usize, JsValue> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(0);
    };
    bind_document(&document, Selectors::default())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen(start)]
pub fn start() {
    let _ = wasm_tracing::set_as_global_default();
    if let Err(err) = attach_to_document() {
        error!(?err, "binding table headers failed");
    }
}

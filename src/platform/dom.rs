//! DOM-backed cell renderer
//!
//! One `<div class="cell">` per grid cell inside the grid container, laid out
//! with CSS grid. Cells carry `data-index` for debugging in devtools.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::editor::Color;
use crate::renderer::Renderer;

pub struct DomRenderer {
    document: Document,
    container: HtmlElement,
    cells: Vec<HtmlElement>,
    cell_px: u32,
}

impl DomRenderer {
    pub fn new(document: Document, container: HtmlElement, cell_px: u32) -> Self {
        Self {
            document,
            container,
            cells: Vec::new(),
            cell_px,
        }
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    fn create_cell(&self, index: usize) -> Option<HtmlElement> {
        let cell: HtmlElement = self.document.create_element("div").ok()?.dyn_into().ok()?;
        cell.set_class_name("cell");
        let _ = cell.set_attribute("data-index", &index.to_string());
        let style = cell.style();
        let _ = style.set_property("width", &format!("{}px", self.cell_px));
        let _ = style.set_property("height", &format!("{}px", self.cell_px));
        let _ = style.set_property("background-color", Color::UNCOLORED);
        Some(cell)
    }
}

impl Renderer for DomRenderer {
    fn create_cells(&mut self, size: usize) {
        self.container.set_inner_html("");
        let track = format!("repeat({size}, {}px)", self.cell_px);
        let style = self.container.style();
        let _ = style.set_property("display", "inline-grid");
        let _ = style.set_property("grid-template-columns", &track);
        let _ = style.set_property("grid-template-rows", &track);

        self.cells.clear();
        self.cells.reserve(size * size);
        for index in 0..size * size {
            let Some(cell) = self.create_cell(index) else {
                log::error!("Failed to create cell {index}");
                return;
            };
            let _ = self.container.append_child(&cell);
            self.cells.push(cell);
        }
        log::debug!("Created {} cells", self.cells.len());
    }

    fn set_cell_color(&mut self, index: usize, color: &Color) {
        if let Some(cell) = self.cells.get(index) {
            let _ = cell.style().set_property("background-color", color.as_str());
        }
    }
}

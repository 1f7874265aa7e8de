//! Render sink for cell colors
//!
//! The editor never touches the view directly: it queues `RenderOp`s, and the
//! platform drains them into a `Renderer` (the DOM in the browser, a plain
//! buffer in tests and the native build).

use crate::editor::Color;

/// A single change the view must reflect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Throw away all cells and create `size * size` uncolored ones
    Rebuild { size: usize },
    /// Recolor one cell
    Cell { index: usize, color: Color },
}

pub trait Renderer {
    /// Replace the surface with `size * size` uncolored cells
    fn create_cells(&mut self, size: usize);

    fn set_cell_color(&mut self, index: usize, color: &Color);

    fn apply(&mut self, ops: impl IntoIterator<Item = RenderOp>)
    where
        Self: Sized,
    {
        for op in ops {
            match op {
                RenderOp::Rebuild { size } => self.create_cells(size),
                RenderOp::Cell { index, color } => self.set_cell_color(index, &color),
            }
        }
    }
}

/// In-memory mirror of the rendered cells
#[derive(Debug, Clone, Default)]
pub struct CellBuffer {
    pub size: usize,
    pub cells: Vec<Color>,
}

impl CellBuffer {
    /// One line per row, `.` for uncolored cells and `#` for painted ones
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.size);
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                out.push(if cell.is_uncolored() { '.' } else { '#' });
            }
            out.push('\n');
        }
        out
    }
}

impl Renderer for CellBuffer {
    fn create_cells(&mut self, size: usize) {
        self.size = size;
        self.cells = vec![Color::uncolored(); size * size];
    }

    fn set_cell_color(&mut self, index: usize, color: &Color) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_applies_ops_in_order() {
        let mut buf = CellBuffer::default();
        buf.apply(vec![
            RenderOp::Rebuild { size: 2 },
            RenderOp::Cell { index: 1, color: Color::from("#000000") },
            RenderOp::Cell { index: 9, color: Color::from("#000000") },
        ]);
        assert_eq!(buf.cells.len(), 4);
        assert_eq!(buf.to_ascii(), ".#\n..\n");
    }

    #[test]
    fn test_rebuild_discards_colors() {
        let mut buf = CellBuffer::default();
        buf.apply(vec![
            RenderOp::Rebuild { size: 2 },
            RenderOp::Cell { index: 0, color: Color::from("red") },
            RenderOp::Rebuild { size: 3 },
        ]);
        assert_eq!(buf.cells.len(), 9);
        assert!(buf.cells.iter().all(Color::is_uncolored));
    }
}

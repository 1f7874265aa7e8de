//! Grid and cell color types

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A CSS color value as the user picked it (e.g. `#112233`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Value of a cell nobody has painted
    pub const UNCOLORED: &'static str = "white";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn uncolored() -> Self {
        Self(Self::UNCOLORED.to_string())
    }

    pub fn is_uncolored(&self) -> bool {
        self.0 == Self::UNCOLORED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `#rrggbb`, the only form `<input type="color">` accepts
    pub fn is_hex_rgb(&self) -> bool {
        let bytes = self.0.as_bytes();
        bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::uncolored()
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grid coordinate; signed so pointer positions left of or above the grid stay representable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub row: i32,
    pub col: i32,
}

impl CellPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Map a pixel offset (relative to the grid's top-left corner) to a cell
    pub fn from_point(point: Vec2, cell_px: f32) -> Self {
        Self {
            row: (point.y / cell_px).floor() as i32,
            col: (point.x / cell_px).floor() as i32,
        }
    }
}

/// Square grid of cell colors, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Fresh grid with every cell uncolored
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::uncolored(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Row-major index for a position, `None` when outside the grid
    pub fn index_of(&self, pos: CellPos) -> Option<usize> {
        let n = self.size as i32;
        if pos.row < 0 || pos.col < 0 || pos.row >= n || pos.col >= n {
            return None;
        }
        Some(pos.row as usize * self.size + pos.col as usize)
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.cells.get(index)
    }

    /// Set a cell by index; returns false if the index is out of range
    pub fn set(&mut self, index: usize, color: Color) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = color;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Color::uncolored();
        }
    }

    pub fn colored_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_uncolored()).count()
    }
}

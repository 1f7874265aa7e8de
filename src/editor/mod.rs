//! Grid editor core
//!
//! Pure state and operations; no DOM, timers or storage backends here:
//! - `grid`: cell colors and coordinates
//! - `animation`: generation-tokened color sweeps
//! - `state`: the `Editor` controller driven by UI events

pub mod animation;
pub mod grid;
pub mod state;

pub use animation::{AnimationStep, Animator};
pub use grid::{CellPos, Color, Grid};
pub use state::{Editor, PaintMode, parse_grid_size, validate_grid_size};

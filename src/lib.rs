//! Pixel Grid - a pixel-art grid editor for the browser
//!
//! Core modules:
//! - `editor`: Grid state, paint modes, animation (platform-free)
//! - `persistence`: Save/load through a string key-value store
//! - `renderer`: Render operations and the cell sink trait
//! - `platform`: Browser glue (LocalStorage, DOM cells, dialogs)
//! - `settings`: Preferences persisted in LocalStorage

pub mod editor;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;

pub use editor::{CellPos, Color, Editor, PaintMode};
pub use error::{EditorError, ErrorKind};
pub use settings::Settings;

/// Editor configuration constants
pub mod consts {
    /// Grid dimension bounds (inclusive)
    pub const MIN_GRID_SIZE: usize = 2;
    pub const MAX_GRID_SIZE: usize = 64;
    /// Grid dimension on first start
    pub const DEFAULT_GRID_SIZE: usize = 16;

    /// Initial paint color (matches an untouched `<input type="color">`)
    pub const DEFAULT_COLOR: &str = "#000000";
    /// Rendered cell edge in CSS pixels
    pub const CELL_PX: u32 = 20;

    /// Delay between consecutive cells of an animation sweep
    pub const ANIMATION_STEP_MS: u32 = 50;
    pub const ANIMATION_PALETTE: [&str; 5] = ["#FF5733", "#33FF57", "#3357FF", "#F3FF33", "#FF33F3"];
}

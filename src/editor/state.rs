//! Editor state and the operations the UI drives
//!
//! Everything here is platform-free: the browser layer turns DOM events into
//! calls on `Editor`, then drains `take_render_ops` into the DOM.

use super::animation::{AnimationStep, Animator};
use super::grid::{CellPos, Color, Grid};
use crate::consts::*;
use crate::error::EditorError;
use crate::persistence::{self, KeyValueStore, PersistedArtwork};
use crate::renderer::RenderOp;
use crate::settings::Settings;

/// What a pointer press does to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Apply the current color
    #[default]
    Draw,
    /// Reset the cell to uncolored
    Erase,
}

/// Parse a grid size typed by the user; only a plain decimal integer in range passes
pub fn parse_grid_size(input: &str) -> Result<usize, EditorError> {
    let size: usize = input
        .trim()
        .parse()
        .map_err(|_| EditorError::InvalidSize(input.to_string()))?;
    validate_grid_size(size)
}

pub fn validate_grid_size(size: usize) -> Result<usize, EditorError> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(EditorError::InvalidSize(size.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    color: Color,
    mode: PaintMode,
    pointer_down: bool,
    animator: Animator,
    /// Pending view updates (drained by the platform)
    render_ops: Vec<RenderOp>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_settings(&Settings::default())
    }
}

impl Editor {
    /// Editor with default settings and a `size` x `size` grid (clamped into range)
    pub fn new(size: usize) -> Self {
        let settings = Settings {
            default_grid_size: size,
            ..Settings::default()
        };
        Self::with_settings(&settings)
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let settings = settings.sanitized();
        let size = settings.default_grid_size;
        Self {
            grid: Grid::new(size),
            color: settings.default_color.clone(),
            mode: PaintMode::Draw,
            pointer_down: false,
            animator: Animator::new(settings.animation_palette.clone(), settings.animation_step_ms),
            render_ops: vec![RenderOp::Rebuild { size }],
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Drain queued view updates, oldest first
    pub fn take_render_ops(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.render_ops)
    }

    /// Pick a paint color; always switches back to drawing
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.mode = PaintMode::Draw;
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    /// Replace the grid with a fresh, uncolored one
    pub fn resize(&mut self, size: usize) -> Result<(), EditorError> {
        let size = validate_grid_size(size)?;
        self.rebuild(size);
        log::info!("Grid resized to {size}x{size}");
        Ok(())
    }

    pub fn resize_from_input(&mut self, input: &str) -> Result<(), EditorError> {
        let size = parse_grid_size(input)?;
        self.resize(size)
    }

    fn rebuild(&mut self, size: usize) {
        self.animator.invalidate();
        self.grid = Grid::new(size);
        self.render_ops.clear();
        self.render_ops.push(RenderOp::Rebuild { size });
    }

    /// Clear every cell, keeping size, mode and color
    pub fn reset_all(&mut self) {
        self.animator.invalidate();
        self.grid.clear();
        let uncolored = Color::uncolored();
        self.render_ops
            .extend((0..self.grid.len()).map(|index| RenderOp::Cell {
                index,
                color: uncolored.clone(),
            }));
    }

    /// Paint or erase one cell; positions outside the grid are ignored
    pub fn paint_at(&mut self, pos: CellPos) -> bool {
        let Some(index) = self.grid.index_of(pos) else {
            return false;
        };
        let color = match self.mode {
            PaintMode::Draw => self.color.clone(),
            PaintMode::Erase => Color::uncolored(),
        };
        self.set_cell(index, color)
    }

    fn set_cell(&mut self, index: usize, color: Color) -> bool {
        if self.grid.get(index) == Some(&color) {
            return true;
        }
        if !self.grid.set(index, color.clone()) {
            return false;
        }
        self.render_ops.push(RenderOp::Cell { index, color });
        true
    }

    pub fn pointer_down(&mut self, pos: CellPos) {
        self.pointer_down = true;
        self.paint_at(pos);
    }

    pub fn pointer_move(&mut self, pos: CellPos) {
        if self.pointer_down {
            self.paint_at(pos);
        }
    }

    /// Release is tracked for the whole page, not just the grid
    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), EditorError> {
        persistence::save(store, &PersistedArtwork::from_grid(&self.grid))
    }

    /// Replace the grid with the saved artwork; on error nothing changes
    pub fn load(&mut self, store: &impl KeyValueStore) -> Result<(), EditorError> {
        let artwork = persistence::load(store)?;
        self.rebuild(artwork.grid_size);
        for (index, color) in artwork.cell_colors.into_iter().enumerate() {
            self.set_cell(index, color);
        }
        log::info!(
            "Artwork loaded ({0}x{0}, {1} colored cells)",
            self.grid.size(),
            self.grid.colored_count()
        );
        Ok(())
    }

    /// Start a color sweep; the returned steps must be fed back through
    /// `apply_animation_step` after their delays
    pub fn animate(&mut self) -> Vec<AnimationStep> {
        let steps = self.animator.schedule(self.grid.len());
        log::debug!(
            "Animation {} scheduled: {} steps over {}ms",
            self.animator.generation(),
            steps.len(),
            self.animator.duration_ms(steps.len())
        );
        steps
    }

    /// Apply a deferred step; returns false for steps from a stale sweep
    pub fn apply_animation_step(&mut self, step: &AnimationStep) -> bool {
        if !self.animator.is_current(step) {
            log::debug!("Dropping stale animation step {} (gen {})", step.index, step.generation);
            return false;
        }
        self.set_cell(step.index, step.color.clone())
    }

    pub fn cancel_animation(&mut self) {
        self.animator.invalidate();
    }
}

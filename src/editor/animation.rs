//! Staggered color sweep across the grid
//!
//! `schedule` produces one step per cell; the platform runs each step after its
//! delay. Every new schedule (or `invalidate`) bumps the generation, so steps
//! from an older sweep are dropped instead of painting over newer state.

use super::grid::Color;

/// One deferred cell assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStep {
    /// Sweep this step belongs to
    pub generation: u64,
    /// Row-major cell index
    pub index: usize,
    pub color: Color,
    /// Delay from the start of the sweep
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Animator {
    palette: Vec<Color>,
    step_ms: u32,
    generation: u64,
}

impl Animator {
    pub fn new(palette: Vec<Color>, step_ms: u32) -> Self {
        Self {
            palette,
            step_ms,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Drop every step scheduled so far
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Start a new sweep over `cell_count` cells
    pub fn schedule(&mut self, cell_count: usize) -> Vec<AnimationStep> {
        self.invalidate();
        if self.palette.is_empty() {
            return Vec::new();
        }
        (0..cell_count)
            .map(|index| AnimationStep {
                generation: self.generation,
                index,
                color: self.palette[index % self.palette.len()].clone(),
                delay_ms: (index as u32).saturating_mul(self.step_ms),
            })
            .collect()
    }

    pub fn is_current(&self, step: &AnimationStep) -> bool {
        step.generation == self.generation
    }

    /// Time until the last step of a sweep over `cell_count` cells lands
    pub fn duration_ms(&self, cell_count: usize) -> u32 {
        (cell_count.saturating_sub(1) as u32).saturating_mul(self.step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ANIMATION_PALETTE, ANIMATION_STEP_MS};

    fn animator() -> Animator {
        Animator::new(
            ANIMATION_PALETTE.iter().map(|c| Color::from(*c)).collect(),
            ANIMATION_STEP_MS,
        )
    }

    #[test]
    fn test_schedule_staggers_delays() {
        let mut a = animator();
        let steps = a.schedule(7);
        assert_eq!(steps.len(), 7);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index, i);
            assert_eq!(step.delay_ms, i as u32 * 50);
            assert_eq!(step.color.as_str(), ANIMATION_PALETTE[i % 5]);
        }
    }

    #[test]
    fn test_new_schedule_invalidates_old_steps() {
        let mut a = animator();
        let first = a.schedule(4);
        assert!(a.is_current(&first[0]));
        let second = a.schedule(4);
        assert!(!a.is_current(&first[0]));
        assert!(a.is_current(&second[3]));
    }

    #[test]
    fn test_invalidate() {
        let mut a = animator();
        let steps = a.schedule(2);
        a.invalidate();
        assert!(steps.iter().all(|s| !a.is_current(s)));
    }

    #[test]
    fn test_duration() {
        let a = animator();
        assert_eq!(a.duration_ms(16 * 16), 255 * 50);
        assert_eq!(a.duration_ms(0), 0);
    }

    #[test]
    fn test_empty_palette_schedules_nothing() {
        let mut a = Animator::new(Vec::new(), 50);
        assert!(a.schedule(9).is_empty());
    }
}

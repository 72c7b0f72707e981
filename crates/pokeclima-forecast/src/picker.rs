//! Candidate index selection.

use rand::Rng;

/// Chooses which candidate to show.
pub trait IndexPicker: Send + Sync {
    /// An index in the half-open range `[min, max)`. Callers guarantee `min < max`.
    fn pick_index(&self, min: usize, max: usize) -> usize;
}

/// Uniform pick from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick_index(&self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..max)
    }
}

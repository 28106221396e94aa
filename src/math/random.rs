//! Injectable random coordinate source for stochastic operators

use crate::pixel::Point;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed pixel coordinates
///
/// The mosaic quantizer draws its seeds through this trait so tests and
/// scripted runs can substitute a deterministic sequence.
pub trait RandomSource {
    /// Draw one coordinate uniformly from a `height` x `width` grid
    ///
    /// Both dimensions are at least one when called by the editor.
    fn draw_point(&mut self, height: usize, width: usize) -> Point;
}

/// Seeded random source for reproducible draws
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw_point(&mut self, height: usize, width: usize) -> Point {
        let row = self.rng.random_range(0..height.max(1));
        let col = self.rng.random_range(0..width.max(1));
        Point::new(row, col)
    }
}

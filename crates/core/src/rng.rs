//! RNG module - seeded piece generation
//!
//! Pieces are drawn independently, with replacement, from the fixed catalog.
//! Each piece's color is drawn separately from the palette, so color never
//! correlates with shape.
//!
//! The random source is a simple LCG injected via its seed, which keeps every
//! game reproducible for tests and replays.

use crate::shapes::Shape;
use crate::types::{ColorTag, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits: the low bits of an LCG with a power-of-two modulus
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Pick one element of a non-empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws batches of pieces for the tray.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    rng: SimpleRng,
}

impl ShapeGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a single piece
    pub fn draw(&mut self) -> Shape {
        let kind = self.rng.pick(&ShapeKind::ALL);
        let color = self.rng.pick(&ColorTag::PALETTE);
        Shape::new(kind, color)
    }

    /// Draw `count` pieces independently.
    ///
    /// No feasibility check is made: a batch may contain pieces that do not
    /// fit anywhere on the current board.
    pub fn generate_batch(&mut self, count: usize) -> Vec<Shape> {
        (0..count).map(|_| self.draw()).collect()
    }

    /// Get the current RNG state (for restarting with a continued sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

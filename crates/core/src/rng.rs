//! RNG module - seeded shape and garbage-hole picker
//!
//! Every board owns its own picker, so the two sides of a match draw
//! independent sequences and a seed replays a board exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::{Shape, ShapeCatalog};
use crate::types::ColorTag;

/// Uniform picker over a catalog
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: StdRng,
    seed: u64,
}

impl ShapePicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a shape and, independently, a color.
    pub fn pick(&mut self, catalog: &ShapeCatalog) -> (Shape, ColorTag) {
        let shapes = catalog.shapes();
        let colors = catalog.colors();
        let shape = shapes[self.rng.random_range(0..shapes.len())];
        let color = colors[self.rng.random_range(0..colors.len())];
        (shape, color)
    }

    /// Column left empty in a garbage row
    pub fn hole(&mut self, width: usize) -> usize {
        self.rng.random_range(0..width)
    }

    /// Seed this picker was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

//! Randomized depth-first backtracker that carves a closed grid into a perfect maze.

mod backtracker;
mod observed;
mod random;

pub use backtracker::{Backtracker, CarveStep};
pub use observed::{BuildFrame, BuildObserver, FRAME_CADENCE, ObserverError, generate_observed};
pub use random::{FnSource, RandomSource, derive_maze_seed, seeded_rng};

use crate::maze::{Maze, MazeDimensions};

/// Carves a perfect maze, drawing every neighbor choice from `rng`.
pub fn generate<R: RandomSource + ?Sized>(dimensions: MazeDimensions, rng: &mut R) -> Maze {
    Backtracker::new(dimensions).finish(rng)
}

/// Same maze for the same `(seed, dimensions)` pair.
pub fn generate_seeded(seed: u64, dimensions: MazeDimensions) -> Maze {
    generate(dimensions, &mut seeded_rng(seed, dimensions))
}

#[cfg(test)]
mod tests;

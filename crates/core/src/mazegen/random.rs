//! Random-choice sources for neighbor selection.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::maze::MazeDimensions;

/// Picks an index uniformly from `0..len`. Callers never pass `len == 0`.
pub trait RandomSource {
    fn choose_index(&mut self, len: usize) -> usize;
}

impl RandomSource for ChaCha8Rng {
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }
}

/// Adapts a plain choice function, e.g. a scripted sequence in tests.
/// Out-of-range answers are clamped to the last candidate.
pub struct FnSource<F>(pub F);

impl<F: FnMut(usize) -> usize> RandomSource for FnSource<F> {
    fn choose_index(&mut self, len: usize) -> usize {
        (self.0)(len).min(len.saturating_sub(1))
    }
}

pub fn derive_maze_seed(seed: u64, dimensions: MazeDimensions) -> u64 {
    let mut mixed = seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= (dimensions.width() as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= (dimensions.height() as u64).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

pub fn seeded_rng(seed: u64, dimensions: MazeDimensions) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_maze_seed(seed, dimensions))
}

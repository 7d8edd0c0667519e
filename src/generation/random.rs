use crate::io::configuration::MAX_SEED;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source owned by a single generation session
///
/// Every draw the pipeline makes (pattern tokens, sample counts, perturbations
/// and the synthesiser's own choices) comes from this one stream, so a seed
/// fully determines the puzzle it produces.
#[derive(Debug, Clone)]
pub struct Prng {
    rng: StdRng,
}

impl Prng {
    /// Create a session seeded deterministically
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reset the stream as if freshly created with `seed`
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Largest seed a new puzzle may be drawn with
    pub const fn max_seed() -> u64 {
        MAX_SEED
    }

    /// Uniform float in `[0, 1)`
    pub fn next_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in `[0, bound)`
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero
    pub fn next_int(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "next_int bound must be positive");
        self.scale(bound)
    }

    /// Uniform integer in `[lo, hi)`
    ///
    /// # Panics
    ///
    /// Panics if `hi <= lo`
    pub fn next_int_in(&mut self, lo: usize, hi: usize) -> usize {
        assert!(hi > lo, "next_int_in requires hi > lo (got {lo}..{hi})");
        lo + self.scale(hi - lo)
    }

    /// Fresh seed in `[0, max_seed)`
    pub fn next_seed(&mut self) -> u64 {
        (self.next_float() * Self::max_seed() as f64) as u64
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.next_float() < 0.5
    }

    /// Borrow the underlying generator for samplers that take a [`Rng`]
    pub const fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    // Floor of float × range, clamped against rounding up to `range`
    fn scale(&mut self, range: usize) -> usize {
        let scaled = (self.next_float() * range as f64) as usize;
        scaled.min(range - 1)
    }
}

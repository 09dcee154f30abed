//! Deterministic simulation RNG.
//!
//! Initial placement is the only random operation in a run, so a single
//! seedable generator threaded explicitly through initialisation is enough.
//! No process-wide random source is ever touched.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG handle.
///
/// Create one per run and pass it by `&mut` wherever randomness is needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

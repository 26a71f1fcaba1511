//! The simulation's single seedable random source.
//!
//! # Determinism strategy
//!
//! Every random decision in a run (arrival gaps, origin/destination floors,
//! elevator choice, reliability slowdowns, comfort noise) draws from one
//! `SimRng`.  Processes resume one at a time in a fixed order, so the draw
//! sequence, and therefore the whole run, is a pure function of the seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1, StandardNormal};

/// Simulation-level RNG.
///
/// Not `Sync`: it is owned by the simulation and passed by `&mut` into
/// whichever process is running.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with other `rand` distributions.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Exponentially distributed sample whose **mean** is `mean`.
    ///
    /// `mean` is the expected gap, not a rate: `exponential(12.0)` yields
    /// gaps averaging 12 s.
    #[inline]
    pub fn exponential(&mut self, mean: f64) -> f64 {
        let unit: f64 = Exp1.sample(&mut self.0);
        unit * mean
    }

    /// Normally distributed sample with the given mean and standard deviation.
    #[inline]
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.0);
        mean + z * std_dev
    }

    /// Index chosen uniformly from `0..len`, or `None` when `len == 0`.
    #[inline]
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}

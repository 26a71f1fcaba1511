//! Independent replications of one configuration.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use vts_core::BuildingConfig;

use crate::{MetricsSnapshot, NoopObserver, SimBuilder, SimResult};

/// Run `config` once per seed for `steps` steps and return each run's final
/// snapshot, in seed order.
///
/// Runs share nothing, so with the `parallel` feature they go to Rayon's
/// thread pool; results are identical either way.
pub fn replicate(config: &BuildingConfig, seeds: &[u64], steps: u64) -> SimResult<Vec<MetricsSnapshot>> {
    let run = |&seed: &u64| -> SimResult<MetricsSnapshot> {
        let mut sim = SimBuilder::new(BuildingConfig { seed, ..config.clone() }).build()?;
        sim.run_steps(steps, &mut NoopObserver)?;
        Ok(sim.metrics())
    };

    #[cfg(feature = "parallel")]
    let results = seeds.par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let results = seeds.iter().map(run).collect();

    results
}

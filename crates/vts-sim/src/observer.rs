//! Simulation observer trait for progress reporting and data collection.

use vts_agent::CompletedRider;
use vts_core::SimTime;

use crate::MetricsSnapshot;

/// Callbacks invoked by [`Simulation::step_with`][crate::Simulation::step_with]
/// and the `run_*` methods.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, snapshot: &MetricsSnapshot) {
///         if snapshot.step % self.interval == 0 {
///             println!("{}: {} riders done", snapshot.time, snapshot.completed);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the next event is popped; `now` is still the time of the
    /// previous step.
    fn on_step_start(&mut self, _step: u64, _now: SimTime) {}

    /// Called once per rider whose journey finished during this step.
    fn on_rider_completed(&mut self, _rider: &CompletedRider) {}

    /// Called after the step's snapshot has been recorded.
    fn on_step_end(&mut self, _snapshot: &MetricsSnapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

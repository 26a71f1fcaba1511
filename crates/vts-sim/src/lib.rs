//! `vts-sim` — event-driven orchestrator for the vts elevator simulation.
//!
//! # Step loop
//!
//! ```text
//! step():
//!   ① Pop     — take the earliest pending resumption from the EventQueue
//!               (ties: first scheduled, first run); clock := its fire time.
//!   ② Resume  — run exactly that process until it next suspends:
//!                 Generator(Arrival)        → spawn rider, call a random car,
//!                                             schedule next arrival
//!                 Elevator(Dispatch(f))     → plan move to f
//!                 Elevator(Arrive{..})      → set floor, start door cycle
//!                 Elevator(DoorsOpen{..})   → unload, load (pickup only),
//!                                             comfort, next stop or idle
//!   ③ Sample  — compute a MetricsSnapshot and append it to the history.
//! ```
//!
//! Exactly one process runs at a time, so no locking is needed anywhere.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`replicate`] runs seeds on Rayon's thread pool.       |
//! | `serde`    | Serialize snapshots and completed rider records.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vts_core::BuildingConfig;
//! use vts_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(BuildingConfig { peak_hour: true, ..Default::default() })
//!     .build()?;
//! sim.run_steps(10_000, &mut NoopObserver)?;
//! println!("{:?}", sim.latest());
//! ```

pub mod builder;
pub mod elevator;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod observer;
pub mod process;
pub mod replicate;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use generator::RiderGenerator;
pub use metrics::{KPI_NAMES, MetricsSnapshot};
pub use observer::{NoopObserver, SimObserver};
pub use process::{ElevatorStage, GeneratorStage, Leg, Process, ProcessContext};
pub use replicate::replicate;
pub use sim::Simulation;

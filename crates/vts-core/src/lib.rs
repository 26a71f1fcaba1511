//! `vts-core` — foundational types for the `vts` vertical transport simulation.
//!
//! This crate is a dependency of every other `vts-*` crate.  It has no
//! `vts-*` dependencies and minimal external ones (`rand`, `rand_distr` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RiderId`, `ElevatorId`, `Floor`                      |
//! | [`time`]        | `SimTime` (virtual seconds), `SimClock`               |
//! | [`rng`]         | `SimRng` — the single seedable generator of a run     |
//! | [`config`]      | `BuildingConfig`, named parameter table `PARAMS`      |
//! | [`error`]       | `VtsError`, `VtsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, time and config.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, PARAMS, ParamKind, ParamSpec, ParamValue};
pub use error::{VtsError, VtsResult};
pub use ids::{ElevatorId, Floor, RiderId};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};

//! `vts-agent` — the two agent populations and the floor lobbies.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`rider`]      | `Rider` (waiting or aboard), `CompletedRider` (frozen)     |
//! | [`elevator`]   | `Elevator` car state, `CabinSpec`, `Move`                  |
//! | [`lobby`]      | `Lobbies` — one FIFO per floor                             |
//!
//! # Ownership model
//!
//! A rider is always owned by exactly one place: a floor's lobby, one
//! elevator's passenger list, or (as a `CompletedRider`) the simulation's
//! completed collection.  Moving between them is a move of the value, so a
//! rider cannot be in two places at once.
//!
//! Nothing in this crate schedules anything.  The process logic in `vts-sim`
//! calls these operations between suspension points.

pub mod elevator;
pub mod lobby;
pub mod rider;

#[cfg(test)]
mod tests;

pub use elevator::{CabinSpec, DEFAULT_RELIABILITY, Elevator, FLOOR_HEIGHT_M, Move};
pub use lobby::Lobbies;
pub use rider::{CompletedRider, Rider, SCORE_MAX, SCORE_MIN};

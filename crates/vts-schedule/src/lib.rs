//! `vts-schedule` — the virtual clock and its event queue.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`event_queue`]  | `EventQueue<P>` (`BinaryHeap` keyed on time + sequence)   |
//!
//! # Ordering model (summary)
//!
//! Every pending entry is a process continuation `P` tagged with an absolute
//! fire time.  `pop` returns the earliest entry; entries sharing a fire time
//! come out in the order they were scheduled:
//!
//! ```text
//! key        = (fire_time, sequence)     sequence = insertion counter
//! pop        → min key; clock := fire_time
//! ```
//!
//! The queue is generic over the continuation type so it knows nothing about
//! elevators or riders.

pub mod event_queue;

#[cfg(test)]
mod tests;

pub use event_queue::EventQueue;

//! `EventQueue` — pending timed resumptions on a single virtual timeline.
//!
//! # Why a sequence number
//!
//! Several resumptions often share a fire time (a request wake scheduled "now",
//! a zero-length move).  `BinaryHeap` alone gives no stable order for equal
//! keys, so each entry carries the insertion counter as a tie-breaker: first
//! scheduled, first run.  That is what makes a seeded run replay exactly.
//!
//! # Performance note
//!
//! O(log E) push and pop where E is the number of pending entries.  A live
//! building holds one entry per busy elevator plus one for the rider
//! generator, so E stays tiny.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use vts_core::{SimClock, SimTime};

/// One pending resumption.
#[derive(Debug)]
struct Scheduled<P> {
    at:       SimTime,
    sequence: u64,
    process:  P,
}

impl<P> PartialEq for Scheduled<P> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.sequence == other.sequence
    }
}

impl<P> Eq for Scheduled<P> {}

impl<P> PartialOrd for Scheduled<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Scheduled<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the earliest entry on top.
        other
            .at
            .cmp(&self.at)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// The virtual clock plus every pending process resumption.
///
/// The clock only moves inside [`pop`](Self::pop), to the fire time of the
/// entry being returned.
#[derive(Debug)]
pub struct EventQueue<P> {
    clock:    SimClock,
    heap:     BinaryHeap<Scheduled<P>>,
    /// Entries ever scheduled; doubles as the next tie-break sequence number.
    sequence: u64,
}

impl<P> Default for EventQueue<P> {
    fn default() -> Self {
        Self {
            clock:    SimClock::new(),
            heap:     BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<P> EventQueue<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Schedule `process` to resume at absolute time `at`.
    ///
    /// # Panics
    /// Panics if `at` is earlier than the current time or not finite.
    pub fn schedule_at(&mut self, at: SimTime, process: P) {
        assert!(at.secs().is_finite(), "cannot schedule at non-finite time {}", at.secs());
        assert!(
            at >= self.now(),
            "cannot schedule at {} which is before the current time {}",
            at,
            self.now()
        );
        log::trace!("schedule #{} at {}", self.sequence, at);
        self.heap.push(Scheduled { at, sequence: self.sequence, process });
        self.sequence += 1;
    }

    /// Schedule `process` to resume `delay` seconds from now.
    ///
    /// # Panics
    /// Panics if `delay` is negative or not finite.
    pub fn schedule_in(&mut self, delay: f64, process: P) {
        assert!(
            delay.is_finite() && delay >= 0.0,
            "cannot schedule with delay {delay}"
        );
        self.schedule_at(self.now().after(delay), process);
    }

    /// Schedule `process` to resume at the current time, after everything
    /// already scheduled for this instant.
    #[inline]
    pub fn schedule_now(&mut self, process: P) {
        self.schedule_at(self.now(), process);
    }

    /// Remove the earliest entry, advance the clock to its fire time and hand
    /// back the process to resume.
    ///
    /// Returns `None` (and leaves the clock alone) when nothing is pending.
    pub fn pop(&mut self) -> Option<(SimTime, P)> {
        let Scheduled { at, sequence, process } = self.heap.pop()?;
        self.clock.advance_to(at);
        log::trace!("pop #{} at {}", sequence, at);
        Some((at, process))
    }

    /// Fire time of the earliest pending entry, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|s| s.at)
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total entries ever scheduled on this queue.
    pub fn scheduled_total(&self) -> u64 {
        self.sequence
    }
}

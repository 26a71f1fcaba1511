//! Virtual time model.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` is a count of simulated seconds since the
//! start of the run, stored as `f64`.  Only the event queue moves the clock,
//! and only forwards, so every `SimTime` the engine hands out is finite and
//! non-negative.  That lets `SimTime` be `Ord` (via `f64::total_cmp`) and sit
//! directly in a `BinaryHeap` key.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point on the virtual clock, in seconds.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Seconds since the start of the run.
    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// The instant `secs` seconds after `self`.
    #[inline]
    pub fn after(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Break the time into (hours, minutes, seconds) for log lines.
    pub fn hms(self) -> (u64, u32, f64) {
        let total = self.0.max(0.0);
        let hours = (total / 3_600.0).floor();
        let minutes = ((total - hours * 3_600.0) / 60.0).floor();
        let seconds = total - hours * 3_600.0 - minutes * 60.0;
        (hours as u64, minutes as u32, seconds)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.after(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{:02}:{:02}:{:06.3}", h, m, s)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The virtual clock.  Owned by the event queue; everything else reads it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock to `time`.
    ///
    /// # Panics
    /// Panics if `time` is earlier than the current time or not finite.
    pub fn advance_to(&mut self, time: SimTime) {
        assert!(time.0.is_finite(), "clock cannot advance to non-finite time {}", time.0);
        assert!(
            time >= self.now,
            "clock cannot move backwards from {} to {}",
            self.now,
            time
        );
        self.now = time;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.now)
    }
}

//! Rider lifecycle: waiting → aboard → completed.

use vts_core::{Floor, RiderId, SimTime};

/// Lower bound of the comfort and satisfaction scales.
pub const SCORE_MIN: f64 = 1.0;

/// Upper bound of the comfort and satisfaction scales.
pub const SCORE_MAX: f64 = 5.0;

/// A rider who has arrived but not yet finished their journey.
#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub id:          RiderId,
    pub origin:      Floor,
    pub destination: Floor,
    /// Arrival in the origin lobby.
    pub wait_start:  SimTime,
    enter_time:      Option<SimTime>,
    comfort:         Option<f64>,
}

impl Rider {
    /// A rider arriving at `origin` at `now`.
    ///
    /// # Panics
    /// Panics if `origin == destination`.
    pub fn new(id: RiderId, origin: Floor, destination: Floor, now: SimTime) -> Self {
        assert_ne!(origin, destination, "{id} must travel to a different floor");
        Self {
            id,
            origin,
            destination,
            wait_start: now,
            enter_time: None,
            comfort: None,
        }
    }

    /// When the rider stepped into a car, if they have.
    #[inline]
    pub fn enter_time(&self) -> Option<SimTime> {
        self.enter_time
    }

    #[inline]
    pub fn is_aboard(&self) -> bool {
        self.enter_time.is_some()
    }

    /// Latest comfort reading; `None` until the first reading after boarding.
    #[inline]
    pub fn comfort(&self) -> Option<f64> {
        self.comfort
    }

    pub(crate) fn board(&mut self, now: SimTime) {
        assert!(self.enter_time.is_none(), "{} boarded twice", self.id);
        assert!(now >= self.wait_start, "{} boarded before arriving", self.id);
        self.enter_time = Some(now);
    }

    pub(crate) fn set_comfort(&mut self, comfort: f64) {
        self.comfort = Some(comfort.clamp(SCORE_MIN, SCORE_MAX));
    }

    /// Freeze the journey at `now`.
    ///
    /// # Panics
    /// Panics if the rider never boarded or never got a comfort reading.
    pub(crate) fn alight(self, now: SimTime) -> CompletedRider {
        let Some(enter_time) = self.enter_time else {
            panic!("{} left a car it never boarded", self.id);
        };
        let Some(comfort) = self.comfort else {
            panic!("{} left the car without a comfort reading", self.id);
        };
        assert!(now >= enter_time, "{} left before boarding", self.id);

        let wait_time = enter_time - self.wait_start;
        CompletedRider {
            id: self.id,
            origin: self.origin,
            destination: self.destination,
            wait_start: self.wait_start,
            enter_time,
            exit_time: now,
            wait_time,
            travel_time: now - enter_time,
            journey_time: now - self.wait_start,
            satisfaction: satisfaction_for_wait(wait_time),
            perceived_quality: comfort,
        }
    }
}

/// Satisfaction lost one point per minute waited, on the `[1, 5]` scale.
#[inline]
pub fn satisfaction_for_wait(wait_secs: f64) -> f64 {
    (SCORE_MAX - wait_secs / 60.0).clamp(SCORE_MIN, SCORE_MAX)
}

/// The immutable record of a finished journey.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedRider {
    pub id:                RiderId,
    pub origin:            Floor,
    pub destination:       Floor,
    pub wait_start:        SimTime,
    pub enter_time:        SimTime,
    pub exit_time:         SimTime,
    /// `enter_time - wait_start`.
    pub wait_time:         f64,
    /// `exit_time - enter_time`.
    pub travel_time:       f64,
    /// `exit_time - wait_start`.
    pub journey_time:      f64,
    pub satisfaction:      f64,
    /// The last comfort reading before exit.
    pub perceived_quality: f64,
}

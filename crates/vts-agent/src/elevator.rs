//! Elevator car state and the operations performed between suspensions.
//!
//! The car itself never waits: moving and door cycling are durations the
//! caller turns into scheduled resumptions.  What lives here is the state
//! those resumptions act on: position, passengers, the FIFO of floor
//! requests, and the list of drop-off stops still to visit on a sweep.

use std::collections::{BTreeSet, VecDeque};

use vts_core::{ElevatorId, Floor, SimRng, SimTime};

use crate::{CompletedRider, Rider, SCORE_MAX};

/// Height of one storey in metres.
pub const FLOOR_HEIGHT_M: f64 = 3.5;

/// Probability that a move runs without a mechanical slowdown.
pub const DEFAULT_RELIABILITY: f64 = 0.97;

/// Bounds of the extra delay added by a slowdown, in seconds.
pub const SLOWDOWN_MIN_SECS: f64 = 10.0;
pub const SLOWDOWN_MAX_SECS: f64 = 30.0;

/// Standard deviation of the per-passenger comfort noise.
pub const COMFORT_NOISE_STD: f64 = 0.5;

// ── CabinSpec ─────────────────────────────────────────────────────────────────

/// Fixed physical parameters of one car.
#[derive(Clone, Debug, PartialEq)]
pub struct CabinSpec {
    pub capacity:    u32,
    /// m/s.
    pub speed:       f64,
    /// Seconds per door cycle.
    pub door_time:   f64,
    /// Probability in `[0, 1]` that a move is not slowed down.
    pub reliability: f64,
    pub vibration:   f64,
    /// dB.
    pub noise:       f64,
}

// ── Move ──────────────────────────────────────────────────────────────────────

/// Duration of one planned move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Move {
    pub from:     Floor,
    pub to:       Floor,
    /// Total seconds, slowdown included.
    pub duration: f64,
    /// Extra seconds drawn for a mechanical slowdown, if one occurred.
    pub slowdown: Option<f64>,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One elevator car.
#[derive(Debug)]
pub struct Elevator {
    pub id:              ElevatorId,
    pub capacity:        u32,
    pub speed:           f64,
    pub floor_height:    f64,
    pub door_time:       f64,
    pub reliability:     f64,
    pub vibration_level: f64,
    pub noise_level:     f64,

    current_floor:    Floor,
    passengers:       Vec<Rider>,
    requests:         VecDeque<Floor>,
    /// `true` while the car's process is blocked waiting for a request.
    awaiting_request: bool,
    /// Drop-off stops left on the current sweep, ascending.
    stops:            VecDeque<Floor>,
}

impl Elevator {
    /// A car parked on the ground floor with no passengers and no requests.
    ///
    /// # Panics
    /// Panics if `spec.capacity == 0`, `spec.speed <= 0` or `spec.reliability`
    /// is outside `[0, 1]`.
    pub fn new(id: ElevatorId, spec: &CabinSpec) -> Self {
        assert!(spec.capacity > 0, "{id} needs a positive capacity");
        assert!(spec.speed > 0.0, "{id} needs a positive speed");
        assert!(
            (0.0..=1.0).contains(&spec.reliability),
            "{id} reliability {} outside [0, 1]",
            spec.reliability
        );
        Self {
            id,
            capacity: spec.capacity,
            speed: spec.speed,
            floor_height: FLOOR_HEIGHT_M,
            door_time: spec.door_time,
            reliability: spec.reliability,
            vibration_level: spec.vibration,
            noise_level: spec.noise,
            current_floor: Floor::GROUND,
            passengers: Vec::with_capacity(spec.capacity as usize),
            requests: VecDeque::new(),
            awaiting_request: false,
            stops: VecDeque::new(),
        }
    }

    // ── Read-only state ───────────────────────────────────────────────────

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn passengers(&self) -> &[Rider] {
        &self.passengers
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Seats left before the car is full.
    #[inline]
    pub fn free_space(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.passengers.len())
    }

    /// `passengers / capacity`.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.passengers.len() as f64 / self.capacity as f64
    }

    /// Requests received but not yet taken up.
    pub fn pending_requests(&self) -> impl Iterator<Item = Floor> + '_ {
        self.requests.iter().copied()
    }

    /// `true` while the car waits for its next request.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.awaiting_request
    }

    // ── Request queue ─────────────────────────────────────────────────────

    /// Deliver a floor request.
    ///
    /// If the car's process is blocked waiting for work, the request is handed
    /// straight over and returned: the caller must wake the process with it.
    /// Otherwise it is queued and `None` is returned.
    pub fn request(&mut self, floor: Floor) -> Option<Floor> {
        if self.awaiting_request {
            self.awaiting_request = false;
            Some(floor)
        } else {
            self.requests.push_back(floor);
            None
        }
    }

    /// Take the next queued request, or block (mark the car idle) if there is
    /// none.
    pub fn next_request(&mut self) -> Option<Floor> {
        let next = self.requests.pop_front();
        self.awaiting_request = next.is_none();
        next
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Plan a move to `to`: `|to - current| * floor_height / speed` seconds,
    /// plus a uniform 10–30 s slowdown with probability `1 - reliability`.
    ///
    /// Every call makes one reliability draw, and one delay draw only when the
    /// slowdown happens.
    pub fn plan_move(&self, to: Floor, rng: &mut SimRng) -> Move {
        let distance_m = self.current_floor.distance(to) as f64 * self.floor_height;
        let mut duration = distance_m / self.speed;
        let slowdown = rng
            .gen_bool(1.0 - self.reliability)
            .then(|| rng.gen_range(SLOWDOWN_MIN_SECS..=SLOWDOWN_MAX_SECS));
        if let Some(extra) = slowdown {
            duration += extra;
        }
        Move { from: self.current_floor, to, duration, slowdown }
    }

    /// Complete a move.
    #[inline]
    pub fn arrive(&mut self, floor: Floor) {
        self.current_floor = floor;
    }

    // ── Passenger exchange ────────────────────────────────────────────────

    /// Let every passenger bound for `floor` out, freezing their journeys at
    /// `now`.  Remaining passengers keep their order.
    pub fn unload(&mut self, floor: Floor, now: SimTime) -> Vec<CompletedRider> {
        let (leaving, staying): (Vec<Rider>, Vec<Rider>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|r| r.destination == floor);
        self.passengers = staying;
        leaving.into_iter().map(|r| r.alight(now)).collect()
    }

    /// Board `riders` in order at `now`.
    ///
    /// # Panics
    /// Panics if they do not fit: the caller must take at most
    /// [`free_space`](Self::free_space) riders from the lobby.
    pub fn board(&mut self, riders: Vec<Rider>, now: SimTime) {
        assert!(
            riders.len() <= self.free_space(),
            "{} cannot board {} riders with {} free of {}",
            self.id,
            riders.len(),
            self.free_space(),
            self.capacity
        );
        for mut rider in riders {
            debug_assert!(
                self.passengers.iter().all(|p| p.id != rider.id),
                "{} boarded {} twice",
                self.id,
                rider.id
            );
            rider.board(now);
            self.passengers.push(rider);
        }
    }

    /// Redraw every passenger's comfort.
    ///
    /// `base = 5 - 3·crowd - 1.5·vibration - noise/20`, then each passenger
    /// gets `base + N(0, 0.5)` clamped to `[1, 5]`, drawn independently.  An
    /// empty car is left alone.
    pub fn refresh_comfort(&mut self, rng: &mut SimRng) {
        if self.passengers.is_empty() {
            return;
        }
        let base = self.comfort_base();
        for rider in &mut self.passengers {
            rider.set_comfort(base + rng.gaussian(0.0, COMFORT_NOISE_STD));
        }
    }

    /// Comfort before per-passenger noise, for the current load.
    pub fn comfort_base(&self) -> f64 {
        let crowd = self.load_factor();
        SCORE_MAX - 3.0 * crowd - 1.5 * self.vibration_level - self.noise_level / 20.0
    }

    // ── Sweep ─────────────────────────────────────────────────────────────

    /// Plan the drop-off sweep after a pickup at `from`: every distinct
    /// passenger destination except `from`, ascending.
    pub fn plan_sweep(&mut self, from: Floor) {
        let destinations: BTreeSet<Floor> = self
            .passengers
            .iter()
            .map(|r| r.destination)
            .filter(|&d| d != from)
            .collect();
        self.stops = destinations.into_iter().collect();
    }

    /// Next stop on the current sweep, if any remain.
    #[inline]
    pub fn next_stop(&mut self) -> Option<Floor> {
        self.stops.pop_front()
    }

    pub fn remaining_stops(&self) -> impl Iterator<Item = Floor> + '_ {
        self.stops.iter().copied()
    }
}

//! The `Simulation` struct and its step loop.

use vts_agent::{CompletedRider, Elevator, Lobbies, Rider};
use vts_core::{BuildingConfig, ElevatorId, Floor, RiderId, SimRng, SimTime};
use vts_schedule::EventQueue;

use crate::generator::admit;
use crate::{
    MetricsSnapshot, NoopObserver, Process, ProcessContext, RiderGenerator, SimError, SimObserver,
    SimResult, elevator,
};

/// The building model and its orchestrator.
///
/// Holds every process and the shared state they act on, and drives the
/// three-phase step described in the crate docs.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    config:    BuildingConfig,
    queue:     EventQueue<Process>,
    lobbies:   Lobbies,
    elevators: Vec<Elevator>,
    completed: Vec<CompletedRider>,
    generator: RiderGenerator,
    rng:       SimRng,
    steps:     u64,
    history:   Vec<MetricsSnapshot>,
}

impl Simulation {
    pub(crate) fn from_parts(
        lobbies:   Lobbies,
        rng:       SimRng,
        config:    BuildingConfig,
        queue:     EventQueue<Process>,
        elevators: Vec<Elevator>,
        generator: RiderGenerator,
    ) -> Self {
        Self {
            config,
            queue,
            lobbies,
            elevators,
            completed: Vec::new(),
            generator,
            rng,
            steps: 0,
            history: Vec::new(),
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance to the next pending resumption, run it, and return the KPIs.
    ///
    /// Fails with [`SimError::QueueExhausted`] when no process is scheduled;
    /// the simulation is left untouched in that case.
    pub fn step(&mut self) -> SimResult<MetricsSnapshot> {
        self.step_with(&mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<MetricsSnapshot> {
        observer.on_step_start(self.steps, self.now());
        let (_, process) = self.queue.pop().ok_or(SimError::QueueExhausted { at: self.now() })?;

        let before = self.completed.len();
        self.resume(process);
        for rider in &self.completed[before..] {
            observer.on_rider_completed(rider);
        }

        self.steps += 1;
        let snapshot = self.metrics();
        self.history.push(snapshot);
        observer.on_step_end(&snapshot);
        Ok(snapshot)
    }

    /// Run exactly `n` steps.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_with(observer)?;
        }
        Ok(())
    }

    /// Step while the next resumption is due at or before `until`.
    ///
    /// Stops early, without error, if nothing is left to resume.  Returns the
    /// number of steps taken.
    pub fn run_until<O: SimObserver>(&mut self, until: SimTime, observer: &mut O) -> SimResult<u64> {
        let mut taken = 0;
        while self.queue.peek_time().is_some_and(|t| t <= until) {
            self.step_with(observer)?;
            taken += 1;
        }
        Ok(taken)
    }

    fn resume(&mut self, process: Process) {
        let mut ctx = ProcessContext {
            queue:     &mut self.queue,
            lobbies:   &mut self.lobbies,
            completed: &mut self.completed,
            rng:       &mut self.rng,
        };
        match process {
            Process::Generator(stage) => self.generator.resume(stage, &mut self.elevators, &mut ctx),
            Process::Elevator { id, stage } => {
                elevator::resume(&mut self.elevators[id.index()], stage, &mut ctx)
            }
        }
    }

    // ── Riders ────────────────────────────────────────────────────────────

    /// Add a rider at the current time, as if the generator had spawned them.
    ///
    /// `elevator` picks the car to call; `None` picks one at random.  The rider
    /// only moves once the simulation is stepped.
    pub fn inject_rider(
        &mut self,
        origin:      Floor,
        destination: Floor,
        elevator:    Option<ElevatorId>,
    ) -> SimResult<RiderId> {
        let floors = self.config.floors;
        for floor in [origin, destination] {
            if floor.0 >= floors {
                return Err(SimError::FloorOutOfRange { floor, floors });
            }
        }
        if origin == destination {
            return Err(SimError::SameFloor(origin));
        }
        if let Some(id) = elevator.filter(|id| id.index() >= self.elevators.len()) {
            return Err(SimError::UnknownElevator(id));
        }

        let id = self.generator.next_id();
        let rider = Rider::new(id, origin, destination, self.now());
        let mut ctx = ProcessContext {
            queue:     &mut self.queue,
            lobbies:   &mut self.lobbies,
            completed: &mut self.completed,
            rng:       &mut self.rng,
        };
        admit(rider, elevator, &mut self.elevators, &mut ctx);
        Ok(id)
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// Current virtual time: the fire time of the last step.
    pub fn now(&self) -> SimTime {
        self.queue.now()
    }

    /// Steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    pub fn floor_count(&self) -> u32 {
        self.lobbies.floor_count()
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.index())
    }

    pub fn elevator_positions(&self) -> Vec<Floor> {
        self.elevators.iter().map(Elevator::current_floor).collect()
    }

    pub fn passenger_counts(&self) -> Vec<usize> {
        self.elevators.iter().map(Elevator::passenger_count).collect()
    }

    pub fn lobbies(&self) -> &Lobbies {
        &self.lobbies
    }

    pub fn lobby_sizes(&self) -> Vec<usize> {
        self.lobbies.sizes()
    }

    pub fn waiting_riders(&self, floor: Floor) -> impl Iterator<Item = &Rider> {
        self.lobbies.waiting(floor)
    }

    /// Every finished journey, in completion order.
    pub fn completed(&self) -> &[CompletedRider] {
        &self.completed
    }

    /// One snapshot per step taken.
    pub fn history(&self) -> &[MetricsSnapshot] {
        &self.history
    }

    pub fn latest(&self) -> Option<&MetricsSnapshot> {
        self.history.last()
    }

    /// KPIs for the current state, without recording them.
    pub fn metrics(&self) -> MetricsSnapshot {
        MetricsSnapshot::collect(self.steps, self.now(), &self.completed, &self.elevators, &self.lobbies)
    }

    /// Suspended resumptions waiting on the event queue.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Riders created so far, generated or injected.
    pub fn riders_spawned(&self) -> u32 {
        self.generator.spawned()
    }
}

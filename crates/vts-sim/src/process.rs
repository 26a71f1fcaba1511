//! Process continuations and the context a resumed process runs against.
//!
//! Each process is a resumable state machine.  Suspending means scheduling a
//! `Process` value (which process, at which stage) on the event queue; the
//! orchestrator pops it later and resumes that stage.  An elevator blocked on
//! its request queue schedules nothing: it is woken by whoever delivers the
//! next request.

use vts_agent::{CompletedRider, Lobbies};
use vts_core::{ElevatorId, Floor, SimRng, SimTime};
use vts_schedule::EventQueue;

/// Which process to resume, and where.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Process {
    Generator(GeneratorStage),
    Elevator { id: ElevatorId, stage: ElevatorStage },
}

/// Rider generator stages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeneratorStage {
    /// First resumption: draw the first inter-arrival gap.
    Start,
    /// A gap elapsed: a rider arrives.
    Arrival,
}

/// Why a car is travelling to a floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Leg {
    /// Answering a floor request: unload, then load from the lobby.
    Pickup,
    /// A sweep stop: unload only.
    DropOff,
}

/// Elevator process stages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElevatorStage {
    /// First resumption: go wait for a request.
    Start,
    /// Woken with the floor of the request just received.
    Dispatch(Floor),
    /// A move to `floor` finished.
    Arrive { floor: Floor, leg: Leg },
    /// The door cycle at `floor` finished.
    DoorsOpen { floor: Floor, leg: Leg },
}

/// Explicit handle on the shared simulation state, lent to whichever process
/// is running.
///
/// Elevators and the generator never reach into the orchestrator; everything
/// they may touch during a resumption is in here.
pub struct ProcessContext<'a> {
    pub queue:     &'a mut EventQueue<Process>,
    pub lobbies:   &'a mut Lobbies,
    pub completed: &'a mut Vec<CompletedRider>,
    pub rng:       &'a mut SimRng,
}

impl ProcessContext<'_> {
    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.queue.now()
    }
}

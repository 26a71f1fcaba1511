//! The rider generation process.

use log::{debug, warn};
use vts_agent::{Elevator, Rider};
use vts_core::{ElevatorId, Floor, RiderId};

use crate::{ElevatorStage, GeneratorStage, Process, ProcessContext};

/// Spawns riders with exponentially distributed gaps.
///
/// Also owns the rider id counter, so riders injected by hand get ids from
/// the same sequence as generated ones.
#[derive(Debug)]
pub struct RiderGenerator {
    mean_interarrival: f64,
    floors:            u32,
    next_id:           u32,
}

impl RiderGenerator {
    pub fn new(floors: u32, mean_interarrival: f64) -> Self {
        assert!(floors >= 2, "riders need at least two floors, got {floors}");
        assert!(
            mean_interarrival.is_finite() && mean_interarrival > 0.0,
            "mean inter-arrival time must be positive, got {mean_interarrival}"
        );
        Self { mean_interarrival, floors, next_id: 0 }
    }

    pub fn mean_interarrival(&self) -> f64 {
        self.mean_interarrival
    }

    /// Riders created so far, generated or injected.
    pub fn spawned(&self) -> u32 {
        self.next_id
    }

    pub(crate) fn next_id(&mut self) -> RiderId {
        let id = RiderId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Resume the generator: on `Arrival` spawn and admit one rider, then
    /// suspend for the next gap.
    pub fn resume(
        &mut self,
        stage:     GeneratorStage,
        elevators: &mut [Elevator],
        ctx:       &mut ProcessContext<'_>,
    ) {
        if stage == GeneratorStage::Arrival {
            let rider = self.spawn(ctx);
            debug!(
                "[{}] {} arrives on {} bound for {}",
                ctx.now(),
                rider.id,
                rider.origin,
                rider.destination
            );
            admit(rider, None, elevators, ctx);
        }
        let gap = ctx.rng.exponential(self.mean_interarrival);
        ctx.queue.schedule_in(gap, Process::Generator(GeneratorStage::Arrival));
    }

    /// Uniform origin, then a uniform destination among the other floors.
    fn spawn(&mut self, ctx: &mut ProcessContext<'_>) -> Rider {
        let origin = ctx.rng.gen_range(0..self.floors);
        let mut destination = ctx.rng.gen_range(0..self.floors - 1);
        if destination >= origin {
            destination += 1;
        }
        let id = self.next_id();
        Rider::new(id, Floor(origin), Floor(destination), ctx.now())
    }
}

/// Queue `rider` in their lobby and call a car to their floor.
///
/// With `assigned = None` the car is picked uniformly at random.  A car that
/// was blocked waiting for work is woken immediately.
pub(crate) fn admit(
    rider:     Rider,
    assigned:  Option<ElevatorId>,
    elevators: &mut [Elevator],
    ctx:       &mut ProcessContext<'_>,
) {
    let origin = rider.origin;
    let id = rider.id;
    ctx.lobbies.push(rider);

    let index = match assigned {
        Some(car) => Some(car.index()),
        None => ctx.rng.pick_index(elevators.len()),
    };
    let Some(car) = index.and_then(|i| elevators.get_mut(i)) else {
        warn!("[{}] no elevator to call for {id} on {origin}; they will wait forever", ctx.now());
        return;
    };
    if let Some(floor) = car.request(origin) {
        ctx.queue.schedule_now(Process::Elevator { id: car.id, stage: ElevatorStage::Dispatch(floor) });
    }
}

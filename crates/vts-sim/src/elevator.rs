//! The elevator process.
//!
//! ```text
//! Start ──► wait ◄────────────────────────────────────────┐
//!            │ request(f)                                  │
//!            ▼                                             │
//!        Dispatch(f) ─move─► Arrive{f, Pickup}             │
//!                               │ door_time                │
//!                               ▼                          │
//!                      DoorsOpen{f, Pickup}                │
//!                      unload · load · comfort · sweep     │
//!                               │                          │
//!            ┌── next stop s ◄──┴───── no stops left ──────┤
//!            ▼                                             │
//!   Arrive{s, DropOff} ─door_time─► DoorsOpen{s, DropOff} ─┘
//!                                   unload · comfort
//! ```

use log::{debug, warn};
use vts_agent::Elevator;
use vts_core::Floor;

use crate::{ElevatorStage, Leg, Process, ProcessContext};

/// Resume `elevator` at `stage` and run it until it next suspends.
pub fn resume(elevator: &mut Elevator, stage: ElevatorStage, ctx: &mut ProcessContext<'_>) {
    match stage {
        ElevatorStage::Start => wait_for_request(elevator, ctx),

        ElevatorStage::Dispatch(floor) => {
            debug!(
                "[{}] {} dispatched from {} to {}",
                ctx.now(),
                elevator.id,
                elevator.current_floor(),
                floor
            );
            travel(elevator, floor, Leg::Pickup, ctx);
        }

        ElevatorStage::Arrive { floor, leg } => {
            elevator.arrive(floor);
            debug!("[{}] {} reached {floor}, doors opening", ctx.now(), elevator.id);
            ctx.queue.schedule_in(
                elevator.door_time,
                Process::Elevator { id: elevator.id, stage: ElevatorStage::DoorsOpen { floor, leg } },
            );
        }

        ElevatorStage::DoorsOpen { floor, leg } => {
            exchange(elevator, floor, leg, ctx);
            match elevator.next_stop() {
                Some(stop) => travel(elevator, stop, Leg::DropOff, ctx),
                None => wait_for_request(elevator, ctx),
            }
        }
    }
}

/// Unload at `floor`; on a pickup also load from the lobby and plan the sweep.
fn exchange(elevator: &mut Elevator, floor: Floor, leg: Leg, ctx: &mut ProcessContext<'_>) {
    let now = ctx.now();
    let alighted = elevator.unload(floor, now);
    assert!(
        leg == Leg::Pickup || !alighted.is_empty(),
        "{} stopped at {floor} on its sweep with nobody bound there",
        elevator.id
    );
    let unloaded = alighted.len();
    ctx.completed.extend(alighted);

    let mut loaded = 0;
    if leg == Leg::Pickup {
        let boarding = ctx.lobbies.take(floor, elevator.free_space());
        loaded = boarding.len();
        elevator.board(boarding, now);
    }
    elevator.refresh_comfort(ctx.rng);
    if leg == Leg::Pickup {
        elevator.plan_sweep(floor);
    }

    debug!(
        "[{now}] {} at {floor}: {unloaded} out, {loaded} in, {} aboard, {} left waiting",
        elevator.id,
        elevator.passenger_count(),
        ctx.lobbies.len(floor)
    );
}

fn travel(elevator: &Elevator, to: Floor, leg: Leg, ctx: &mut ProcessContext<'_>) {
    let step = elevator.plan_move(to, ctx.rng);
    if let Some(extra) = step.slowdown {
        warn!(
            "[{}] {} slowed down by {extra:.1}s between {} and {}",
            ctx.now(),
            elevator.id,
            step.from,
            step.to
        );
    }
    ctx.queue.schedule_in(
        step.duration,
        Process::Elevator { id: elevator.id, stage: ElevatorStage::Arrive { floor: to, leg } },
    );
}

/// Take the next queued request, or block until one is delivered.
fn wait_for_request(elevator: &mut Elevator, ctx: &mut ProcessContext<'_>) {
    match elevator.next_request() {
        Some(floor) => ctx.queue.schedule_now(Process::Elevator {
            id:    elevator.id,
            stage: ElevatorStage::Dispatch(floor),
        }),
        None => debug!("[{}] {} idle at {}", ctx.now(), elevator.id, elevator.current_floor()),
    }
}

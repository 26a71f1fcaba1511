use thiserror::Error;
use vts_core::{ElevatorId, Floor, SimTime, VtsError};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] VtsError),

    #[error("no process is scheduled to resume at {at}")]
    QueueExhausted { at: SimTime },

    #[error("{0} does not exist")]
    UnknownElevator(ElevatorId),

    #[error("{floor} is outside a {floors}-floor building")]
    FloorOutOfRange { floor: Floor, floors: u32 },

    #[error("a journey from {0} to itself is not allowed")]
    SameFloor(Floor),
}

pub type SimResult<T> = Result<T, SimError>;

//! Per-step KPI snapshots.

use vts_agent::{CompletedRider, Elevator, Lobbies};
use vts_core::SimTime;

/// KPI names accepted by [`MetricsSnapshot::get`], in dashboard order.
pub const KPI_NAMES: [&str; 4] = ["Avg_Wait_Time", "Avg_Journey_Time", "Avg_Satisfaction", "Crowding"];

/// Building-wide KPIs sampled after one step.
///
/// Averages are over every completed rider so far, `0.0` while nobody has
/// completed.  `crowding` is the mean cabin load factor, `0.0` with no cars.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSnapshot {
    pub step:             u64,
    pub time:             SimTime,
    pub avg_wait_time:    f64,
    pub avg_journey_time: f64,
    pub avg_satisfaction: f64,
    pub crowding:         f64,
    /// Riders standing in a lobby.
    pub waiting:          usize,
    /// Riders inside a car.
    pub aboard:           usize,
    pub completed:        usize,
}

impl MetricsSnapshot {
    pub fn collect(
        step:      u64,
        time:      SimTime,
        completed: &[CompletedRider],
        elevators: &[Elevator],
        lobbies:   &Lobbies,
    ) -> Self {
        Self {
            step,
            time,
            avg_wait_time:    mean(completed.iter().map(|r| r.wait_time)),
            avg_journey_time: mean(completed.iter().map(|r| r.journey_time)),
            avg_satisfaction: mean(completed.iter().map(|r| r.satisfaction)),
            crowding:         mean(elevators.iter().map(Elevator::load_factor)),
            waiting:          lobbies.total_waiting(),
            aboard:           elevators.iter().map(Elevator::passenger_count).sum(),
            completed:        completed.len(),
        }
    }

    /// Look a KPI up by its dashboard name (see [`KPI_NAMES`]).
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "Avg_Wait_Time" => Some(self.avg_wait_time),
            "Avg_Journey_Time" => Some(self.avg_journey_time),
            "Avg_Satisfaction" => Some(self.avg_satisfaction),
            "Crowding" => Some(self.crowding),
            _ => None,
        }
    }

    /// `(name, value)` for every KPI, in [`KPI_NAMES`] order.
    pub fn kpis(&self) -> [(&'static str, f64); 4] {
        [
            (KPI_NAMES[0], self.avg_wait_time),
            (KPI_NAMES[1], self.avg_journey_time),
            (KPI_NAMES[2], self.avg_satisfaction),
            (KPI_NAMES[3], self.crowding),
        ]
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

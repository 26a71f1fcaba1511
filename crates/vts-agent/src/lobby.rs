//! Per-floor waiting lines.

use std::collections::VecDeque;

use vts_core::Floor;

use crate::Rider;

/// One FIFO of waiting riders per floor, floors `0..floor_count`.
#[derive(Debug, Default)]
pub struct Lobbies {
    floors: Vec<VecDeque<Rider>>,
}

impl Lobbies {
    pub fn new(floor_count: u32) -> Self {
        Self {
            floors: (0..floor_count).map(|_| VecDeque::new()).collect(),
        }
    }

    pub fn floor_count(&self) -> u32 {
        self.floors.len() as u32
    }

    /// Put `rider` at the back of their origin floor's line.
    ///
    /// # Panics
    /// Panics if the origin floor does not exist.
    pub fn push(&mut self, rider: Rider) {
        let floor = rider.origin;
        let count = self.floors.len();
        let Some(line) = self.floors.get_mut(floor.index()) else {
            panic!("{} arrived on {floor} in a {count}-floor building", rider.id);
        };
        line.push_back(rider);
    }

    /// Remove up to `max` riders from the front of `floor`'s line, in arrival
    /// order.
    pub fn take(&mut self, floor: Floor, max: usize) -> Vec<Rider> {
        match self.floors.get_mut(floor.index()) {
            Some(line) => {
                let n = max.min(line.len());
                line.drain(..n).collect()
            }
            None => Vec::new(),
        }
    }

    /// Riders waiting on `floor`, front of the line first.
    pub fn waiting(&self, floor: Floor) -> impl Iterator<Item = &Rider> {
        self.floors.get(floor.index()).into_iter().flatten()
    }

    /// Number of riders waiting on `floor`.
    pub fn len(&self, floor: Floor) -> usize {
        self.floors.get(floor.index()).map_or(0, VecDeque::len)
    }

    /// Line length for every floor, ground floor first.
    pub fn sizes(&self) -> Vec<usize> {
        self.floors.iter().map(VecDeque::len).collect()
    }

    /// Riders waiting anywhere in the building.
    pub fn total_waiting(&self) -> usize {
        self.floors.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_waiting() == 0
    }
}

//! Fluent builder for constructing a [`Simulation`].

use log::info;
use vts_agent::{CabinSpec, DEFAULT_RELIABILITY, Elevator, Lobbies};
use vts_core::{BuildingConfig, ElevatorId, SimRng, VtsError};
use vts_schedule::EventQueue;

use crate::{ElevatorStage, GeneratorStage, Process, RiderGenerator, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                            |
/// |----------------------------|------------------------------------|
/// | `.reliability(r)`          | `0.97` for every car               |
/// | `.door_time_for(id, secs)` | `config.door_time`                 |
/// | `.rider_generation(on)`    | `true`                             |
/// | `.strict_ranges()`         | off: only structural checks        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(BuildingConfig::default())
///     .rider_generation(false)
///     .build()?;
/// sim.inject_rider(Floor(0), Floor(3), None)?;
/// sim.run_steps(20, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:           BuildingConfig,
    reliability:      f64,
    door_overrides:   Vec<(ElevatorId, f64)>,
    rider_generation: bool,
    strict_ranges:    bool,
}

impl SimBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self {
            config,
            reliability:      DEFAULT_RELIABILITY,
            door_overrides:   Vec::new(),
            rider_generation: true,
            strict_ranges:    false,
        }
    }

    /// Probability, for every car, that a move has no slowdown.
    pub fn reliability(mut self, reliability: f64) -> Self {
        self.reliability = reliability;
        self
    }

    /// Give one car its own door cycle time.
    pub fn door_time_for(mut self, id: ElevatorId, secs: f64) -> Self {
        self.door_overrides.push((id, secs));
        self
    }

    /// Turn the rider generation process on or off.  With it off, riders only
    /// appear through [`Simulation::inject_rider`].
    pub fn rider_generation(mut self, enabled: bool) -> Self {
        self.rider_generation = enabled;
        self
    }

    /// Also reject parameters outside their dashboard ranges.
    pub fn strict_ranges(mut self) -> Self {
        self.strict_ranges = true;
        self
    }

    /// Validate inputs and construct the [`Simulation`].
    ///
    /// Every process gets a start-up resumption at time zero: elevators in id
    /// order, then the rider generator.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        if self.strict_ranges {
            self.config.validate_ranges()?;
        }
        if !(0.0..=1.0).contains(&self.reliability) {
            return Err(VtsError::Config(format!(
                "reliability must be within [0, 1], got {}",
                self.reliability
            ))
            .into());
        }

        let spec = CabinSpec {
            capacity:    self.config.capacity,
            speed:       self.config.speed,
            door_time:   self.config.door_time,
            reliability: self.reliability,
            vibration:   self.config.vibration,
            noise:       self.config.noise,
        };
        let mut elevators: Vec<Elevator> = (0..self.config.elevators)
            .map(|i| Elevator::new(ElevatorId(i), &spec))
            .collect();

        for (id, secs) in self.door_overrides {
            let car = elevators.get_mut(id.index()).ok_or(SimError::UnknownElevator(id))?;
            if !(secs.is_finite() && secs >= 0.0) {
                return Err(VtsError::Config(format!(
                    "door time for {id} must be finite and non-negative, got {secs}"
                ))
                .into());
            }
            car.door_time = secs;
        }

        let mut queue = EventQueue::new();
        for car in &elevators {
            queue.schedule_now(Process::Elevator { id: car.id, stage: ElevatorStage::Start });
        }
        if self.rider_generation {
            queue.schedule_now(Process::Generator(GeneratorStage::Start));
        }

        let generator = RiderGenerator::new(self.config.floors, self.config.mean_interarrival_secs());
        info!(
            "building: {} floors, {} elevators (capacity {}), {} demand (mean gap {:.0}s), seed {}",
            self.config.floors,
            self.config.elevators,
            self.config.capacity,
            if self.config.peak_hour { "peak" } else { "off-peak" },
            generator.mean_interarrival(),
            self.config.seed
        );

        Ok(Simulation::from_parts(
            Lobbies::new(self.config.floors),
            SimRng::new(self.config.seed),
            self.config,
            queue,
            elevators,
            generator,
        ))
    }
}

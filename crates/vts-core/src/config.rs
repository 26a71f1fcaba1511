//! Building configuration and the named parameter table.
//!
//! `BuildingConfig` is what a simulation is constructed from.  It is fixed
//! for the lifetime of a run.  The dashboard layer describes its controls
//! with [`PARAMS`] and pushes user input through [`BuildingConfig::set`], so
//! each parameter name, kind and range is defined in exactly one place.

use crate::{VtsError, VtsResult};

/// Mean seconds between rider arrivals during the peak hour.
pub const PEAK_MEAN_INTERARRIVAL_SECS: f64 = 12.0;

/// Mean seconds between rider arrivals outside the peak hour.
pub const OFF_PEAK_MEAN_INTERARRIVAL_SECS: f64 = 45.0;

// ── Parameter table ───────────────────────────────────────────────────────────

/// A value for one named parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamValue {
    Int(u32),
    Float(f64),
    Flag(bool),
}

/// Kind and valid range of a parameter, as shown on the dashboard.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParamKind {
    Int { min: u32, max: u32 },
    Float { min: f64, max: f64, step: f64 },
    Flag,
}

/// Description of one configurable parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParamSpec {
    /// Key used by [`BuildingConfig::set`] and [`BuildingConfig::get`].
    pub name:    &'static str,
    /// Human-readable control label.
    pub label:   &'static str,
    pub kind:    ParamKind,
    pub default: ParamValue,
}

impl ParamSpec {
    /// Look up a parameter by name.
    pub fn find(name: &str) -> Option<&'static ParamSpec> {
        PARAMS.iter().find(|p| p.name == name)
    }

    /// Check `value` against this parameter's kind and range.
    ///
    /// Integer values are accepted for float parameters.
    pub fn check(&self, value: ParamValue) -> VtsResult<ParamValue> {
        match (self.kind, value) {
            (ParamKind::Int { min, max }, ParamValue::Int(v)) => {
                if v < min || v > max {
                    return Err(self.out_of_range(v as f64, min as f64, max as f64));
                }
                Ok(value)
            }
            (ParamKind::Float { min, max, .. }, ParamValue::Float(v)) => self.check_float(v, min, max),
            (ParamKind::Float { min, max, .. }, ParamValue::Int(v)) => {
                self.check_float(v as f64, min, max)
            }
            (ParamKind::Flag, ParamValue::Flag(_)) => Ok(value),
            (kind, _) => Err(VtsError::ParamKind {
                name:     self.name,
                expected: match kind {
                    ParamKind::Int { .. } => "integer",
                    ParamKind::Float { .. } => "numeric",
                    ParamKind::Flag => "boolean",
                },
            }),
        }
    }

    fn check_float(&self, v: f64, min: f64, max: f64) -> VtsResult<ParamValue> {
        if !v.is_finite() || v < min || v > max {
            return Err(self.out_of_range(v, min, max));
        }
        Ok(ParamValue::Float(v))
    }

    fn out_of_range(&self, value: f64, min: f64, max: f64) -> VtsError {
        VtsError::OutOfRange { name: self.name, value, min, max }
    }
}

/// Every parameter the engine accepts at construction, with the ranges the
/// dashboard enforces.
pub const PARAMS: [ParamSpec; 9] = [
    ParamSpec {
        name:    "N_floors",
        label:   "Number of Floors",
        kind:    ParamKind::Int { min: 2, max: 30 },
        default: ParamValue::Int(6),
    },
    ParamSpec {
        name:    "N_elevators",
        label:   "Number of Elevators",
        kind:    ParamKind::Int { min: 1, max: 8 },
        default: ParamValue::Int(2),
    },
    ParamSpec {
        name:    "peak_hour",
        label:   "Peak Hour Demand (High Arrival Rate)",
        kind:    ParamKind::Flag,
        default: ParamValue::Flag(false),
    },
    ParamSpec {
        name:    "backup_power",
        label:   "Backup Power Available",
        kind:    ParamKind::Flag,
        default: ParamValue::Flag(true),
    },
    ParamSpec {
        name:    "door_time",
        label:   "Door Open/Close Time (s)",
        kind:    ParamKind::Float { min: 5.0, max: 25.0, step: 0.5 },
        default: ParamValue::Float(10.6),
    },
    ParamSpec {
        name:    "capacity",
        label:   "Elevator Capacity (persons)",
        kind:    ParamKind::Int { min: 8, max: 30 },
        default: ParamValue::Int(16),
    },
    ParamSpec {
        name:    "vibration",
        label:   "Vibration Level",
        kind:    ParamKind::Float { min: 0.5, max: 3.0, step: 0.1 },
        default: ParamValue::Float(1.01),
    },
    ParamSpec {
        name:    "noise",
        label:   "Cabin Noise (dB)",
        kind:    ParamKind::Float { min: 40.0, max: 80.0, step: 1.0 },
        default: ParamValue::Float(55.9),
    },
    ParamSpec {
        name:    "speed",
        label:   "Elevator Speed (m/s)",
        kind:    ParamKind::Float { min: 1.0, max: 6.0, step: 0.5 },
        default: ParamValue::Float(3.0),
    },
];

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Everything needed to construct a simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of floors, numbered `0..floors`.
    pub floors: u32,

    /// Number of elevator cars.
    pub elevators: u32,

    /// Peak-hour demand: mean arrival gap of 12 s instead of 45 s.
    pub peak_hour: bool,

    /// Reserved.  Accepted and reported but does not change behavior.
    pub backup_power: bool,

    /// Seconds for one door open/close cycle.
    pub door_time: f64,

    /// Passengers per car.
    pub capacity: u32,

    /// Cabin vibration level (dimensionless).
    pub vibration: f64,

    /// Cabin noise in dB.
    pub noise: f64,

    /// Car speed in m/s.
    pub speed: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors:       6,
            elevators:    2,
            peak_hour:    false,
            backup_power: true,
            door_time:    10.6,
            capacity:     16,
            vibration:    1.01,
            noise:        55.9,
            speed:        3.0,
            seed:         42,
        }
    }
}

impl BuildingConfig {
    /// Mean seconds between rider arrivals for this configuration.
    #[inline]
    pub fn mean_interarrival_secs(&self) -> f64 {
        if self.peak_hour {
            PEAK_MEAN_INTERARRIVAL_SECS
        } else {
            OFF_PEAK_MEAN_INTERARRIVAL_SECS
        }
    }

    /// Current value of the named parameter.
    pub fn get(&self, name: &str) -> VtsResult<ParamValue> {
        let value = match name {
            "N_floors" => ParamValue::Int(self.floors),
            "N_elevators" => ParamValue::Int(self.elevators),
            "peak_hour" => ParamValue::Flag(self.peak_hour),
            "backup_power" => ParamValue::Flag(self.backup_power),
            "door_time" => ParamValue::Float(self.door_time),
            "capacity" => ParamValue::Int(self.capacity),
            "vibration" => ParamValue::Float(self.vibration),
            "noise" => ParamValue::Float(self.noise),
            "speed" => ParamValue::Float(self.speed),
            other => return Err(VtsError::UnknownParam(other.to_owned())),
        };
        Ok(value)
    }

    /// Set the named parameter, enforcing its kind and dashboard range.
    ///
    /// On error the configuration is left unchanged.
    pub fn set(&mut self, name: &str, value: ParamValue) -> VtsResult<()> {
        let spec = ParamSpec::find(name).ok_or_else(|| VtsError::UnknownParam(name.to_owned()))?;
        match (spec.name, spec.check(value)?) {
            ("N_floors", ParamValue::Int(v)) => self.floors = v,
            ("N_elevators", ParamValue::Int(v)) => self.elevators = v,
            ("capacity", ParamValue::Int(v)) => self.capacity = v,
            ("peak_hour", ParamValue::Flag(v)) => self.peak_hour = v,
            ("backup_power", ParamValue::Flag(v)) => self.backup_power = v,
            ("door_time", ParamValue::Float(v)) => self.door_time = v,
            ("vibration", ParamValue::Float(v)) => self.vibration = v,
            ("noise", ParamValue::Float(v)) => self.noise = v,
            ("speed", ParamValue::Float(v)) => self.speed = v,
            (name, _) => return Err(VtsError::Config(format!("no field backs parameter `{name}`"))),
        }
        Ok(())
    }

    /// Structural checks the engine needs regardless of dashboard ranges.
    ///
    /// Zero elevators and single-seat cars are allowed here; the dashboard
    /// ranges are checked separately by [`validate_ranges`](Self::validate_ranges).
    pub fn validate(&self) -> VtsResult<()> {
        if self.floors < 2 {
            return Err(VtsError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.floors
            )));
        }
        if self.capacity == 0 {
            return Err(VtsError::Config("elevator capacity must be positive".into()));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(VtsError::Config(format!(
                "elevator speed must be positive, got {}",
                self.speed
            )));
        }
        for (name, value) in [
            ("door_time", self.door_time),
            ("vibration", self.vibration),
            ("noise", self.noise),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(VtsError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Check every parameter against the documented dashboard ranges.
    pub fn validate_ranges(&self) -> VtsResult<()> {
        for spec in &PARAMS {
            spec.check(self.get(spec.name)?)?;
        }
        Ok(())
    }
}

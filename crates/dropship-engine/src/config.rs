//! Environment parameters and startup validation.
//!
//! [`EnvParams`] is the closed configuration set of the environment.
//! [`validate()`](EnvParams::validate) checks structural invariants once,
//! at world construction; after that the tick resolver and spawner run
//! without re-checking capacity.

use std::error::Error;
use std::fmt;

/// Default drone density used to derive the grid side when
/// [`EnvParams::grid_size`] is not set explicitly.
pub const DEFAULT_DRONE_DENSITY: f64 = 0.05;

// ── EnvParams ──────────────────────────────────────────────────────

/// Configuration of one delivery environment.
///
/// Ground object counts are factors on the drone count: a world with
/// `n_drones = 3` and `packets_factor = 3` starts with 9 packets.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvParams {
    /// Number of drones D. Must be ≥ 1.
    pub n_drones: u16,
    /// Explicit grid side N. `None` derives `N = ⌈√(D / drone_density)⌉`.
    pub grid_size: Option<u32>,
    /// Target fraction of cells occupied by drones when deriving N.
    pub drone_density: f64,
    /// Packets per drone.
    pub packets_factor: u32,
    /// Dropzones per drone.
    pub dropzones_factor: u32,
    /// Charging stations per drone.
    pub stations_factor: u32,
    /// Skyscrapers per drone.
    pub skyscrapers_factor: u32,
    /// Reward for picking a packet off the ground.
    pub pickup_reward: f32,
    /// Reward for landing a carried package on a dropzone.
    pub delivery_reward: f32,
    /// Reward for crashing (typically negative).
    pub crash_reward: f32,
    /// Reward paid each tick a drone spends on a charging station.
    pub charge_reward: f32,
    /// Battery percent lost per tick off-station. In `[0, 100]`.
    pub discharge_rate: u8,
    /// Battery percent gained per tick on a station. In `[0, 100]`.
    pub charge_rate: u8,
}

impl Default for EnvParams {
    fn default() -> Self {
        Self {
            n_drones: 3,
            grid_size: None,
            drone_density: DEFAULT_DRONE_DENSITY,
            packets_factor: 3,
            dropzones_factor: 2,
            stations_factor: 2,
            skyscrapers_factor: 3,
            pickup_reward: 0.1,
            delivery_reward: 1.0,
            crash_reward: -1.0,
            charge_reward: 0.1,
            discharge_rate: 10,
            charge_rate: 20,
        }
    }
}

impl EnvParams {
    /// The grid side N: explicit [`grid_size`](Self::grid_size), or derived
    /// from the drone density.
    ///
    /// Call [`validate()`](Self::validate) instead when the result must be
    /// trustworthy; this accessor does not check anything.
    pub fn side(&self) -> u32 {
        match self.grid_size {
            Some(n) => n,
            None => (self.n_drones as f64 / self.drone_density).sqrt().ceil() as u32,
        }
    }

    /// Ground objects placed at reset, by kind:
    /// `(skyscrapers, stations, dropzones, packets)`.
    pub fn ground_counts(&self) -> (usize, usize, usize, usize) {
        let d = self.n_drones as usize;
        (
            self.skyscrapers_factor as usize * d,
            self.stations_factor as usize * d,
            self.dropzones_factor as usize * d,
            self.packets_factor as usize * d,
        )
    }

    /// Total cells the world must be able to hold at once: every drone
    /// plus every ground object. This bounds the spawner's worst-case
    /// simultaneous demand.
    pub fn required_cells(&self) -> usize {
        let (sky, stations, zones, packets) = self.ground_counts();
        self.n_drones as usize + sky + stations + zones + packets
    }

    /// Validate the configuration and return the grid side N.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroDrones`] if `n_drones == 0`
    /// - [`ConfigError::InvalidDensity`] if the density is not in `(0, 1]`
    ///   while the grid side is derived from it
    /// - [`ConfigError::ZeroGrid`] if an explicit `grid_size` is 0
    /// - [`ConfigError::RateOutOfRange`] if a battery rate exceeds 100
    /// - [`ConfigError::CapacityExceeded`] if drones plus ground objects
    ///   cannot fit on the grid
    pub fn validate(&self) -> Result<u32, ConfigError> {
        if self.n_drones == 0 {
            return Err(ConfigError::ZeroDrones);
        }
        if self.grid_size.is_none()
            && !(self.drone_density.is_finite()
                && self.drone_density > 0.0
                && self.drone_density <= 1.0)
        {
            return Err(ConfigError::InvalidDensity {
                density: self.drone_density,
            });
        }
        if self.grid_size == Some(0) {
            return Err(ConfigError::ZeroGrid);
        }
        if self.discharge_rate > 100 {
            return Err(ConfigError::RateOutOfRange {
                name: "discharge_rate",
                value: self.discharge_rate,
            });
        }
        if self.charge_rate > 100 {
            return Err(ConfigError::RateOutOfRange {
                name: "charge_rate",
                value: self.charge_rate,
            });
        }
        let side = self.side();
        let capacity = (side as usize) * (side as usize);
        let required = self.required_cells();
        if required > capacity {
            return Err(ConfigError::CapacityExceeded { required, capacity });
        }
        Ok(side)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnvParams::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `n_drones` was 0; the world needs at least one drone.
    ZeroDrones,
    /// Drone density outside `(0, 1]` while the grid side is derived.
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },
    /// An explicit grid side of 0.
    ZeroGrid,
    /// A battery rate outside `[0, 100]`.
    RateOutOfRange {
        /// Which rate field.
        name: &'static str,
        /// The rejected value.
        value: u8,
    },
    /// More drones and ground objects than the grid has cells.
    CapacityExceeded {
        /// Cells needed for all drones and objects.
        required: usize,
        /// Cells available (N²).
        capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDrones => write!(f, "n_drones must be at least 1"),
            Self::InvalidDensity { density } => {
                write!(f, "drone_density {density} outside (0, 1]")
            }
            Self::ZeroGrid => write!(f, "grid_size must be at least 1"),
            Self::RateOutOfRange { name, value } => {
                write!(f, "{name} {value} outside [0, 100]")
            }
            Self::CapacityExceeded { required, capacity } => {
                write!(
                    f,
                    "world needs {required} cells but the grid has {capacity}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        let params = EnvParams::default();
        // D=3 at density 0.05: N = ceil(sqrt(60)) = 8.
        assert_eq!(params.validate(), Ok(8));
    }

    #[test]
    fn explicit_grid_size_wins() {
        let params = EnvParams {
            grid_size: Some(16),
            ..EnvParams::default()
        };
        assert_eq!(params.validate(), Ok(16));
    }

    #[test]
    fn zero_drones_rejected() {
        let params = EnvParams {
            n_drones: 0,
            ..EnvParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::ZeroDrones));
    }

    #[test]
    fn bad_density_rejected_only_when_used() {
        let params = EnvParams {
            drone_density: 0.0,
            ..EnvParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidDensity { .. })
        ));

        // An explicit grid side makes the density irrelevant.
        let params = EnvParams {
            drone_density: 0.0,
            grid_size: Some(8),
            ..EnvParams::default()
        };
        assert_eq!(params.validate(), Ok(8));
    }

    #[test]
    fn over_capacity_rejected() {
        let params = EnvParams {
            n_drones: 4,
            grid_size: Some(4),
            ..EnvParams::default()
        };
        // 4 drones × (1 + 3 + 2 + 2 + 3) = 44 cells > 16.
        assert_eq!(
            params.validate(),
            Err(ConfigError::CapacityExceeded {
                required: 44,
                capacity: 16,
            })
        );
    }

    #[test]
    fn rate_over_100_rejected() {
        let params = EnvParams {
            charge_rate: 101,
            ..EnvParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "charge_rate",
                value: 101,
            })
        );
    }
}

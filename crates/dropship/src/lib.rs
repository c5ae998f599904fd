//! Dropship: a multi-agent delivery-drone grid world for reinforcement
//! learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Dropship sub-crates. For most users, adding `dropship` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dropship::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Build an environment: 3 drones on a derived 8×8 grid.
//! let mut world = DeliveryWorld::new(EnvParams::default()).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut state = world.reset(&mut rng).unwrap();
//!
//! // Everyone flies east for one tick.
//! let actions = vec![Action::Right; world.n_drones()];
//! let outcome = world.step(&mut rng, &mut state, &actions).unwrap();
//! assert_eq!(outcome.rewards.len(), 3);
//!
//! // Project observations for a learner.
//! let headings = dropship::obs::compass(&state);
//! assert_eq!(headings.len(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dropship-core` | Actions, tiles, error types |
//! | [`grid`] | `dropship-grid` | Cells, layers, world state |
//! | [`engine`] | `dropship-engine` | Parameters, spawner, tick resolver, batched env |
//! | [`obs`] | `dropship-obs` | Compass, lidar, grid tensor, text render |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: actions, tiles, errors (`dropship-core`).
pub use dropship_core as types;

/// Grid store and world state (`dropship-grid`).
pub use dropship_grid as grid;

/// Simulation engine: parameters, spawner, tick resolver, reset, and the
/// batched vectorized environment (`dropship-engine`).
pub use dropship_engine as engine;

/// Observation projections (`dropship-obs`).
pub use dropship_obs as obs;

/// Common imports for typical Dropship usage.
///
/// ```rust
/// use dropship::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use dropship_core::{Action, DroneId, Tile, FULL_CHARGE, NO_DRONE};

    // Errors
    pub use dropship_core::{InvalidIntent, SpawnError, StepError};
    pub use dropship_engine::{BatchError, ConfigError};

    // State
    pub use dropship_grid::{AirGrid, Cell, GroundGrid, WorldState};

    // Engine
    pub use dropship_engine::{
        BatchOutcome, BatchedEnv, DeliveryWorld, EnvParams, StepMetrics, StepOutcome,
    };

    // Observations
    pub use dropship_obs::{Cardinal, CompassObs, LidarObs};
}

//! Tick resolver, spawner, and episode bootstrap for the Dropship
//! simulation.
//!
//! [`DeliveryWorld`] is the user-facing API: validate parameters once,
//! [`reset()`](DeliveryWorld::reset) an episode, then
//! [`step()`](DeliveryWorld::step) it tick by tick. The tick is the unit
//! of atomicity — a pure function of `(state, intents, rng)` with no
//! locks, awaits, or partial results. [`BatchedEnv`] runs K environments
//! in lockstep for vectorized rollouts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batched;
pub mod config;
pub mod metrics;
mod reset;
pub mod spawn;
pub mod tick;
pub mod world;

pub use batched::{BatchError, BatchOutcome, BatchedEnv};
pub use config::{ConfigError, EnvParams, DEFAULT_DRONE_DENSITY};
pub use metrics::StepMetrics;
pub use spawn::{SpawnedCells, Spawner};
pub use tick::StepOutcome;
pub use world::DeliveryWorld;

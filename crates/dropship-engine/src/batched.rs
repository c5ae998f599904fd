//! Batched engine for vectorized RL training.
//!
//! [`BatchedEnv`] owns K delivery worlds and steps them all in a single
//! call, the data-parallel lockstep shape RL rollout loops want. Each
//! environment draws from its own ChaCha stream (`set_stream(k)` on a
//! shared seed), so trajectories are independent yet the whole batch is
//! reproducible from one seed.
//!
//! Worlds step sequentially today; the per-environment state split means
//! a `par_iter_mut` upgrade is a local change.

use crate::config::{ConfigError, EnvParams};
use crate::metrics::StepMetrics;
use crate::world::DeliveryWorld;
use dropship_core::{Action, SpawnError, StepError};
use dropship_grid::WorldState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

// ── Error type ──────────────────────────────────────────────────

/// Error from a batched operation, annotated with the failing
/// environment index where one exists.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchError {
    /// World construction rejected the parameters.
    Config(ConfigError),
    /// An environment's reset failed.
    Reset {
        /// Index of the environment that failed (0-based).
        env_index: usize,
        /// The underlying spawn error.
        error: SpawnError,
    },
    /// An environment's step failed.
    Step {
        /// Index of the environment that failed (0-based).
        env_index: usize,
        /// The underlying step error.
        error: StepError,
    },
    /// The flat action vector has the wrong length.
    ShapeMismatch {
        /// Expected length (`num_envs × n_drones`).
        expected: usize,
        /// Length actually received.
        got: usize,
    },
    /// An environment index out of range.
    InvalidIndex {
        /// The requested index.
        env_index: usize,
        /// Total number of environments.
        num_envs: usize,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Reset { env_index, error } => {
                write!(f, "env {env_index}: reset failed: {error}")
            }
            Self::Step { env_index, error } => {
                write!(f, "env {env_index}: step failed: {error}")
            }
            Self::ShapeMismatch { expected, got } => {
                write!(f, "batch action vector has length {got}, expected {expected}")
            }
            Self::InvalidIndex {
                env_index,
                num_envs,
            } => write!(
                f,
                "env index {env_index} out of range (num_envs={num_envs})"
            ),
        }
    }
}

impl std::error::Error for BatchError {}

impl From<ConfigError> for BatchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── BatchOutcome ────────────────────────────────────────────────

/// Result of one batched step.
///
/// Rewards and dones are flat, environment-major: slot `k · D + i` belongs
/// to drone `i + 1` of environment `k`.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchOutcome {
    /// Flat per-drone rewards across all environments.
    pub rewards: Vec<f32>,
    /// Flat per-drone done flags across all environments.
    pub dones: Vec<bool>,
    /// Per-environment tick metrics.
    pub metrics: Vec<StepMetrics>,
}

// ── BatchedEnv ──────────────────────────────────────────────────

/// K independent delivery environments stepped in lockstep.
pub struct BatchedEnv {
    worlds: Vec<DeliveryWorld>,
    states: Vec<WorldState>,
    rngs: Vec<ChaCha8Rng>,
    n_drones: usize,
}

impl BatchedEnv {
    /// Build and reset `num_envs` environments sharing one parameter set.
    ///
    /// Environment `k` draws from stream `k` of a ChaCha generator seeded
    /// with `seed`.
    ///
    /// # Errors
    ///
    /// [`BatchError::Config`] if the parameters are invalid,
    /// [`BatchError::Reset`] if an initial spawn fails.
    pub fn new(params: EnvParams, num_envs: usize, seed: u64) -> Result<Self, BatchError> {
        let n_drones = params.n_drones as usize;
        let mut worlds = Vec::with_capacity(num_envs);
        let mut states = Vec::with_capacity(num_envs);
        let mut rngs = Vec::with_capacity(num_envs);

        for env_index in 0..num_envs {
            let mut world = DeliveryWorld::new(params.clone())?;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(env_index as u64);
            let state = world
                .reset(&mut rng)
                .map_err(|error| BatchError::Reset { env_index, error })?;
            worlds.push(world);
            states.push(state);
            rngs.push(rng);
        }

        Ok(Self {
            worlds,
            states,
            rngs,
            n_drones,
        })
    }

    /// Number of environments K.
    pub fn num_envs(&self) -> usize {
        self.worlds.len()
    }

    /// Drones per environment D.
    pub fn n_drones(&self) -> usize {
        self.n_drones
    }

    /// All environment states, in index order.
    pub fn states(&self) -> &[WorldState] {
        &self.states
    }

    /// The state of environment `env_index`.
    pub fn state(&self, env_index: usize) -> Option<&WorldState> {
        self.states.get(env_index)
    }

    /// Re-bootstrap a single environment, keeping its rng stream.
    ///
    /// # Errors
    ///
    /// [`BatchError::InvalidIndex`] or [`BatchError::Reset`].
    pub fn reset_env(&mut self, env_index: usize) -> Result<(), BatchError> {
        let num_envs = self.worlds.len();
        let (world, rng) = match (self.worlds.get_mut(env_index), self.rngs.get_mut(env_index)) {
            (Some(w), Some(r)) => (w, r),
            _ => {
                return Err(BatchError::InvalidIndex {
                    env_index,
                    num_envs,
                })
            }
        };
        self.states[env_index] = world
            .reset(rng)
            .map_err(|error| BatchError::Reset { env_index, error })?;
        Ok(())
    }

    /// Step every environment once.
    ///
    /// `actions` is flat, environment-major: `num_envs × n_drones`
    /// entries, drone `i + 1` of environment `k` at slot `k · D + i`.
    ///
    /// # Errors
    ///
    /// [`BatchError::ShapeMismatch`] on a wrong-length action vector,
    /// [`BatchError::Step`] annotated with the failing environment.
    pub fn step(&mut self, actions: &[Action]) -> Result<BatchOutcome, BatchError> {
        let expected = self.worlds.len() * self.n_drones;
        if actions.len() != expected {
            return Err(BatchError::ShapeMismatch {
                expected,
                got: actions.len(),
            });
        }

        let mut rewards = Vec::with_capacity(expected);
        let mut dones = Vec::with_capacity(expected);
        let mut metrics = Vec::with_capacity(self.worlds.len());

        for (env_index, world) in self.worlds.iter_mut().enumerate() {
            let slice = &actions[env_index * self.n_drones..(env_index + 1) * self.n_drones];
            let outcome = world
                .step(
                    &mut self.rngs[env_index],
                    &mut self.states[env_index],
                    slice,
                )
                .map_err(|error| BatchError::Step { env_index, error })?;
            rewards.extend_from_slice(&outcome.rewards);
            dones.extend_from_slice(&outcome.dones);
            metrics.push(outcome.metrics);
        }

        Ok(BatchOutcome {
            rewards,
            dones,
            metrics,
        })
    }
}

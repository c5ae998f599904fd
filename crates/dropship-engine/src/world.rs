//! The environment front-end.

use crate::config::{ConfigError, EnvParams};
use crate::reset;
use crate::spawn::Spawner;
use crate::tick::{self, StepOutcome, StepScratch};
use dropship_core::{Action, SpawnError, StepError};
use dropship_grid::WorldState;
use rand::Rng;

/// A validated delivery world.
///
/// Owns the configuration plus the reusable spawner and tick scratch, so
/// steady-state stepping performs no allocation proportional to the grid.
/// State is explicit: [`reset()`](Self::reset) hands out a [`WorldState`]
/// and [`step()`](Self::step) advances it in place, which keeps K
/// environments steppable from one world or many, each with its own rng
/// stream.
///
/// # Example
///
/// ```
/// use dropship_core::Action;
/// use dropship_engine::{DeliveryWorld, EnvParams};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut world = DeliveryWorld::new(EnvParams::default()).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut state = world.reset(&mut rng).unwrap();
///
/// let actions = vec![Action::Stay; world.n_drones()];
/// let outcome = world.step(&mut rng, &mut state, &actions).unwrap();
/// assert_eq!(outcome.rewards.len(), world.n_drones());
/// ```
#[derive(Debug)]
pub struct DeliveryWorld {
    params: EnvParams,
    side: u32,
    spawner: Spawner,
    scratch: StepScratch,
}

impl DeliveryWorld {
    /// Validate `params` and build a world.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the parameters are structurally
    /// invalid; see [`EnvParams::validate`].
    pub fn new(params: EnvParams) -> Result<Self, ConfigError> {
        let side = params.validate()?;
        Ok(Self {
            params,
            side,
            spawner: Spawner::new(),
            scratch: StepScratch::default(),
        })
    }

    /// The environment parameters.
    pub fn params(&self) -> &EnvParams {
        &self.params
    }

    /// Grid side length N.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of drones D.
    pub fn n_drones(&self) -> usize {
        self.params.n_drones as usize
    }

    /// Build a fresh initial state.
    ///
    /// # Errors
    ///
    /// [`SpawnError`] is carried through from the spawner; for a world
    /// that passed validation it cannot occur.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<WorldState, SpawnError> {
        reset::bootstrap(&self.params, self.side, &mut self.spawner, rng)
    }

    /// Advance `state` by one tick.
    ///
    /// `actions[i]` is the intent of drone `i + 1`. The state must have
    /// been produced by this world's [`reset()`](Self::reset) (or share
    /// its geometry and drone count).
    ///
    /// # Errors
    ///
    /// [`StepError::ShapeMismatch`] if `actions.len()` differs from the
    /// state's drone count; [`StepError::InsufficientSpace`] only for a
    /// world whose validation was bypassed.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        state: &mut WorldState,
        actions: &[Action],
    ) -> Result<StepOutcome, StepError> {
        tick::resolve(
            &self.params,
            &mut self.scratch,
            &mut self.spawner,
            rng,
            state,
            actions,
        )
    }
}

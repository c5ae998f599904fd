//! Error types for the Dropship simulation.
//!
//! Runtime errors are confined to precondition failures and are fatal:
//! the simulator has no partial-tick semantics. Crashes *within* the
//! simulation are modeled outcomes returned through rewards and dones,
//! never `Err`.

use std::error::Error;
use std::fmt;

/// An action index outside the five discrete intents.
///
/// Raised at the decode boundary ([`Action::from_index`]); a typed
/// [`Action`] can never be invalid once constructed.
///
/// [`Action::from_index`]: crate::Action::from_index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidIntent {
    /// The rejected wire value.
    pub value: u8,
}

impl fmt::Display for InvalidIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid intent {}: expected 0..=4", self.value)
    }
}

impl Error for InvalidIntent {}

/// Errors from the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnError {
    /// Fewer free cells than items to place.
    ///
    /// The engine's capacity validation guarantees this cannot occur
    /// mid-episode; seeing it means the world was built with more objects
    /// than the grid can hold.
    InsufficientSpace {
        /// Number of cells the spawner needed.
        requested: usize,
        /// Number of free cells actually available.
        available: usize,
    },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSpace {
                requested,
                available,
            } => {
                write!(
                    f,
                    "insufficient space: {requested} items for {available} free cells"
                )
            }
        }
    }
}

impl Error for SpawnError {}

/// Errors from the tick resolver during `step()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// Intent vector length does not match the drone count.
    ShapeMismatch {
        /// Expected length (the drone count D).
        expected: usize,
        /// Length actually received.
        got: usize,
    },
    /// Respawn ran out of free cells; see [`SpawnError::InsufficientSpace`].
    InsufficientSpace {
        /// Number of cells the spawner needed.
        requested: usize,
        /// Number of free cells actually available.
        available: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "intent vector has length {got}, expected {expected}")
            }
            Self::InsufficientSpace {
                requested,
                available,
            } => {
                write!(
                    f,
                    "respawn needed {requested} free cells, found {available}"
                )
            }
        }
    }
}

impl Error for StepError {}

impl From<SpawnError> for StepError {
    fn from(e: SpawnError) -> Self {
        match e {
            SpawnError::InsufficientSpace {
                requested,
                available,
            } => StepError::InsufficientSpace {
                requested,
                available,
            },
        }
    }
}

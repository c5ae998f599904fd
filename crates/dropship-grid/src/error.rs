//! Invariant audit errors.

use crate::cell::Cell;
use dropship_core::DroneId;
use std::fmt;

/// A violation found by [`WorldState::check`](crate::WorldState::check).
///
/// These indicate a bug in the engine, not a recoverable condition; the
/// audit exists for tests and debug assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantError {
    /// Air and ground layers disagree about the grid side.
    SideMismatch {
        /// Air-layer side.
        air: u32,
        /// Ground-layer side.
        ground: u32,
    },
    /// The per-drone side arrays have inconsistent lengths.
    ArrayLenMismatch {
        /// `positions.len()`.
        positions: usize,
        /// `carrying.len()`.
        carrying: usize,
        /// `charge.len()`.
        charge: usize,
    },
    /// A cached drone position lies outside the grid.
    PositionOutOfBounds {
        /// The drone.
        id: DroneId,
        /// Its cached position.
        cell: Cell,
    },
    /// The air layer does not hold the drone where its cached position says.
    PositionMismatch {
        /// The drone.
        id: DroneId,
        /// Its cached position.
        cached: Cell,
        /// What the air layer holds there instead.
        found: DroneId,
    },
    /// An air cell holds an index outside `1..=D`.
    UnknownDroneIndex {
        /// The offending cell.
        cell: Cell,
        /// The value found there.
        value: DroneId,
    },
    /// A drone index appears in more than one air cell.
    DuplicateDrone {
        /// The drone.
        id: DroneId,
        /// First occurrence in row-major order.
        first: Cell,
        /// Second occurrence.
        second: Cell,
    },
    /// A drone sits on a skyscraper cell.
    DroneOnSkyscraper {
        /// The drone.
        id: DroneId,
        /// The skyscraper cell.
        cell: Cell,
    },
    /// A battery value outside `[0, 100]`.
    ChargeOutOfRange {
        /// The drone.
        id: DroneId,
        /// Its charge.
        charge: u8,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideMismatch { air, ground } => {
                write!(f, "air side {air} != ground side {ground}")
            }
            Self::ArrayLenMismatch {
                positions,
                carrying,
                charge,
            } => write!(
                f,
                "side arrays disagree: positions={positions}, carrying={carrying}, charge={charge}"
            ),
            Self::PositionOutOfBounds { id, cell } => {
                write!(f, "drone {id} cached at out-of-bounds {cell}")
            }
            Self::PositionMismatch { id, cached, found } => {
                write!(f, "drone {id} cached at {cached} but air holds {found}")
            }
            Self::UnknownDroneIndex { cell, value } => {
                write!(f, "air cell {cell} holds unknown index {value}")
            }
            Self::DuplicateDrone { id, first, second } => {
                write!(f, "drone {id} appears at both {first} and {second}")
            }
            Self::DroneOnSkyscraper { id, cell } => {
                write!(f, "drone {id} sits on skyscraper at {cell}")
            }
            Self::ChargeOutOfRange { id, charge } => {
                write!(f, "drone {id} charge {charge} outside [0, 100]")
            }
        }
    }
}

impl std::error::Error for InvariantError {}

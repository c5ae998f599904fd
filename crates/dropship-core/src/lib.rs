//! Core types for the Dropship delivery-drone simulation.
//!
//! This is the leaf crate with zero internal Dropship dependencies. It
//! defines the vocabulary shared by every other crate in the workspace:
//! drone intents, ground tile tags, and the error types of the step and
//! spawn pipelines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod tile;

// Re-export core types at crate root for convenience.
pub use action::Action;
pub use error::{InvalidIntent, SpawnError, StepError};
pub use tile::Tile;

/// Index of a drone on the air layer.
///
/// Drones are numbered `1..=D`; `0` is reserved to mean "no drone" so the
/// air layer can use the same integer type for occupancy and absence.
pub type DroneId = u16;

/// Air-layer value meaning "no drone in this cell".
pub const NO_DRONE: DroneId = 0;

/// Battery level that a drone starts with and is restored to on respawn.
pub const FULL_CHARGE: u8 = 100;

//! Grid store and world state for the Dropship simulation.
//!
//! Two parallel dense N×N layers — drone occupancy in the air, object tags
//! on the ground — plus per-drone side arrays for position, cargo, and
//! battery. Everything here is constant-time cell access; enumeration of
//! free cells is left to the spawner, which owns the only full-grid walk
//! in the system.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod air;
pub mod cell;
pub mod error;
pub mod ground;
pub mod state;

pub use air::AirGrid;
pub use cell::Cell;
pub use error::InvariantError;
pub use ground::GroundGrid;
pub use state::WorldState;

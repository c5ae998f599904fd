//! Observation projections for the Dropship simulation.
//!
//! The engine hands out full [`WorldState`](dropship_grid::WorldState)s;
//! learners rarely want them raw. This crate projects state into the
//! three standard views — a compass heading to the current target, the
//! compass plus a lidar obstacle mask, and a dense per-cell tensor — and
//! a fixed-width text board for logs.
//!
//! Projections read state, never mutate it, and are free to walk the
//! grid: the no-scan constraint binds the tick resolver, not egress.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ascii;
pub mod compass;
pub mod grid_view;
pub mod lidar;

pub use ascii::render;
pub use compass::{compass, Cardinal, CompassObs};
pub use grid_view::{grid_view, GRID_VIEW_CHANNELS};
pub use lidar::{lidar, LidarObs};

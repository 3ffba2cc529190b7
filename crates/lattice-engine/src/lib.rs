//! Lattice engine crate.
//!
//! This crate owns the pieces every widget layer needs regardless of how it
//! is drawn: geometry, logger setup and text measurement.

pub mod coords;
pub mod logging;
pub mod text;

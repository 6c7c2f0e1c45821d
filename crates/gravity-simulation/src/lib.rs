//! # Gravity Simulation Engine
//!
//! Fixed-timestep N-body simulation: a ticker that turns wall-clock time
//! into whole steps, and a body set advanced by pairwise gravity.

pub mod error;
pub mod params;
pub mod scenario;
pub mod simulation;
pub mod ticker;

pub use error::*;
pub use params::*;
pub use scenario::*;
pub use simulation::*;
pub use ticker::*;

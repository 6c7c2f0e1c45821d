//! # Gravity Physics
//!
//! Point-mass bodies, the 2D vector type they move in, and the pairwise
//! Newtonian impulse that drives them.

pub mod body;
pub mod constants;
pub mod forces;
pub mod vector;

pub use body::*;
pub use constants::*;
pub use forces::*;
pub use vector::*;

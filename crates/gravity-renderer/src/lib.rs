//! # Gravity Renderer
//!
//! Per-frame geometry batching for the gravity simulation, and the wgpu
//! backend that draws a finished batch in a single indexed draw call.

pub mod color;
pub mod error;
pub mod mesh;
pub mod renderer;
pub mod sink;
pub mod vertex;
pub mod viewport;

pub use color::*;
pub use error::*;
pub use mesh::*;
pub use renderer::*;
pub use sink::*;
pub use vertex::*;
pub use viewport::*;
